use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Current time truncated to the precision PostgreSQL `timestamptz` stores.
pub fn now_micros() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now)
}

/// Timestamp for a write that replaces a row last touched at `previous`.
///
/// Always strictly after `previous`, even when the clock has not moved a full
/// microsecond since the last write.
pub fn next_update_timestamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = now_micros();
    match previous {
        Some(prev) if now <= prev => prev + TimeDelta::microseconds(1),
        _ => now,
    }
}
