//! Store-agnostic pieces shared by every repository adapter

pub mod error;
pub mod page;
pub mod retry;
pub mod timestamp;

pub use error::{DatabaseError, DatabaseResult};
pub use page::{Page, PageRequest};
pub use retry::{RetryConfig, retry_with_backoff};
pub use timestamp::{next_update_timestamp, now_micros};
