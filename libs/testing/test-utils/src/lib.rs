//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: deterministic names, descriptions and ids derived from the test name
//! - `assertions`: assertion helpers for `Option` results and pages
//!
//! # Usage
//!
//! ```
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("test_create_project");
//! let name = builder.name("project", "main");
//! let missing = builder.missing_id();
//! assert!(missing > 1_000);
//! ```

/// Builder for test data with deterministic randomization
///
/// Storage ids are assigned sequentially from 1, so [`missing_id`](Self::missing_id)
/// stays well clear of anything a test creates.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-{prefix}-{seed}-{suffix}`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Numbered names for bulk inserts: `name(prefix, "0")`, `name(prefix, "1")`, ...
    pub fn names(&self, prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| self.name(prefix, &i.to_string())).collect()
    }

    pub fn description(&self, suffix: &str) -> String {
        format!("task {} for seed {}", suffix, self.seed)
    }

    /// An id no test will have created
    pub fn missing_id(&self) -> i64 {
        1_000 + (self.seed % 1_000_000) as i64
    }
}

/// Test assertion helpers
pub mod assertions {
    use database::Page;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that an optional value is None
    pub fn assert_none<T: std::fmt::Debug>(value: Option<T>, context: &str) {
        if let Some(value) = value {
            panic!("{}: expected None, got Some({:?})", context, value);
        }
    }

    /// Assert the slice length and total count of a page
    pub fn assert_page_shape<T>(page: &Page<T>, len: usize, total: u64, context: &str) {
        assert_eq!(
            page.number_of_elements(),
            len,
            "{}: expected {} elements on page {}, got {}",
            context,
            len,
            page.page,
            page.number_of_elements()
        );
        assert_eq!(
            page.total_elements, total,
            "{}: expected total {}, got {}",
            context, total, page.total_elements
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{Page, PageRequest};

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.missing_id(), builder2.missing_id());
        assert_eq!(
            builder1.name("project", "test"),
            builder2.name("project", "test")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.name("project", "a"), builder2.name("project", "a"));
    }

    #[test]
    fn test_names_are_numbered() {
        let builder = TestDataBuilder::new(7);
        assert_eq!(
            builder.names("project", 2),
            vec!["test-project-7-0".to_string(), "test-project-7-1".to_string()]
        );
    }

    #[test]
    fn test_assert_page_shape_accepts_matching_page() {
        let page = Page::new(vec![1, 2], PageRequest::new(0, 5), 2);
        assertions::assert_page_shape(&page, 2, 2, "two items");
    }

    #[test]
    #[should_panic(expected = "expected None")]
    fn test_assert_none_panics_on_some() {
        assertions::assert_none(Some(1), "value");
    }
}
