//! Name search over student records.
//!
//! Searching never touches the roster itself; it only decides which
//! records a view should display.

use super::models::Student;

/// A case-insensitive substring query against student names.
///
/// The query is trimmed before use, and a blank query matches every record.
///
/// # Examples
///
/// ```
/// use roster::domain::{NameQuery, Student};
///
/// let ann = Student::new("Ann", "101", "A").unwrap();
/// assert!(NameQuery::new("AN").matches(&ann));
/// assert!(NameQuery::new("   ").matches(&ann));
/// assert!(!NameQuery::new("bob").matches(&ann));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    needle: String,
}

impl NameQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, student: &Student) -> bool {
        self.is_empty() || student.name().to_lowercase().contains(&self.needle)
    }
}
