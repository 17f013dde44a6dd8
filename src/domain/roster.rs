//! The in-memory record store.

use super::errors::{SelectionError, ValidationResult};
use super::models::Student;
use super::services::NameQuery;

/// Ordered collection of student records.
///
/// Records keep insertion order and are addressed by position. Roll
/// numbers are not required to be unique.
///
/// # Examples
///
/// ```
/// use roster::domain::Roster;
///
/// let mut roster = Roster::default();
/// roster.add("Ann", "101", "A").unwrap();
/// roster.add("Bob", "102", "B").unwrap();
///
/// let found = roster.search("an");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name(), "Ann");
///
/// roster.delete_at(Some(0)).unwrap();
/// assert_eq!(roster.get(0).unwrap().name(), "Bob");
///
/// roster.clear();
/// assert!(roster.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Appends a record built from the given fields.
    ///
    /// The roster is left untouched if any field is blank.
    pub fn add(&mut self, name: &str, roll_number: &str, grade: &str) -> ValidationResult<()> {
        let student = Student::new(name, roll_number, grade)?;
        self.students.push(student);
        Ok(())
    }

    /// Removes and returns the record at `selection`.
    ///
    /// `None` means nothing is selected. Later records shift down by one.
    pub fn delete_at(&mut self, selection: Option<usize>) -> Result<Student, SelectionError> {
        let index = selection.ok_or(SelectionError::NoSelection)?;
        if index >= self.students.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.students.len(),
            });
        }
        Ok(self.students.remove(index))
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Records whose name contains `query`, ignoring case, in roster order.
    pub fn search(&self, query: &str) -> Vec<&Student> {
        let query = NameQuery::new(query);
        self.students.iter().filter(|s| query.matches(s)).collect()
    }

    /// Positions of the records [`Roster::search`] would return.
    pub fn matching_positions(&self, query: &str) -> Vec<usize> {
        let query = NameQuery::new(query);
        self.students
            .iter()
            .enumerate()
            .filter(|(_, s)| query.matches(s))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

impl From<Vec<Student>> for Roster {
    fn from(students: Vec<Student>) -> Self {
        Self { students }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StudentField, ValidationError};

    fn roster_of(names: &[&str]) -> Roster {
        let mut roster = Roster::default();
        for (i, name) in names.iter().enumerate() {
            roster.add(name, &format!("{}", 100 + i), "A").unwrap();
        }
        roster
    }

    fn names(roster: &Roster) -> Vec<&str> {
        roster.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let roster = roster_of(&["Ann", "Bob", "Cid"]);
        assert_eq!(names(&roster), vec!["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn test_add_allows_duplicate_roll_numbers() {
        let mut roster = Roster::default();
        roster.add("Ann", "101", "A").unwrap();
        roster.add("Ann", "101", "A").unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_fields_without_mutation() {
        let mut roster = roster_of(&["Ann"]);
        let before = roster.clone();

        for (name, roll, grade, field) in [
            ("", "1", "A", StudentField::Name),
            ("Bob", "  ", "A", StudentField::RollNumber),
            ("Bob", "1", "\t", StudentField::Grade),
        ] {
            assert_eq!(
                roster.add(name, roll, grade),
                Err(ValidationError::EmptyField(field))
            );
            assert_eq!(roster, before);
        }
    }

    #[test]
    fn test_delete_at_removes_and_shifts() {
        let mut roster = roster_of(&["Ann", "Bob", "Cid", "Dee"]);
        let removed = roster.delete_at(Some(1)).unwrap();

        assert_eq!(removed.name(), "Bob");
        assert_eq!(names(&roster), vec!["Ann", "Cid", "Dee"]);
    }

    #[test]
    fn test_delete_at_last_and_first() {
        let mut roster = roster_of(&["Ann", "Bob", "Cid"]);
        roster.delete_at(Some(2)).unwrap();
        roster.delete_at(Some(0)).unwrap();
        assert_eq!(names(&roster), vec!["Bob"]);
    }

    #[test]
    fn test_delete_at_without_selection() {
        let mut roster = roster_of(&["Ann"]);
        assert_eq!(roster.delete_at(None), Err(SelectionError::NoSelection));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let mut roster = roster_of(&["Ann", "Bob"]);
        assert_eq!(
            roster.delete_at(Some(2)),
            Err(SelectionError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(names(&roster), vec!["Ann", "Bob"]);

        let mut empty = Roster::default();
        assert_eq!(
            empty.delete_at(Some(0)),
            Err(SelectionError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_clear() {
        let mut roster = roster_of(&["Ann", "Bob"]);
        roster.clear();
        assert!(roster.is_empty());

        roster.clear();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        let roster = roster_of(&["Ann", "Bob", "Cid"]);
        let found: Vec<&str> = roster.search("").iter().map(|s| s.name()).collect();
        assert_eq!(found, vec!["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn test_search_keeps_order_and_store() {
        let roster = roster_of(&["Dan", "Bob", "anna", "Joanne"]);
        let before = roster.clone();

        let found: Vec<&str> = roster.search("AN").iter().map(|s| s.name()).collect();
        assert_eq!(found, vec!["Dan", "anna", "Joanne"]);
        assert_eq!(roster.matching_positions("AN"), vec![0, 2, 3]);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_search_no_match() {
        let roster = roster_of(&["Ann"]);
        assert!(roster.search("zed").is_empty());
        assert!(roster.matching_positions("zed").is_empty());
    }

    #[test]
    fn test_walkthrough() {
        let mut roster = Roster::default();
        roster.add("Ann", "101", "A").unwrap();
        roster.add("Bob", "102", "B").unwrap();

        assert_eq!(roster.search("an"), vec![&Student::new("Ann", "101", "A").unwrap()]);

        roster.delete_at(Some(0)).unwrap();
        assert_eq!(roster.students(), &[Student::new("Bob", "102", "B").unwrap()]);

        roster.clear();
        assert!(roster.students().is_empty());
    }
}
