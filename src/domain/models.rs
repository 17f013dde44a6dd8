use std::fmt;

use super::errors::{ValidationError, ValidationResult};

/// The three fields every student record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    RollNumber,
    Grade,
}

impl StudentField {
    /// Fields in form and table column order.
    pub const ALL: [StudentField; 3] = [StudentField::Name, StudentField::RollNumber, StudentField::Grade];

    pub fn label(self) -> &'static str {
        match self {
            StudentField::Name => "Name",
            StudentField::RollNumber => "Roll No",
            StudentField::Grade => "Grade",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentField::Name => write!(f, "name"),
            StudentField::RollNumber => write!(f, "roll number"),
            StudentField::Grade => write!(f, "grade"),
        }
    }
}

/// A single student record.
///
/// Fields are only reachable through [`Student::new`], which trims each
/// value and refuses blanks, so every `Student` in existence has three
/// non-empty fields.
///
/// # Examples
///
/// ```
/// use roster::domain::{Student, StudentField, ValidationError};
///
/// let ann = Student::new("  Ann ", "101", "A").unwrap();
/// assert_eq!(ann.name(), "Ann");
///
/// let err = Student::new("Bob", "   ", "B").unwrap_err();
/// assert_eq!(err, ValidationError::EmptyField(StudentField::RollNumber));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    roll_number: String,
    grade: String,
}

impl Student {
    pub fn new(name: &str, roll_number: &str, grade: &str) -> ValidationResult<Self> {
        Ok(Self {
            name: required(StudentField::Name, name)?,
            roll_number: required(StudentField::RollNumber, roll_number)?,
            grade: required(StudentField::Grade, grade)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> &str {
        &self.roll_number
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn field(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::RollNumber => &self.roll_number,
            StudentField::Grade => &self.grade,
        }
    }
}

fn required(field: StudentField, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let student = Student::new(" Ann\t", " 101 ", "A\n").unwrap();
        assert_eq!(student.name(), "Ann");
        assert_eq!(student.roll_number(), "101");
        assert_eq!(student.grade(), "A");
    }

    #[test]
    fn test_new_rejects_blank_fields_in_order() {
        assert_eq!(
            Student::new("", "", "").unwrap_err(),
            ValidationError::EmptyField(StudentField::Name)
        );
        assert_eq!(
            Student::new("Ann", " ", "A").unwrap_err(),
            ValidationError::EmptyField(StudentField::RollNumber)
        );
        assert_eq!(
            Student::new("Ann", "101", "\t").unwrap_err(),
            ValidationError::EmptyField(StudentField::Grade)
        );
    }

    #[test]
    fn test_field_accessor_matches_named_accessors() {
        let student = Student::new("Ann", "101", "A").unwrap();
        assert_eq!(student.field(StudentField::Name), "Ann");
        assert_eq!(student.field(StudentField::RollNumber), "101");
        assert_eq!(student.field(StudentField::Grade), "A");
    }

    #[test]
    fn test_error_message_names_the_field() {
        let err = Student::new("Ann", "", "A").unwrap_err();
        assert_eq!(err.to_string(), "Please fill all fields: roll number is empty");
    }
}
