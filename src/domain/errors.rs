use thiserror::Error;

use super::models::StudentField;

/// A record was rejected because a required field was blank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all fields: {0} is empty")]
    EmptyField(StudentField),
}

/// A delete was requested without a usable selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select a student to delete")]
    NoSelection,

    #[error("Row {index} is out of range (roster has {len} students)")]
    OutOfRange { index: usize, len: usize },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
