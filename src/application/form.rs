//! Line editing for the add-student form and the other text prompts.

use crate::domain::StudentField;

/// A single-line text buffer with a cursor.
///
/// The cursor counts characters, not bytes, so multi-byte input edits
/// correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// The three input fields of the add-student form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentForm {
    pub name: TextInput,
    pub roll_number: TextInput,
    pub grade: TextInput,
    pub focus: StudentField,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            name: TextInput::default(),
            roll_number: TextInput::default(),
            grade: TextInput::default(),
            focus: StudentField::Name,
        }
    }
}

impl StudentForm {
    pub fn input(&self, field: StudentField) -> &TextInput {
        match field {
            StudentField::Name => &self.name,
            StudentField::RollNumber => &self.roll_number,
            StudentField::Grade => &self.grade,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            StudentField::Name => &mut self.name,
            StudentField::RollNumber => &mut self.roll_number,
            StudentField::Grade => &mut self.grade,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            StudentField::Name => StudentField::RollNumber,
            StudentField::RollNumber => StudentField::Grade,
            StudentField::Grade => StudentField::Name,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            StudentField::Name => StudentField::Grade,
            StudentField::RollNumber => StudentField::Name,
            StudentField::Grade => StudentField::RollNumber,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
