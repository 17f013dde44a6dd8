use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use crate::domain::Student;
use crate::infrastructure::{PersistenceError, PersistenceResult, RosterRepository};

/// In-memory repository whose clones share storage, so a test can keep a
/// handle after giving one to `App`.
#[derive(Clone, Default)]
pub(crate) struct MemoryRepository {
    pub stored: Rc<RefCell<Vec<Student>>>,
    pub saves: Rc<Cell<usize>>,
    pub fail_save: Rc<Cell<bool>>,
    pub fail_load: Rc<Cell<bool>>,
}

impl MemoryRepository {
    pub fn with(records: &[(&str, &str, &str)]) -> Self {
        let repo = Self::default();
        repo.stored.replace(
            records
                .iter()
                .map(|(name, roll, grade)| Student::new(name, roll, grade).unwrap())
                .collect(),
        );
        repo
    }

    pub fn stored(&self) -> Vec<Student> {
        self.stored.borrow().clone()
    }
}

impl RosterRepository for MemoryRepository {
    fn load(&self) -> PersistenceResult<Vec<Student>> {
        if self.fail_load.get() {
            return Err(PersistenceError::UnsupportedVersion { found: 9, expected: 1 });
        }
        Ok(self.stored())
    }

    fn save(&self, students: &[Student]) -> PersistenceResult<()> {
        if self.fail_save.get() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only store").into());
        }
        self.stored.replace(students.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
