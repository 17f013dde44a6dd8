//! Whole-roster snapshots on disk.
//!
//! The roster is stored as a single pretty-printed JSON document carrying a
//! format version. Every save rewrites the full document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::error::{PersistenceError, PersistenceResult};
use crate::domain::Student;

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// Storage for the roster as a whole.
///
/// The application only talks to this trait, so tests and alternative
/// back ends can be swapped in.
pub trait RosterRepository {
    /// Reads the stored roster. A store that has never been written yields
    /// an empty roster.
    fn load(&self) -> PersistenceResult<Vec<Student>>;

    /// Replaces the stored roster with `students`.
    fn save(&self, students: &[Student]) -> PersistenceResult<()>;

    /// Human readable location, shown in status messages.
    fn location(&self) -> String;
}

#[derive(Debug, Serialize, Deserialize)]
struct RosterDocument {
    version: u32,
    students: Vec<StudentRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StudentRecord {
    name: String,
    roll_number: String,
    grade: String,
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name().to_string(),
            roll_number: student.roll_number().to_string(),
            grade: student.grade().to_string(),
        }
    }
}

/// JSON file backed repository.
///
/// # Examples
///
/// ```
/// use roster::domain::Student;
/// use roster::infrastructure::{FileRepository, RosterRepository};
///
/// let dir = tempfile::tempdir().unwrap();
/// let repo = FileRepository::new(dir.path().join("students.json"));
/// assert!(repo.load().unwrap().is_empty());
///
/// let students = vec![Student::new("Ann", "101", "A").unwrap()];
/// repo.save(&students).unwrap();
/// assert_eq!(repo.load().unwrap(), students);
/// ```
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl RosterRepository for FileRepository {
    fn load(&self) -> PersistenceResult<Vec<Student>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no roster file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document: RosterDocument = serde_json::from_str(&content)?;
        if document.version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: document.version,
                expected: FORMAT_VERSION,
            });
        }

        let students = document
            .students
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Student::new(&record.name, &record.roll_number, &record.grade)
                    .map_err(|source| PersistenceError::InvalidRecord { index, source })
            })
            .collect::<PersistenceResult<Vec<_>>>()?;

        info!("loaded {} students from {}", students.len(), self.path.display());
        Ok(students)
    }

    fn save(&self, students: &[Student]) -> PersistenceResult<()> {
        let document = RosterDocument {
            version: FORMAT_VERSION,
            students: students.iter().map(StudentRecord::from).collect(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        // Written beside the target so the final rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| PersistenceError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;

        info!("saved {} students to {}", students.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Student> {
        vec![
            Student::new("Ann", "101", "A").unwrap(),
            Student::new("Bob", "102", "B").unwrap(),
            Student::new("Ann", "101", "A+").unwrap(),
        ]
    }

    fn repo_in(dir: &TempDir) -> FileRepository {
        FileRepository::new(dir.path().join("students.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        repo.save(&sample()).unwrap();
        assert_eq!(repo.load().unwrap(), sample());
    }

    #[test]
    fn test_round_trip_empty_roster() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        repo.save(&sample()).unwrap();
        repo.save(&[]).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        repo.save(&sample()).unwrap();
        let only_bob = vec![Student::new("Bob", "102", "B").unwrap()];
        repo.save(&only_bob).unwrap();

        assert_eq!(repo.load().unwrap(), only_bob);
    }

    #[test]
    fn test_saved_document_is_versioned_json() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        repo.save(&sample()[..1]).unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["students"][0]["name"], "Ann");
        assert_eq!(value["students"][0]["roll_number"], "101");
        assert_eq!(value["students"][0]["grade"], "A");
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        repo.save(&sample()).unwrap();
        repo.save(&sample()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        fs::write(repo.path(), "not json at all").unwrap();

        assert!(matches!(repo.load(), Err(PersistenceError::Json(_))));
    }

    #[test]
    fn test_unknown_version_is_an_error() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        fs::write(repo.path(), r#"{"version": 7, "students": []}"#).unwrap();

        assert!(matches!(
            repo.load(),
            Err(PersistenceError::UnsupportedVersion { found: 7, expected: 1 })
        ));
    }

    #[test]
    fn test_blank_field_on_disk_is_rejected() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        fs::write(
            repo.path(),
            r#"{"version": 1, "students": [
                {"name": "Ann", "roll_number": "101", "grade": "A"},
                {"name": "  ", "roll_number": "102", "grade": "B"}
            ]}"#,
        )
        .unwrap();

        assert!(matches!(
            repo.load(),
            Err(PersistenceError::InvalidRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let repo = FileRepository::new(dir.path().join("nope").join("students.json"));

        assert!(matches!(repo.save(&sample()), Err(PersistenceError::Io(_))));
    }

    #[test]
    fn test_relative_path_uses_current_dir_for_temp_file() {
        let repo = FileRepository::new("students.json");
        assert_eq!(repo.parent_dir(), Path::new("."));
    }
}
