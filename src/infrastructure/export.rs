use std::path::Path;

use log::info;

use super::error::PersistenceResult;
use crate::domain::{Student, StudentField};

pub struct CsvExporter;

impl CsvExporter {
    /// Writes the roster as CSV with the same columns as the table view.
    pub fn export_roster(students: &[Student], path: &Path) -> PersistenceResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(StudentField::ALL.map(StudentField::label))?;
        for student in students {
            writer.write_record(StudentField::ALL.map(|field| student.field(field)))?;
        }
        writer.flush()?;

        info!("exported {} students to {}", students.len(), path.display());
        Ok(())
    }
}
