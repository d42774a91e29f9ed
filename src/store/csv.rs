use csv::{Reader, WriterBuilder};
use std::path::{Path, PathBuf};

use super::create_file_parent;
use crate::domain::{CSV_HEADERS, Contact};
use crate::errors::AppError;

/// The on-disk side of the store: one CSV file holding the whole
/// contact set. Every save rewrites the file in place; there is no
/// temp-file-and-rename step, so a crash mid-write can corrupt it.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty contact book. Anything else that
    /// fails to parse fails the whole load.
    pub fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = Reader::from_path(&self.path)?;

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        Ok(contacts)
    }

    /// Overwrites the file with the header row plus one row per
    /// contact, in the given order. The header is written even when
    /// the set is empty.
    pub fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(CSV_HEADERS)?;
        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;
        Ok(())
    }
}
