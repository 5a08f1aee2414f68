use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json;

use crate::config::default_data_dir;
use crate::model::entry::DailyEntry;
use crate::repository::traits::EntryRepository;

/// Fixed key the entry blob is stored under.
pub const ENTRIES_KEY: &str = "pioneerEntries";

#[derive(Clone)]
pub struct FileEntryRepository {
    file_path: PathBuf,
}

impl FileEntryRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)?;
        path.push(format!("{}.json", ENTRIES_KEY));

        Ok(FileEntryRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl EntryRepository for FileEntryRepository {
    fn load(&self) -> Result<Vec<DailyEntry>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let entries = serde_json::from_reader(reader)?;
        Ok(entries)
    }

    fn save(&self, entries: &[DailyEntry]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}
