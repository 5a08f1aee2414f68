use std::cell::RefCell;

use anyhow::Result;

use crate::model::entry::DailyEntry;
use crate::repository::traits::EntryRepository;

/// Keeps the entry blob in process memory. Nothing survives the process.
#[derive(Default)]
pub struct MemoryEntryRepository {
    entries: RefCell<Vec<DailyEntry>>,
}

impl MemoryEntryRepository {
    pub fn new(entries: Vec<DailyEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }

    pub fn snapshot(&self) -> Vec<DailyEntry> {
        self.entries.borrow().clone()
    }
}

impl EntryRepository for MemoryEntryRepository {
    fn load(&self) -> Result<Vec<DailyEntry>> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[DailyEntry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
