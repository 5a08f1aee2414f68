use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::entry::{DailyEntry, NewEntry};
use crate::model::totals::Totals;
use crate::repository::EntryRepository;
use crate::service::aggregator::{aggregate, daily_hours};
use crate::service::backup::{export_json, parse_backup};
use crate::service::progress::ProgressReport;

/// Owns the entry collection and writes it through to the repository on
/// every mutation.
///
/// Entries are kept in ascending date order; entries sharing a date keep
/// their insertion order. Totals are recomputed on every read.
pub struct EntryStore<R: EntryRepository> {
    repo: R,
    entries: Vec<DailyEntry>,
}

impl<R: EntryRepository> EntryStore<R> {
    /// Loads the stored collection. Unreadable storage is logged and
    /// treated as empty.
    pub fn open(repo: R) -> Self {
        let entries = match repo.load() {
            Ok(entries) => entries,
            Err(e) => {
                let err = StoreError::PersistenceRead(e.to_string());
                warn!("{}; starting with no entries", err);
                Vec::new()
            }
        };
        debug!(count = entries.len(), "entries loaded");
        Self { repo, entries }
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add(&mut self, entry: NewEntry) -> Result<DailyEntry, StoreError> {
        if !(entry.hours.is_finite() && entry.hours > 0.0) {
            return Err(StoreError::Validation(format!(
                "hours must be a finite number greater than zero, got {}",
                entry.hours
            )));
        }

        let created = DailyEntry::from_new(entry);
        let mut next = self.entries.clone();
        next.push(created.clone());
        sort_by_date(&mut next);

        self.commit(next)?;
        debug!(id = %created.id, date = %created.date, hours = created.hours, "entry added");
        Ok(created)
    }

    /// Removes the entry with `id`. Returns `false` when there was none.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.entries.iter().any(|e| e.id == id) {
            return Ok(false);
        }

        let next = self.entries.iter().filter(|e| e.id != id).cloned().collect();
        self.commit(next)?;
        debug!(id, "entry deleted");
        Ok(true)
    }

    /// Replaces the whole collection.
    pub fn import(&mut self, mut entries: Vec<DailyEntry>) -> Result<(), StoreError> {
        if let Some(bad) = entries.iter().find(|e| !(e.hours.is_finite() && e.hours >= 0.0)) {
            return Err(StoreError::Format(format!("entry {} has invalid hours", bad.id)));
        }

        sort_by_date(&mut entries);
        let count = entries.len();
        self.commit(entries)?;
        debug!(count, "entries imported");
        Ok(())
    }

    /// Decodes a backup payload and imports it. Returns the number of entries.
    pub fn import_json(&mut self, text: &str) -> Result<usize, StoreError> {
        let entries = parse_backup(text)?;
        let count = entries.len();
        self.import(entries)?;
        Ok(count)
    }

    pub fn export_json(&self) -> anyhow::Result<String> {
        export_json(&self.entries)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(Vec::new())?;
        debug!("entries cleared");
        Ok(())
    }

    pub fn totals(&self, now: NaiveDate) -> Totals {
        aggregate(&self.entries, now)
    }

    pub fn progress(&self, now: NaiveDate, yearly_goal: f64) -> ProgressReport {
        ProgressReport::evaluate(&self.totals(now), yearly_goal, now)
    }

    pub fn daily_hours(&self) -> BTreeMap<NaiveDate, f64> {
        daily_hours(&self.entries)
    }

    // Persist first so a failed save leaves the in-memory state untouched.
    fn commit(&mut self, next: Vec<DailyEntry>) -> Result<(), StoreError> {
        self.repo.save(&next)?;
        self.entries = next;
        Ok(())
    }
}

fn sort_by_date(entries: &mut [DailyEntry]) {
    entries.sort_by_key(|e| e.date);
}
