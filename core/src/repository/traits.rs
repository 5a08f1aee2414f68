use crate::model::entry::DailyEntry;
use anyhow::Result;

/// Durable home of the entry collection. The whole collection is read and
/// written as one blob.
pub trait EntryRepository {
    fn load(&self) -> Result<Vec<DailyEntry>>;
    fn save(&self, entries: &[DailyEntry]) -> Result<()>;
}
