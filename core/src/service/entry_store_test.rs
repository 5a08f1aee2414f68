#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::model::entry::{DailyEntry, NewEntry};
    use crate::repository::{EntryRepository, FileEntryRepository, MemoryEntryRepository};
    use crate::service::entry_store::EntryStore;
    use crate::service::progress::Pace;
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;

    struct BrokenRepo;

    impl EntryRepository for BrokenRepo {
        fn load(&self) -> Result<Vec<DailyEntry>> { Err(anyhow!("corrupt blob")) }
        fn save(&self, _entries: &[DailyEntry]) -> Result<()> { Err(anyhow!("disk full")) }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stored(id: &str, d: NaiveDate, hours: f64) -> DailyEntry {
        DailyEntry { id: id.to_string(), date: d, hours }
    }

    fn empty_store() -> EntryStore<MemoryEntryRepository> {
        EntryStore::open(MemoryEntryRepository::default())
    }

    #[test]
    fn test_add_sorts_by_date_and_persists() {
        let mut store = empty_store();
        store.add(NewEntry::new(date(2025, 1, 10), 5.0)).unwrap();
        store.add(NewEntry::new(date(2024, 9, 1), 2.0)).unwrap();
        store.add(NewEntry::new(date(2024, 9, 15), 3.0)).unwrap();

        let dates: Vec<_> = store.entries().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2024, 9, 1), date(2024, 9, 15), date(2025, 1, 10)]);
        assert_eq!(store.repository().snapshot(), store.entries().to_vec());
    }

    #[test]
    fn test_add_keeps_insertion_order_on_same_date() {
        let mut store = empty_store();
        let first = store.add(NewEntry::new(date(2024, 10, 1), 1.0)).unwrap();
        store.add(NewEntry::new(date(2024, 9, 1), 4.0)).unwrap();
        let second = store.add(NewEntry::new(date(2024, 10, 1), 2.0)).unwrap();

        let ids: Vec<_> = store.entries().iter().skip(1).map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_add_rejects_non_positive_or_infinite_hours() {
        let mut store = empty_store();
        store.add(NewEntry::new(date(2024, 10, 1), 1.0)).unwrap();

        for hours in [0.0, -2.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = store.add(NewEntry::new(date(2024, 10, 2), hours));
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.repository().snapshot().len(), 1);
    }

    #[test]
    fn test_delete_and_missing_id() {
        let mut store = empty_store();
        let a = store.add(NewEntry::new(date(2024, 10, 1), 1.0)).unwrap();
        store.add(NewEntry::new(date(2024, 10, 2), 2.0)).unwrap();

        assert!(store.delete(&a.id).unwrap());
        assert_eq!(store.entries().len(), 1);
        assert!(!store.delete("no-such-id").unwrap());
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn test_import_replaces_and_rejects_non_array() {
        let mut store = empty_store();
        store.add(NewEntry::new(date(2024, 10, 1), 1.0)).unwrap();
        let before = store.entries().to_vec();

        assert!(matches!(store.import_json(r#"{"entries":[]}"#), Err(StoreError::Format(_))));
        assert!(matches!(store.import_json(r#""hello""#), Err(StoreError::Format(_))));
        assert_eq!(store.entries(), before.as_slice());

        let count = store
            .import_json(r#"[{"id":"x","date":"2025-02-01","hours":2},{"id":"y","date":"2024-11-03","hours":1.5}]"#)
            .unwrap();
        assert_eq!(count, 2);
        let ids: Vec<_> = store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x"]);
    }

    #[test]
    fn test_import_rejects_infinite_hours() {
        let mut store = empty_store();
        store.add(NewEntry::new(date(2024, 10, 1), 1.0)).unwrap();

        let result = store.import(vec![
            stored("a", date(2024, 10, 2), 2.0),
            stored("b", date(2024, 10, 3), f64::INFINITY),
        ]);
        assert!(matches!(result, Err(StoreError::Format(_))));
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.repository().snapshot().len(), 1);
    }

    #[test]
    fn test_infinite_hours_never_reach_the_file() {
        let dir = std::env::temp_dir().join(format!("pioneer-store-inf-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut store = EntryStore::open(FileEntryRepository::new(Some(dir.clone())).unwrap());
        store.add(NewEntry::new(date(2024, 10, 1), 3.0)).unwrap();
        assert!(store.add(NewEntry::new(date(2024, 10, 2), f64::INFINITY)).is_err());
        store.add(NewEntry::new(date(2024, 10, 3), 1.5)).unwrap();

        let reopened = EntryStore::open(FileEntryRepository::new(Some(dir.clone())).unwrap());
        assert_eq!(reopened.entries(), store.entries());
        assert_eq!(reopened.entries().len(), 2);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_export_then_import_preserves_entries() {
        let mut store = empty_store();
        store.add(NewEntry::new(date(2024, 12, 24), 3.25)).unwrap();
        store.add(NewEntry::new(date(2025, 3, 2), 1.0)).unwrap();
        let backup = store.export_json().unwrap();

        let mut other = empty_store();
        other.import_json(&backup).unwrap();
        assert_eq!(other.entries(), store.entries());
    }

    #[test]
    fn test_clear() {
        let mut store = empty_store();
        store.add(NewEntry::new(date(2024, 10, 1), 1.0)).unwrap();
        store.clear().unwrap();
        assert!(store.entries().is_empty());
        assert!(store.repository().snapshot().is_empty());
    }

    #[test]
    fn test_totals_follow_mutations() {
        let now = date(2025, 1, 20);
        let mut store = empty_store();
        store.add(NewEntry::new(date(2024, 9, 1), 2.0)).unwrap();
        store.add(NewEntry::new(date(2024, 9, 15), 3.0)).unwrap();
        let jan = store.add(NewEntry::new(date(2025, 1, 10), 5.0)).unwrap();

        let totals = store.totals(now);
        assert_eq!(totals.service_year, 2025);
        assert_eq!(totals.month_hours("2024-09"), 5.0);
        assert_eq!(totals.month_hours("2025-01"), 5.0);
        assert_eq!(totals.yearly.hours, 10.0);

        store.delete(&jan.id).unwrap();
        assert_eq!(store.totals(now).yearly.hours, 5.0);
        assert_eq!(store.totals(now).month_hours("2025-01"), 0.0);
    }

    #[test]
    fn test_progress_through_store() {
        let repo = MemoryEntryRepository::new(vec![stored("a", date(2024, 9, 5), 400.0)]);
        let store = EntryStore::open(repo);
        let report = store.progress(date(2025, 2, 1), 800.0);
        assert_eq!(report.months_passed, 6);
        assert_eq!(report.pace, Pace::OnTrack);
    }

    #[test]
    fn test_unreadable_storage_opens_empty() {
        let store = EntryStore::open(BrokenRepo);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let mut store = EntryStore::open(BrokenRepo);
        let result = store.add(NewEntry::new(date(2024, 10, 1), 1.0));
        assert!(matches!(result, Err(StoreError::Persistence(_))));
        assert!(store.entries().is_empty());
    }
}
