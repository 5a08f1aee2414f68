use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hours worked on one calendar date. Several entries may share a date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub id: String,
    pub date: NaiveDate,
    pub hours: f64,
}

/// An entry as submitted, before the store assigns it an id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub hours: f64,
}

impl NewEntry {
    pub fn new(date: NaiveDate, hours: f64) -> Self {
        Self { date, hours }
    }
}

impl DailyEntry {
    pub fn from_new(entry: NewEntry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: entry.date,
            hours: entry.hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_date_as_plain_key() {
        let entry = DailyEntry {
            id: "a".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            hours: 2.5,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"id":"a","date":"2024-01-05","hours":2.5}"#);
    }

    #[test]
    fn test_from_new_assigns_distinct_ids() {
        let new = NewEntry::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 1.0);
        let a = DailyEntry::from_new(new);
        let b = DailyEntry::from_new(new);
        assert_ne!(a.id, b.id);
        assert_eq!(a.date, b.date);
    }
}
