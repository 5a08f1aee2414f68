use anyhow::Result;
use chrono::NaiveDate;
use serde_json::Value;

use crate::error::StoreError;
use crate::model::entry::DailyEntry;
use crate::time::to_local_date_string;

pub fn export_json(entries: &[DailyEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn backup_file_name(today: NaiveDate) -> String {
    format!("pioneer_hours_backup_{}.json", to_local_date_string(today))
}

/// Decodes a backup payload.
///
/// The top level must be an array and every element a complete entry with
/// non-negative hours; anything else is a `StoreError::Format`.
pub fn parse_backup(text: &str) -> Result<Vec<DailyEntry>, StoreError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| StoreError::Format(format!("not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(StoreError::Format(format!(
                "expected an array of entries, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let entry: DailyEntry = serde_json::from_value(item)
                .map_err(|e| StoreError::Format(format!("entry {}: {}", i, e)))?;
            if entry.hours < 0.0 {
                return Err(StoreError::Format(format!("entry {}: hours must not be negative", i)));
            }
            Ok(entry)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DailyEntry> {
        vec![
            DailyEntry {
                id: "a".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                hours: 2.0,
            },
            DailyEntry {
                id: "b".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                hours: 1.5,
            },
        ]
    }

    #[test]
    fn test_export_then_parse() {
        let text = export_json(&sample()).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert_eq!(parse_backup(&text).unwrap(), sample());
    }

    #[test]
    fn test_accepts_legacy_ids() {
        let text = r#"[{"id":"2024-09-01T10:00:00.000Z0.123","date":"2024-09-01","hours":3}]"#;
        let entries = parse_backup(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hours, 3.0);
    }

    #[test]
    fn test_rejects_non_array() {
        for text in [r#"{"id":"a"}"#, r#""entries""#, "42", "null"] {
            assert!(matches!(parse_backup(text), Err(StoreError::Format(_))), "{}", text);
        }
        assert!(matches!(parse_backup("not json"), Err(StoreError::Format(_))));
    }

    #[test]
    fn test_rejects_malformed_elements() {
        let missing_hours = r#"[{"id":"a","date":"2024-09-01"}]"#;
        let bad_date = r#"[{"id":"a","date":"09/01/2024","hours":1}]"#;
        let negative = r#"[{"id":"a","date":"2024-09-01","hours":-1}]"#;
        for text in [missing_hours, bad_date, negative] {
            assert!(matches!(parse_backup(text), Err(StoreError::Format(_))), "{}", text);
        }
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_backup("[]").unwrap().is_empty());
    }

    #[test]
    fn test_backup_file_name() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(backup_file_name(today), "pioneer_hours_backup_2025-03-07.json");
    }
}
