use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthTotal {
    pub hours: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct YearTotal {
    pub hours: f64,
}

/// Monthly and yearly sums for one service year.
///
/// Only months holding at least one entry are present in `monthly`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Totals {
    pub service_year: i32,
    pub monthly: BTreeMap<String, MonthTotal>, // Key: "YYYY-MM"
    pub yearly: YearTotal,
}

impl Totals {
    pub fn empty(service_year: i32) -> Self {
        Self {
            service_year,
            monthly: BTreeMap::new(),
            yearly: YearTotal::default(),
        }
    }

    pub fn month_hours(&self, month_key: &str) -> f64 {
        self.monthly.get(month_key).map(|m| m.hours).unwrap_or(0.0)
    }

    pub(crate) fn add(&mut self, month_key: String, hours: f64) {
        let entry = self.monthly.entry(month_key).or_default();
        entry.hours += hours;
        self.yearly.hours += hours;
    }
}
