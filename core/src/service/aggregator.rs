use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::entry::DailyEntry;
use crate::model::totals::Totals;
use crate::service_year::service_year_of;
use crate::time::month_key;

/// Sums the entries belonging to the service year of `now`, per month and overall.
///
/// Months without entries are left out. Same inputs always give the same result.
pub fn aggregate(entries: &[DailyEntry], now: NaiveDate) -> Totals {
    let current = service_year_of(now);
    let mut totals = Totals::empty(current);

    for entry in entries.iter().filter(|e| service_year_of(e.date) == current) {
        totals.add(month_key(entry.date), entry.hours);
    }

    totals
}

/// Hours per calendar date across every entry.
pub fn daily_hours(entries: &[DailyEntry]) -> BTreeMap<NaiveDate, f64> {
    let mut map = BTreeMap::new();
    for entry in entries {
        *map.entry(entry.date).or_insert(0.0) += entry.hours;
    }
    map
}
