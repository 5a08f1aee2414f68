use chrono::{Datelike, NaiveDate};

/// Calendar month (1-based) in which a service year starts.
pub const START_MONTH: u32 = 9;

/// Service year a date belongs to, named by the calendar year in which it ends.
///
/// September through December count toward the following year.
pub fn service_year_of(date: NaiveDate) -> i32 {
    if date.month() >= START_MONTH {
        date.year() + 1
    } else {
        date.year()
    }
}

/// The twelve `YYYY-MM` keys of a service year, September through August.
pub fn months_of_service_year(service_year: i32) -> Vec<String> {
    (0..12)
        .map(|i| {
            let month0 = START_MONTH - 1 + i;
            let year = service_year - 1 + (month0 / 12) as i32;
            format!("{:04}-{:02}", year, month0 % 12 + 1)
        })
        .collect()
}

/// Months elapsed in the service year up to and including the month of `date`.
/// September is 1, August is 12: the count starts at the first month of the
/// service year, not at August.
pub fn months_passed(date: NaiveDate) -> u32 {
    (date.month0() + 12 - (START_MONTH - 1)) % 12 + 1
}

/// First and last calendar day of a service year.
pub fn service_year_bounds(service_year: i32) -> (NaiveDate, NaiveDate) {
    // Both dates always exist.
    let first = NaiveDate::from_ymd_opt(service_year - 1, START_MONTH, 1).unwrap_or_default();
    let last = NaiveDate::from_ymd_opt(service_year, START_MONTH - 1, 31).unwrap_or_default();
    (first, last)
}
