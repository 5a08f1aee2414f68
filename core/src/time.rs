use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Formats a decimal number of hours as `H:MM` (8.5 -> "8:30").
///
/// Negative and non-finite inputs render as "0:00".
pub fn format_hours_minutes(total_hours: f64) -> String {
    if !total_hours.is_finite() || total_hours < 0.0 {
        return "0:00".to_string();
    }

    let mut hours = total_hours.floor() as u64;
    let mut minutes = ((total_hours - hours as f64) * 60.0).round() as u64;
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    format!("{}:{:02}", hours, minutes)
}

/// Canonical `YYYY-MM-DD` key built from the calendar components.
pub fn to_local_date_string(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parses a `YYYY-MM-DD` key as a plain calendar date. No timezone is involved.
pub fn parse_local_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("Date must be YYYY-MM-DD: {}", input))
}

/// `YYYY-MM` bucket key for a date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parses an hours value as typed by a user.
///
/// Accepts `2.5`, `2,5`, `1:30`, `2h` and `90m`. The sign is not checked here;
/// the entry store decides what is acceptable.
pub fn parse_hours(input: &str) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty hours value"));
    }

    let value = if let Some((h, m)) = input.split_once(':') {
        let hours: u32 = h.parse().map_err(|_| anyhow!("Invalid hours: {}", input))?;
        let minutes: u32 = m.parse().map_err(|_| anyhow!("Invalid minutes: {}", input))?;
        if minutes >= 60 {
            return Err(anyhow!("Minutes must be below 60: {}", input));
        }
        hours as f64 + minutes as f64 / 60.0
    } else if let Some(num) = input.strip_suffix(['m', 'M']) {
        parse_decimal(num)? / 60.0
    } else if let Some(num) = input.strip_suffix(['h', 'H']) {
        parse_decimal(num)?
    } else {
        parse_decimal(input)?
    };

    Ok(value)
}

fn parse_decimal(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| anyhow!("Invalid number: {}", input))?;
    if !value.is_finite() {
        return Err(anyhow!("Invalid number: {}", input));
    }
    Ok(value)
}

/// Resolves `today`, `yesterday`, `+Nd`/`-Nd` relative to `today`, or an
/// explicit `YYYY-MM-DD`.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" | "yes" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if input.starts_with('+') || input.starts_with('-') {
        if let Some(num_str) = input[1..].strip_suffix('d') {
            let count: i64 = num_str
                .parse()
                .map_err(|_| anyhow!("Invalid relative date: {}", input))?;
            let shifted = Duration::try_days(count).and_then(|offset| {
                if input.starts_with('-') {
                    today.checked_sub_signed(offset)
                } else {
                    today.checked_add_signed(offset)
                }
            });
            return shifted.ok_or_else(|| anyhow!("Relative date out of range: {}", input));
        }
    }

    parse_local_date(input)
}
