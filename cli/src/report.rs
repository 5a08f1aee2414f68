use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate};
use pioneer_core::i18n::{month_label, month_names, weekday_names_short};
use pioneer_core::service_year::months_of_service_year;
use pioneer_core::{format_hours_minutes, month_key, translate, DailyEntry, Message, Pace, ProgressReport, Totals};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::Context;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Hours")]
    hours: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Hours")]
    hours: String,
}

fn styled(table: &mut Table) -> &mut Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN))
}

pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub fn print_entries(entries: &[DailyEntry], ctx: &Context) {
    if entries.is_empty() {
        println!("{}", translate(ctx.lang, Message::NoEntries, &[]));
        return;
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow {
            date: format!("{} ({})", e.date.format("%Y-%m-%d"), weekday_short(e.date, ctx)),
            id: short_id(&e.id).to_string(),
            hours: format_hours_minutes(e.hours),
        })
        .collect();

    println!("{}", styled(&mut Table::new(rows)));
}

fn weekday_short(date: NaiveDate, ctx: &Context) -> String {
    let names = weekday_names_short(ctx.lang);
    names[date.weekday().num_days_from_monday() as usize].clone()
}

pub fn print_summary(totals: &Totals, ctx: &Context) {
    let names = month_names(ctx.lang);
    let current_month = &names[ctx.now.month0() as usize];

    println!("\x1b[1;36m{}\x1b[0m", translate(ctx.lang, Message::HomeQuickSummary, &[]));
    println!(
        "  {}: {}",
        translate(ctx.lang, Message::HomeCurrentMonthHours, &[current_month.as_str()]),
        format_hours_minutes(totals.month_hours(&month_key(ctx.now)))
    );
    println!(
        "  {}: {}",
        translate(ctx.lang, Message::HomeServiceYearHours, &[]),
        format_hours_minutes(totals.yearly.hours)
    );
}

pub fn pace_label(pace: Pace, ctx: &Context) -> String {
    let msg = match pace {
        Pace::Behind => Message::PaceBehind,
        Pace::OnTrack => Message::PaceOnTrack,
        Pace::Ahead => Message::PaceAhead,
    };
    translate(ctx.lang, msg, &[])
}

/// Signed `H:MM`, e.g. "+2:30" or "-10:00".
pub fn signed_hours(value: f64) -> String {
    let sign = if value >= 0.0 { '+' } else { '-' };
    format!("{}{}", sign, format_hours_minutes(value.abs()))
}

pub fn print_progress(report: &ProgressReport, ctx: &Context) {
    let color = match report.pace {
        Pace::Behind => "31",
        Pace::OnTrack => "32",
        Pace::Ahead => "35",
    };
    let goal = format!("{}", report.yearly_goal);

    println!("\x1b[1;36m{}\x1b[0m", translate(ctx.lang, Message::ProgressTitle, &[]));
    println!("  {}", translate(ctx.lang, Message::ProgressGoal, &[goal.as_str()]));
    println!(
        "  {} / {}  ({:.0}{})  \x1b[{}m{}\x1b[0m",
        format_hours_minutes(report.yearly_hours),
        format_hours_minutes(report.yearly_goal),
        report.percentage,
        translate(ctx.lang, Message::ProgressCompleted, &[]),
        color,
        pace_label(report.pace, ctx)
    );
    println!(
        "  {}: {}",
        translate(ctx.lang, Message::ProgressMonthlyStatus, &[]),
        signed_hours(report.monthly_status)
    );
    println!(
        "  {}: {}",
        translate(ctx.lang, Message::ProgressHoursRemaining, &[]),
        format_hours_minutes(report.hours_needed)
    );
    println!(
        "  {}: {}",
        translate(ctx.lang, Message::ProgressMonthlyAvgNeeded, &[]),
        format_hours_minutes(report.monthly_average_needed)
    );
}

/// Months of the service year up to and including the current one.
pub fn visible_months(totals: &Totals, now: NaiveDate) -> Vec<String> {
    let current = month_key(now);
    months_of_service_year(totals.service_year)
        .into_iter()
        .filter(|key| *key <= current)
        .collect()
}

pub fn print_history(totals: &Totals, ctx: &Context) -> Result<()> {
    let year = totals.service_year.to_string();
    println!("\x1b[1;36m{}\x1b[0m", translate(ctx.lang, Message::HistoryTitle, &[year.as_str()]));

    println!("{}", styled(&mut Table::new(history_rows(totals, ctx)?)));
    Ok(())
}

/// One row per visible month, September first.
fn history_rows(totals: &Totals, ctx: &Context) -> Result<Vec<MonthRow>> {
    visible_months(totals, ctx.now)
        .iter()
        .map(|key| {
            Ok(MonthRow {
                month: month_label(ctx.lang, key)?,
                hours: format_hours_minutes(totals.month_hours(key)),
            })
        })
        .collect()
}

/// Weeks of a month, Monday first; days outside the month are `None`.
pub fn calendar_weeks(year: i32, month: u32) -> Result<Vec<[Option<NaiveDate>; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month: {}-{:02}", year, month))?;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut day = first;
    while day.month() == month {
        let slot = day.weekday().num_days_from_monday() as usize;
        week[slot] = Some(day);
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
        day += Duration::days(1);
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    Ok(weeks)
}

pub fn print_calendar(daily: &BTreeMap<NaiveDate, f64>, year: i32, month: u32, ctx: &Context) -> Result<()> {
    let key = format!("{:04}-{:02}", year, month);
    println!("\x1b[1;36m{}\x1b[0m", month_label(ctx.lang, &key)?);

    let header: Vec<String> = weekday_names_short(ctx.lang)
        .iter()
        .map(|d| format!("{:<9}", d))
        .collect();
    println!("{}", header.join(""));

    for week in calendar_weeks(year, month)? {
        let mut line = String::new();
        for slot in week {
            match slot {
                Some(day) => {
                    let marker = if day == ctx.now { '*' } else { ' ' };
                    let hours = daily
                        .get(&day)
                        .filter(|h| **h > 0.0)
                        .map(|h| format_hours_minutes(*h))
                        .unwrap_or_default();
                    line.push_str(&format!("{:>2}{}{:<6}", day.day(), marker, hours));
                }
                None => line.push_str(&" ".repeat(9)),
            }
        }
        println!("{}", line.trim_end());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pioneer_core::model::totals::MonthTotal;
    use pioneer_core::Language;

    #[test]
    fn test_calendar_weeks_starts_on_monday() {
        // 1 September 2024 is a Sunday.
        let weeks = calendar_weeks(2024, 9).unwrap();
        assert_eq!(weeks[0][6], NaiveDate::from_ymd_opt(2024, 9, 1));
        assert!(weeks[0][..6].iter().all(Option::is_none));
        let days: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(days, 30);
        assert!(calendar_weeks(2024, 13).is_err());
    }

    #[test]
    fn test_visible_months_stop_at_current() {
        let mut totals = Totals::empty(2025);
        totals.monthly.insert("2024-10".to_string(), MonthTotal { hours: 3.0 });
        let now = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
        assert_eq!(visible_months(&totals, now), vec!["2024-09", "2024-10", "2024-11"]);
    }

    #[test]
    fn test_history_rows_start_in_september() {
        let mut totals = Totals::empty(2025);
        totals.monthly.insert("2024-09".to_string(), MonthTotal { hours: 2.0 });
        totals.monthly.insert("2025-01".to_string(), MonthTotal { hours: 5.5 });
        let ctx = Context {
            lang: Language::English,
            goal: 600.0,
            now: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
        };

        let rows = history_rows(&totals, &ctx).unwrap();
        let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["September 2024", "October 2024", "November 2024", "December 2024", "January 2025"]
        );
        assert_eq!(rows[0].hours, "2:00");
        assert_eq!(rows[4].hours, "5:30");
    }

    #[test]
    fn test_signed_hours_and_short_id() {
        assert_eq!(signed_hours(2.5), "+2:30");
        assert_eq!(signed_hours(-50.0), "-50:00");
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }
}
