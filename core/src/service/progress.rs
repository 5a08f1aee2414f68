use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::totals::Totals;
use crate::service_year::months_passed;
use crate::time::month_key;

/// Where accumulated hours stand against a linearly prorated goal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Behind,
    OnTrack,
    Ahead,
}

/// Pace classification against `monthly_goal * months_passed`.
///
/// Behind means more than half a month short; ahead means more than a full
/// month over.
pub fn classify_pace(yearly_hours: f64, monthly_goal: f64, months_passed: u32) -> Pace {
    let prorated_goal = monthly_goal * months_passed as f64;
    let deficit = prorated_goal - yearly_hours;

    if deficit > monthly_goal / 2.0 {
        Pace::Behind
    } else if yearly_hours > prorated_goal + monthly_goal {
        Pace::Ahead
    } else {
        Pace::OnTrack
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub yearly_goal: f64,
    pub yearly_hours: f64,
    /// Share of the goal reached, capped at 100.
    pub percentage: f64,
    pub months_passed: u32,
    pub months_remaining: u32,
    /// Negative once the goal is met.
    pub hours_needed: f64,
    pub monthly_average_needed: f64,
    pub monthly_goal: f64,
    pub current_month_hours: f64,
    /// Surplus (positive) or deficit (negative) for the current month.
    pub monthly_status: f64,
    pub prorated_goal: f64,
    pub pace: Pace,
}

impl ProgressReport {
    pub fn evaluate(totals: &Totals, yearly_goal: f64, now: NaiveDate) -> Self {
        let yearly_hours = totals.yearly.hours;
        let percentage = (yearly_hours / yearly_goal * 100.0).min(100.0);

        let months_passed = months_passed(now);
        let months_remaining = 12 - months_passed;

        let hours_needed = yearly_goal - yearly_hours;
        let monthly_average_needed = if months_remaining > 0 {
            hours_needed / months_remaining as f64
        } else {
            0.0
        };

        let monthly_goal = yearly_goal / 12.0;
        let current_month_hours = totals.month_hours(&month_key(now));

        Self {
            yearly_goal,
            yearly_hours,
            percentage,
            months_passed,
            months_remaining,
            hours_needed,
            monthly_average_needed,
            monthly_goal,
            current_month_hours,
            monthly_status: current_month_hours - monthly_goal,
            prorated_goal: monthly_goal * months_passed as f64,
            pace: classify_pace(yearly_hours, monthly_goal, months_passed),
        }
    }
}
