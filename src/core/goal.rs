use crate::domain::model::{GoalInputs, GoalReport};
use chrono::{Datelike, NaiveDate};

/// Projects worked-vs-goal deltas for the elapsed period and to year-end.
///
/// Pure function: `now` is injected by the caller, never read from the
/// system clock here. Sign convention: positive `hours_net` means behind
/// target.
pub fn project(
    inputs: &GoalInputs,
    holiday_hours_to_date: f64,
    holiday_hours_remaining: f64,
) -> GoalReport {
    let weeks_elapsed = (inputs.now - inputs.start_date).num_days() as f64 / 7.0;
    let hours_goal = weeks_elapsed * inputs.weekly_hours - holiday_hours_to_date;
    let hours_net = hours_goal - inputs.hours_worked;

    // Dec 31 always exists, but NaiveDate construction is fallible.
    let year_end = NaiveDate::from_ymd_opt(inputs.now.year(), 12, 31)
        .unwrap_or(inputs.now);
    // Clamp guards against a skewed clock reporting a date past year end.
    let days_left = (year_end - inputs.now).num_days().max(0);
    let hours_left_to_year_end =
        days_left as f64 / 7.0 * inputs.weekly_hours - holiday_hours_remaining;

    GoalReport {
        weeks_elapsed,
        hours_worked: inputs.hours_worked,
        hours_goal,
        hours_net,
        hours_left_to_year_end,
        hours_net_to_year_end: hours_left_to_year_end + hours_net,
    }
}
