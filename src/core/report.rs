use crate::domain::model::GoalReport;
use crate::utils::error::Result;
use std::fmt::Write;

/// Holiday figures shown in the summary when a calendar is configured.
#[derive(Debug, Clone, Copy)]
pub struct HolidaySummary {
    pub count: usize,
    pub hours: f64,
}

/// Renders the human-readable summary block.
pub fn render_summary(report: &GoalReport, holidays: Option<&HolidaySummary>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "#######");
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "#######");
    let _ = writeln!(out);
    let _ = writeln!(out, "weeks worked: {}", report.weeks_elapsed);
    let _ = writeln!(out, "hours worked: {}", report.hours_worked);
    if let Some(h) = holidays {
        let _ = writeln!(out, "holidays: {}", h.count);
        let _ = writeln!(out, "holiday hours: {}", h.hours);
    }
    let _ = writeln!(out, "hours goal: {}", report.hours_goal);
    let _ = writeln!(out, "NET hours: {}", report.hours_net);
    let _ = writeln!(out, "Hours until end of year: {}", report.hours_left_to_year_end);
    let _ = writeln!(
        out,
        "NET hours until end of year: {}",
        report.hours_net_to_year_end
    );

    out
}

/// Machine-readable variant of the summary, selected with `--json`.
pub fn render_json(report: &GoalReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
