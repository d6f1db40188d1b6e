use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Currently authenticated user, as returned by `GET /user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

/// A billing client owning projects inside a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// One logged time entry. A `None` duration means the entry is still
/// running (or unknown) and must be skipped, not treated as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub time_interval: TimeInterval,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub duration: Option<String>,
}

/// Inputs to the goal projection, constructed fresh per run.
#[derive(Debug, Clone, Copy)]
pub struct GoalInputs {
    pub weekly_hours: f64,
    pub start_date: NaiveDate,
    pub now: NaiveDate,
    pub hours_worked: f64,
}

/// Derived goal figures. Positive `hours_net` means behind target.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalReport {
    pub weeks_elapsed: f64,
    pub hours_worked: f64,
    pub hours_goal: f64,
    pub hours_net: f64,
    pub hours_left_to_year_end: f64,
    pub hours_net_to_year_end: f64,
}
