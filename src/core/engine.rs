use crate::config::Settings;
use crate::core::aggregate::aggregate_hours;
use crate::core::goal::project;
use crate::core::holidays::{holiday_hours, FileCalendar, NoHolidays};
use crate::core::report::{render_json, render_summary, HolidaySummary};
use crate::domain::model::{GoalInputs, Project, TimeEntry};
use crate::domain::ports::{HolidayCalendar, TimeTracker};
use crate::utils::error::{Result, TrackerError};
use chrono::{Datelike, NaiveDate};

/// Drives the single linear run: fetch reference data, paginate time
/// entries, aggregate, project against the goal and render the summary.
pub struct TrackerEngine<A: TimeTracker> {
    api: A,
    settings: Settings,
}

impl<A: TimeTracker> TrackerEngine<A> {
    pub fn new(api: A, settings: Settings) -> Self {
        Self { api, settings }
    }

    /// Runs the full report. `now` is injected so tests stay deterministic.
    pub async fn run(&self, now: NaiveDate) -> Result<String> {
        let user = self.api.current_user().await?;
        tracing::debug!("authenticated as user {}", user.id);

        let workspaces = self.api.workspaces().await?;
        println!("workspaces:");
        for w in &workspaces {
            println!("- {}", w.name);
        }
        let workspace = match &self.settings.workspace {
            Some(name) => workspaces
                .iter()
                .find(|w| &w.name == name)
                .ok_or_else(|| TrackerError::ConfigError {
                    message: format!("could not find workspace: {}", name),
                })?,
            None => workspaces.first().ok_or_else(|| TrackerError::ConfigError {
                message: "account has no workspaces".to_string(),
            })?,
        };

        let clients = self.api.clients(&workspace.id).await?;
        let client = clients
            .iter()
            .find(|c| c.name == self.settings.client)
            .ok_or_else(|| TrackerError::ClientNotFound {
                name: self.settings.client.clone(),
            })?;
        println!("found client: {}", client.name);

        let projects = self.api.projects(&workspace.id, &client.id).await?;
        println!("Projects for {}", client.name);
        for p in &projects {
            println!("- {}", p.name);
        }
        let projects = self.filter_projects(projects);
        let project_ids: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();

        let entries =
            fetch_all_entries(&self.api, &workspace.id, &user.id, &project_ids).await?;
        println!("{} time entries", entries.len());
        if let Some(latest) = entries.first() {
            println!("latest entry: {}", latest.description);
        }

        let total = aggregate_hours(&entries, self.settings.lenient_durations)?;
        if total.skipped > 0 {
            tracing::info!("skipped {} entries without a usable duration", total.skipped);
        }

        let inputs = GoalInputs {
            weekly_hours: self.settings.weekly_hours,
            start_date: self.settings.start_date,
            now,
            hours_worked: total.total_hours,
        };
        let (report, holidays) = self.project_with_holidays(&inputs)?;

        println!();
        if self.settings.json {
            render_json(&report).map(|mut s| {
                s.push('\n');
                s
            })
        } else {
            Ok(render_summary(&report, holidays.as_ref()))
        }
    }

    fn filter_projects(&self, projects: Vec<Project>) -> Vec<Project> {
        let listed = |p: &Project| self.settings.project_list.iter().any(|n| n == &p.name);
        projects
            .into_iter()
            .filter(|p| {
                if self.settings.whitelist {
                    listed(p)
                } else {
                    !listed(p)
                }
            })
            .collect()
    }

    fn project_with_holidays(
        &self,
        inputs: &GoalInputs,
    ) -> Result<(crate::domain::model::GoalReport, Option<HolidaySummary>)> {
        let Some(country) = &self.settings.holiday_country else {
            let none = holiday_hours(
                &NoHolidays,
                inputs.start_date,
                inputs.now,
                inputs.weekly_hours,
            );
            return Ok((project(inputs, none, none), None));
        };

        let calendar = FileCalendar::load(
            &self.settings.holiday_file,
            country,
            self.settings.holiday_subdivision.as_deref(),
        )?;

        // Remaining holidays run through the last day of the current year.
        let next_year = NaiveDate::from_ymd_opt(inputs.now.year() + 1, 1, 1)
            .unwrap_or(inputs.now);
        let to_date = holiday_hours(
            &calendar,
            inputs.start_date,
            inputs.now,
            inputs.weekly_hours,
        );
        let remaining = holiday_hours(&calendar, inputs.now, next_year, inputs.weekly_hours);

        let count = calendar.holidays_in_range(inputs.start_date, inputs.now);
        let report = project(inputs, to_date, remaining);
        Ok((
            report,
            Some(HolidaySummary {
                count,
                hours: to_date,
            }),
        ))
    }
}

/// Sequential pagination loop: request page N, append, stop on the first
/// empty page.
pub async fn fetch_all_entries<A: TimeTracker>(
    api: &A,
    workspace_id: &str,
    user_id: &str,
    project_ids: &[String],
) -> Result<Vec<TimeEntry>> {
    let mut all = Vec::new();
    let mut page = 1u32;
    loop {
        println!("page: {}", page);
        let entries = api
            .time_entries_page(workspace_id, user_id, project_ids, page)
            .await?;
        if entries.is_empty() {
            break;
        }
        all.extend(entries);
        page += 1;
    }
    Ok(all)
}
