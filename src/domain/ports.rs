use crate::domain::model::{Client, Project, TimeEntry, User, Workspace};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only view of the remote time-tracking service.
///
/// Pagination contract: `time_entries_page` starts at page 1 and an empty
/// page signals the end of the sequence.
#[async_trait]
pub trait TimeTracker: Send + Sync {
    async fn current_user(&self) -> Result<User>;
    async fn workspaces(&self) -> Result<Vec<Workspace>>;
    async fn clients(&self, workspace_id: &str) -> Result<Vec<Client>>;
    async fn projects(&self, workspace_id: &str, client_id: &str) -> Result<Vec<Project>>;
    async fn time_entries_page(
        &self,
        workspace_id: &str,
        user_id: &str,
        project_ids: &[String],
        page: u32,
    ) -> Result<Vec<TimeEntry>>;
}

/// Holiday calendar capability. Counts holiday dates in `[start, end)`.
pub trait HolidayCalendar: Send + Sync {
    fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> usize;
}
