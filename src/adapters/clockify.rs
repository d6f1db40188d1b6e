use crate::domain::model::{Client, Project, TimeEntry, User, Workspace};
use crate::domain::ports::TimeTracker;
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Clockify-compatible REST client. The API key is injected at construction
/// and sent as an `X-Api-Key` header on every request.
#[derive(Debug)]
pub struct ClockifyApi {
    client: reqwest::Client,
    base_url: String,
}

impl ClockifyApi {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(api_key).map_err(|_| TrackerError::ConfigError {
            message: "API key contains invalid header characters".to_string(),
        })?;
        headers.insert("X-Api-Key", key);

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reads the API key from a secret file, trimming trailing whitespace.
    pub fn from_key_file(base_url: &str, key_file: &Path) -> Result<Self> {
        let api_key = std::fs::read_to_string(key_file).map_err(|e| TrackerError::ConfigError {
            message: format!("failed to read API key file {}: {}", key_file.display(), e),
        })?;
        Self::new(base_url, api_key.trim())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::ApiStatusError {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TimeTracker for ClockifyApi {
    async fn current_user(&self) -> Result<User> {
        self.get("/user", &[]).await
    }

    async fn workspaces(&self) -> Result<Vec<Workspace>> {
        self.get("/workspaces", &[]).await
    }

    async fn clients(&self, workspace_id: &str) -> Result<Vec<Client>> {
        self.get(&format!("/workspaces/{workspace_id}/clients"), &[])
            .await
    }

    async fn projects(&self, workspace_id: &str, client_id: &str) -> Result<Vec<Project>> {
        self.get(
            &format!("/workspaces/{workspace_id}/projects"),
            &[("clients", client_id.to_string())],
        )
        .await
    }

    async fn time_entries_page(
        &self,
        workspace_id: &str,
        user_id: &str,
        project_ids: &[String],
        page: u32,
    ) -> Result<Vec<TimeEntry>> {
        let mut query: Vec<(&str, String)> = project_ids
            .iter()
            .map(|id| ("project", id.clone()))
            .collect();
        query.push(("page", page.to_string()));

        self.get(
            &format!("/workspaces/{workspace_id}/user/{user_id}/time-entries"),
            &query,
        )
        .await
    }
}
