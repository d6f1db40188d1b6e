pub mod file;

use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_float, validate_url, Validate,
};
use chrono::NaiveDate;
use clap::Parser;
use file::FileConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "net-hours")]
#[command(about = "Compares tracked hours against a weekly target, projected to year end")]
pub struct CliConfig {
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    #[arg(long)]
    pub weekly_hours: Option<f64>,

    #[arg(long, help = "dd/mm/yyyy")]
    pub start_date: Option<String>,

    #[arg(long, help = "Workspace name (defaults to the first workspace)")]
    pub workspace: Option<String>,

    #[arg(long, help = "Client name to report on")]
    pub client: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub project_list: Option<Vec<String>>,

    #[arg(long, help = "Treat project_list as the only projects to include")]
    pub whitelist: bool,

    #[arg(long, help = "Skip and log malformed durations instead of aborting")]
    pub lenient_durations: bool,

    #[arg(long)]
    pub holiday_country: Option<String>,

    #[arg(long)]
    pub holiday_prov: Option<String>,

    #[arg(long)]
    pub holiday_state: Option<String>,

    #[arg(long)]
    pub holiday_file: Option<PathBuf>,

    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long)]
    pub api_key_file: Option<PathBuf>,

    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Immutable run configuration: config file merged with CLI overrides,
/// resolved once before any network call.
#[derive(Debug, Clone)]
pub struct Settings {
    pub weekly_hours: f64,
    pub start_date: NaiveDate,
    pub workspace: Option<String>,
    pub client: String,
    pub project_list: Vec<String>,
    pub whitelist: bool,
    pub lenient_durations: bool,
    pub holiday_country: Option<String>,
    pub holiday_subdivision: Option<String>,
    pub holiday_file: PathBuf,
    pub api_url: String,
    pub api_key_file: PathBuf,
    pub json: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = FileConfig::load_or_bootstrap(&cli.config)?;
        Self::merge(cli, file)
    }

    fn merge(cli: &CliConfig, file: FileConfig) -> Result<Self> {
        let start_date_str = cli.start_date.as_ref().unwrap_or(&file.start_date);
        let start_date = NaiveDate::parse_from_str(start_date_str, "%d/%m/%Y").map_err(|e| {
            TrackerError::InvalidConfigValueError {
                field: "start_date".to_string(),
                value: start_date_str.clone(),
                reason: format!("expected dd/mm/yyyy: {}", e),
            }
        })?;

        let holiday_country = cli.holiday_country.clone().or(file.holiday_country);
        // prov takes precedence over state, matching the original calendar API.
        let holiday_subdivision = cli
            .holiday_prov
            .clone()
            .or(cli.holiday_state.clone())
            .or(file.holiday_prov)
            .or(file.holiday_state);

        let settings = Self {
            weekly_hours: cli.weekly_hours.unwrap_or(file.weekly_hours),
            start_date,
            workspace: cli.workspace.clone().or(file.workspace),
            client: cli.client.clone().unwrap_or(file.client),
            project_list: cli.project_list.clone().unwrap_or(file.project_list),
            whitelist: cli.whitelist || file.whitelist,
            lenient_durations: cli.lenient_durations || file.lenient_durations,
            holiday_country,
            holiday_subdivision,
            holiday_file: cli.holiday_file.clone().unwrap_or(file.holiday_file),
            api_url: cli.api_url.clone().unwrap_or(file.api_url),
            api_key_file: cli.api_key_file.clone().unwrap_or(file.api_key_file),
            json: cli.json,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        validate_positive_float("weekly_hours", self.weekly_hours)?;
        validate_non_empty_string("client", &self.client)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CliConfig {
        let mut full = vec!["net-hours"];
        full.extend_from_slice(args);
        CliConfig::parse_from(full)
    }

    #[test]
    fn test_file_values_used_without_overrides() {
        let file = FileConfig {
            weekly_hours: 32.0,
            client: "Acme Corp".to_string(),
            ..FileConfig::default()
        };
        let settings = Settings::merge(&cli(&[]), file).unwrap();
        assert_eq!(settings.weekly_hours, 32.0);
        assert_eq!(settings.client, "Acme Corp");
        assert_eq!(
            settings.start_date,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_cli_flags_override_file() {
        let file = FileConfig {
            weekly_hours: 32.0,
            client: "Acme Corp".to_string(),
            project_list: vec!["Old".to_string()],
            ..FileConfig::default()
        };
        let settings = Settings::merge(
            &cli(&[
                "--weekly-hours",
                "40",
                "--client",
                "Other Corp",
                "--project-list",
                "Internal,Admin",
                "--start-date",
                "15/03/2022",
            ]),
            file,
        )
        .unwrap();

        assert_eq!(settings.weekly_hours, 40.0);
        assert_eq!(settings.client, "Other Corp");
        assert_eq!(settings.project_list, vec!["Internal", "Admin"]);
        assert_eq!(
            settings.start_date,
            NaiveDate::from_ymd_opt(2022, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_bad_start_date_rejected() {
        let err = Settings::merge(&cli(&["--start-date", "2022-01-01"]), FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_prov_wins_over_state() {
        let file = FileConfig {
            holiday_country: Some("DE".to_string()),
            holiday_prov: Some("BY".to_string()),
            holiday_state: Some("ignored".to_string()),
            ..FileConfig::default()
        };
        let settings = Settings::merge(&cli(&[]), file).unwrap();
        assert_eq!(settings.holiday_subdivision.as_deref(), Some("BY"));
    }

    #[test]
    fn test_invalid_weekly_hours_rejected() {
        let err =
            Settings::merge(&cli(&["--weekly-hours", "0"]), FileConfig::default()).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfigValueError { .. }));
    }
}
