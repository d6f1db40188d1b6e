use crate::domain::ports::HolidayCalendar;
use crate::utils::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Default calendar when no holiday country is configured.
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn holidays_in_range(&self, _start: NaiveDate, _end: NaiveDate) -> usize {
        0
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CountryTable {
    #[serde(default)]
    national: Vec<NaiveDate>,
    #[serde(default)]
    subdivisions: HashMap<String, Vec<NaiveDate>>,
}

/// Calendar backed by a TOML table of holiday dates per country, with
/// optional per-subdivision lists merged on top of the national list.
#[derive(Debug)]
pub struct FileCalendar {
    dates: Vec<NaiveDate>,
}

impl FileCalendar {
    pub fn load(path: &Path, country: &str, subdivision: Option<&str>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|_| TrackerError::HolidayUnavailable {
                country: country.to_string(),
            })?;

        let tables: HashMap<String, CountryTable> =
            toml::from_str(&content).map_err(|e| TrackerError::ConfigError {
                message: format!("invalid holiday file {}: {}", path.display(), e),
            })?;

        let table = tables
            .get(country)
            .ok_or_else(|| TrackerError::HolidayUnavailable {
                country: country.to_string(),
            })?;

        let mut dates = table.national.clone();
        if let Some(sub) = subdivision {
            let extra = table
                .subdivisions
                .get(sub)
                .ok_or_else(|| TrackerError::HolidayUnavailable {
                    country: format!("{country}/{sub}"),
                })?;
            dates.extend(extra.iter().copied());
        }
        dates.sort_unstable();
        dates.dedup();

        Ok(Self { dates })
    }
}

impl HolidayCalendar for FileCalendar {
    fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> usize {
        self.dates.iter().filter(|d| **d >= start && **d < end).count()
    }
}

/// Converts a holiday count over `[start, end)` into goal hours to forgive.
///
/// Assumes a five-day work week: each holiday is worth a fifth of the weekly
/// target. Weekends already inside the range are not special-cased.
pub fn holiday_hours<C: HolidayCalendar + ?Sized>(
    calendar: &C,
    start: NaiveDate,
    end: NaiveDate,
    weekly_hours: f64,
) -> f64 {
    calendar.holidays_in_range(start, end) as f64 / 5.0 * weekly_hours
}
