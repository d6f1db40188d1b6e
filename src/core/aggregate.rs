use crate::core::duration::parse_duration;
use crate::domain::model::TimeEntry;
use crate::utils::error::{Result, TrackerError};

/// Summed hours over a batch of time entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoursTotal {
    pub total_hours: f64,
    pub skipped: usize,
}

/// Sums the parsed durations of `entries`.
///
/// Entries without a duration (still running) are counted in `skipped` and
/// contribute nothing. A malformed duration aborts the whole aggregation
/// unless `lenient` is set, in which case it is logged and skipped; a
/// silently wrong total is worse than stopping, so strict is the default.
pub fn aggregate_hours(entries: &[TimeEntry], lenient: bool) -> Result<HoursTotal> {
    let mut total = HoursTotal::default();

    for entry in entries {
        let Some(token) = entry.time_interval.duration.as_deref() else {
            tracing::debug!(entry = %entry.id, "skipping entry without duration");
            total.skipped += 1;
            continue;
        };

        match parse_duration(token) {
            Ok(hours) => total.total_hours += hours,
            Err(e @ TrackerError::DurationParseError { .. }) if lenient => {
                tracing::warn!(entry = %entry.id, "skipping unparseable duration: {e}");
                total.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TimeInterval;

    const EPS: f64 = 1e-9;

    fn entry(duration: Option<&str>) -> TimeEntry {
        TimeEntry {
            id: "id".to_string(),
            description: "desc".to_string(),
            time_interval: TimeInterval {
                duration: duration.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_sums_valid_entries() {
        let entries = vec![entry(Some("PT1H")), entry(Some("PT30M")), entry(Some("PT0S"))];
        let total = aggregate_hours(&entries, false).unwrap();
        assert!((total.total_hours - 1.5).abs() < EPS);
        assert_eq!(total.skipped, 0);
    }

    #[test]
    fn test_null_duration_is_skipped_not_zeroed() {
        let entries = vec![entry(Some("PT2H")), entry(None), entry(None)];
        let total = aggregate_hours(&entries, false).unwrap();
        assert!((total.total_hours - 2.0).abs() < EPS);
        assert_eq!(total.skipped, 2);
    }

    #[test]
    fn test_order_independent_within_epsilon() {
        let forward = vec![
            entry(Some("PT2H4M23S")),
            entry(Some("PT45M")),
            entry(Some("PT1H30M15S")),
            entry(None),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = aggregate_hours(&forward, false).unwrap();
        let b = aggregate_hours(&reversed, false).unwrap();
        assert!((a.total_hours - b.total_hours).abs() < EPS);
        assert_eq!(a.skipped, b.skipped);
    }

    #[test]
    fn test_malformed_duration_fails_fast_by_default() {
        let entries = vec![entry(Some("PT1H")), entry(Some("bogus")), entry(Some("PT1H"))];
        let err = aggregate_hours(&entries, false).unwrap_err();
        assert!(matches!(err, TrackerError::DurationParseError { .. }));
    }

    #[test]
    fn test_lenient_mode_skips_malformed() {
        let entries = vec![entry(Some("PT1H")), entry(Some("bogus")), entry(Some("PT1H"))];
        let total = aggregate_hours(&entries, true).unwrap();
        assert!((total.total_hours - 2.0).abs() < EPS);
        assert_eq!(total.skipped, 1);
    }

    #[test]
    fn test_empty_input() {
        let total = aggregate_hours(&[], false).unwrap();
        assert_eq!(total, HoursTotal::default());
    }
}
