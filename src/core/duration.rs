use crate::utils::error::{Result, TrackerError};
use regex::Regex;
use std::sync::OnceLock;

// PT[nH][nM][nS] with the parts in fixed order, at least one present.
static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap())
}

/// Converts a `PT2H4M23S`-style duration token into fractional hours.
///
/// Each component is parsed numerically; the token is never handed to any
/// kind of expression evaluator. Absent tokens (running entries) are the
/// aggregator's concern and never reach this function.
pub fn parse_duration(token: &str) -> Result<f64> {
    let caps = token_re()
        .captures(token)
        .ok_or_else(|| TrackerError::DurationParseError {
            token: token.to_string(),
            reason: "expected PT[nH][nM][nS]".to_string(),
        })?;

    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return Err(TrackerError::DurationParseError {
            token: token.to_string(),
            reason: "no hour, minute or second component".to_string(),
        });
    }

    let component = |idx: usize| -> Result<f64> {
        match caps.get(idx) {
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .map(|n| n as f64)
                .map_err(|e| TrackerError::DurationParseError {
                    token: token.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(0.0),
        }
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    let total_minutes = hours * 60.0 + minutes + seconds / 60.0;
    Ok(total_minutes / 60.0)
}
