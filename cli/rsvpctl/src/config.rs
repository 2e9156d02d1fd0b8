use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    /// Pins the clock, for reproducible checks of time-dependent rules.
    pub now: Option<DateTime<Utc>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let log_level = std::env::var("RSVP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let log_json = std::env::var("RSVP_LOG_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let now = std::env::var("RSVP_NOW")
            .ok()
            .map(|v| parse_now(&v))
            .transpose()?;

        Ok(Self {
            log_level,
            log_json,
            now,
        })
    }
}

fn parse_now(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .with_context(|| format!("RSVP_NOW must be an RFC 3339 timestamp, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_now_normalizes_to_utc() {
        let parsed = parse_now("2026-06-01T07:00:00-05:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_now_rejects_garbage() {
        let err = parse_now("next tuesday").unwrap_err();
        assert!(err.to_string().contains("RSVP_NOW"));
    }
}
