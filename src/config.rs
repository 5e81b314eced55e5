use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::domain::analytics::filter::DateRange;
use crate::interfaces::chart;

/// Runtime configuration for the dashboard binary, loaded from the
/// environment (after `.env` has been applied).
#[derive(Debug, Clone)]
pub struct Config {
    /// Range pre-selected when the CLI passes none.
    pub default_range: DateRange,
    /// Plot box the equity and drawdown paths are stamped into.
    pub plot_width: f64,
    pub plot_height: f64,
    /// Journal file to load instead of the built-in seed data.
    pub journal_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_range: DateRange::default(),
            plot_width: chart::PLOT_WIDTH,
            plot_height: chart::PLOT_HEIGHT,
            journal_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            default_range: parse_env_or("DERIVERSE_RANGE", DateRange::default())?,
            plot_width: parse_env_or("DERIVERSE_PLOT_WIDTH", chart::PLOT_WIDTH)?,
            plot_height: parse_env_or("DERIVERSE_PLOT_HEIGHT", chart::PLOT_HEIGHT)?,
            journal_path: env::var("DERIVERSE_JOURNAL").ok(),
        })
    }
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid {key}: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_original_selection() {
        let config = Config::default();
        assert_eq!(config.default_range, DateRange::ThirtyDays);
        assert_eq!(config.plot_width, 640.0);
        assert_eq!(config.plot_height, 220.0);
        assert!(config.journal_path.is_none());
    }

    #[test]
    fn test_parse_env_or_rejects_garbage() {
        // keys namespaced to this test to avoid clashing with the env
        unsafe { env::set_var("DERIVERSE_TEST_WIDTH", "not-a-number") };
        let result: Result<f64> = parse_env_or("DERIVERSE_TEST_WIDTH", 640.0);
        assert!(result.is_err());
        unsafe { env::remove_var("DERIVERSE_TEST_WIDTH") };

        let fallback: f64 = parse_env_or("DERIVERSE_TEST_MISSING", 220.0).unwrap();
        assert_eq!(fallback, 220.0);
    }
}
