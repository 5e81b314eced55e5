use thiserror::Error;

/// Errors raised at the engine's parsing boundary. The derivations
/// themselves are total and never fail.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Unknown date range token: {0}. Must be one of 7D, 30D, 90D, YTD, ALL")]
    UnknownDateRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_range_formatting() {
        let err = AnalyticsError::UnknownDateRange("14D".to_string());
        let msg = err.to_string();
        assert!(msg.contains("14D"));
        assert!(msg.contains("YTD"));
    }
}
