//! Error types for temporal-distance parsing helpers.
//!
//! The distance calculations themselves are total and never fail; only the
//! caller-side helpers that turn strings into timestamps, zones, units and
//! policies report errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, DistanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DistanceError::InvalidDatetime("'2024-13-01'".to_string()).to_string(),
            "Invalid datetime: '2024-13-01'"
        );
        assert_eq!(
            DistanceError::InvalidUnit("'fortnights'".to_string()).to_string(),
            "Invalid unit: 'fortnights'"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<DistanceError>();
    }
}
