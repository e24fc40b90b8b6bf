//! Error types for the monitor, reports and configuration

use heatguard_core::ReadingError;
use thiserror::Error;

/// Result alias for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Result alias for report generation
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors from ingesting an update or reading monitor state
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MonitorError {
    /// A channel failed validation and the policy refuses the update
    #[error("Invalid reading: {0}")]
    InvalidReading(ReadingError),

    /// Every channel in the update failed validation
    #[error("No usable channels in update")]
    NoUsableChannels,

    /// A thread panicked while holding the monitor lock
    #[error("Monitor state poisoned by a panicked thread")]
    Poisoned,
}

impl From<ReadingError> for MonitorError {
    fn from(err: ReadingError) -> Self {
        match err {
            ReadingError::NoUsableChannels => MonitorError::NoUsableChannels,
            other => MonitorError::InvalidReading(other),
        }
    }
}

/// Errors from building a report
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReportError {
    /// Not enough history for a time series
    #[error("Not enough data points yet: need {required}, have {available}")]
    InsufficientHistory {
        /// Entries needed
        required: usize,
        /// Entries recorded so far
        available: usize,
    },

    /// Forecast batch has no points
    #[error("Forecast batch is empty")]
    EmptyForecast,

    /// Monitor state could not be read
    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or wrong field types
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but semantically wrong
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}
