//! Assessment records
//!
//! An [`Assessment`] is what the engine hands back after every update and
//! what the history keeps. Records are `Copy`: five floats, a score, a
//! status and a timestamp.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use heatguard_core::{Timestamp, VitalsReading};
use serde::{Serialize, Serializer};

/// Risk status, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Status {
    /// No update has been assessed yet
    #[serde(rename = "Waiting for data")]
    WaitingForData,
    /// Window mean at or below the monitor threshold, few spikes
    #[serde(rename = "Stable")]
    Stable,
    /// Elevated window mean or a run of spikes
    #[serde(rename = "Monitor Closely")]
    MonitorClosely,
    /// Window mean above the unstable threshold
    #[serde(rename = "Unstable")]
    Unstable,
}

impl Status {
    /// Label shown to the wearer's supervisor
    pub const fn label(self) -> &'static str {
        match self {
            Status::WaitingForData => "Waiting for data",
            Status::Stable => "Stable",
            Status::MonitorClosely => "Monitor Closely",
            Status::Unstable => "Unstable",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format a millisecond timestamp as RFC 3339 UTC
///
/// `None` if the timestamp is outside chrono's representable range.
pub fn to_rfc3339(timestamp: Timestamp) -> Option<String> {
    let millis = i64::try_from(timestamp).ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn serialize_timestamp<S: Serializer>(timestamp: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    match to_rfc3339(*timestamp) {
        Some(formatted) => serializer.serialize_str(&formatted),
        None => serializer.serialize_u64(*timestamp),
    }
}

/// Result of classifying one update
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    /// Adjusted risk score in `[0, 100]`, two decimals
    #[serde(rename = "risk")]
    pub score: f64,
    /// Status derived from the window
    pub status: Status,
    /// Milliseconds since the Unix epoch
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: Timestamp,
    /// Filtered vitals the score was computed from
    pub vitals: VitalsReading,
}

impl Assessment {
    /// Stand-in returned before the first update
    pub const fn placeholder() -> Self {
        Self {
            score: 0.0,
            status: Status::WaitingForData,
            timestamp: 0,
            vitals: VitalsReading::from_array([0.0; 5]),
        }
    }

    /// True for the stand-in
    pub fn is_placeholder(&self) -> bool {
        self.status == Status::WaitingForData
    }

    /// Timestamp as RFC 3339
    pub fn timestamp_rfc3339(&self) -> Option<String> {
        to_rfc3339(self.timestamp)
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Filtered vitals at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VitalsSnapshot {
    /// Milliseconds since the Unix epoch
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: Timestamp,
    /// Filtered values
    pub vitals: VitalsReading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_order_by_severity() {
        assert!(Status::Unstable > Status::MonitorClosely);
        assert!(Status::MonitorClosely > Status::Stable);
        assert!(Status::Stable > Status::WaitingForData);
    }

    #[test]
    fn labels() {
        assert_eq!(Status::MonitorClosely.to_string(), "Monitor Closely");
        assert_eq!(Assessment::placeholder().status.label(), "Waiting for data");
    }

    #[test]
    fn rfc3339_formatting() {
        assert_eq!(
            to_rfc3339(1_700_000_000_123).as_deref(),
            Some("2023-11-14T22:13:20.123Z")
        );
        assert_eq!(to_rfc3339(u64::MAX), None);
    }

    #[test]
    fn assessment_serializes_with_labels() {
        let assessment = Assessment {
            score: 42.5,
            status: Status::MonitorClosely,
            timestamp: 0,
            vitals: VitalsReading::from_array([30.0, 50.0, 37.0, 98.0, 80.0]),
        };

        let json = serde_json::to_value(assessment).unwrap();
        assert_eq!(json["risk"], 42.5);
        assert_eq!(json["status"], "Monitor Closely");
        assert_eq!(json["timestamp"], "1970-01-01T00:00:00.000Z");
        assert_eq!(json["vitals"]["V2"], 37.0);
    }
}
