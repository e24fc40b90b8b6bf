//! Time sources
//!
//! Assessments are stamped with wall-clock milliseconds since the Unix
//! epoch. The source is injected so tests can run on a deterministic clock:
//! - System clock (std)
//! - Fixed timestamp
//! - Stepped counter that advances on every read

use core::sync::atomic::{AtomicU64, Ordering};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for assessments
///
/// `Send + Sync` because the monitor holding it is shared across request
/// handlers.
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone, Copy)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Source that always reports `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Clock that advances by a fixed step each time it is read
///
/// Simulates a sensor hub posting at a steady rate without sleeping.
#[derive(Debug)]
pub struct SteppedTime {
    next: AtomicU64,
    step_ms: u64,
}

impl SteppedTime {
    /// First read returns `start`, each later read `step_ms` more
    pub fn new(start: Timestamp, step_ms: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
            step_ms,
        }
    }
}

impl TimeSource for SteppedTime {
    fn now(&self) -> Timestamp {
        self.next.fetch_add(self.step_ms, Ordering::Relaxed)
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
