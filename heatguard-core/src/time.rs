//! Time abstraction for audit timestamps.
//!
//! The engine itself is time-free: evaluations are pure derivations. Time
//! only enters when a completed assessment is saved to the audit log, so the
//! clock is a trait the host supplies rather than a hard dependency on a
//! system clock.

/// Timestamp in milliseconds since epoch (or device boot for monotonic
/// sources).
pub type Timestamp = u64;

/// Source of time for audit records.
pub trait TimeSource {
    /// Get current timestamp in milliseconds.
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic).
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std).
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
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

/// Fixed time source for testing.
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a source pinned at `timestamp`.
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the pinned time forward by `ms`.
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
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
