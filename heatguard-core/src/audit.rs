//! Append-only audit trail of completed assessments.
//!
//! A record is the durable outcome of one explicit save action: the raw
//! inputs, the frozen baseline, what was applied, and the final call. The
//! log deduplicates on the apply sequence number, so a host that re-renders
//! and re-saves the same assessment cannot append it twice.
//!
//! Storage is a bounded `heapless` vector; when the log is full the oldest
//! record is evicted. Export formats (CSV and the like) are a collaborator
//! concern - the optional `serde` derives are the serialization seam.

use crate::risk::RiskLevel;
use crate::time::Timestamp;
use core::fmt;
use heapless::{String, Vec};

/// Maximum length of a location label stored inline.
pub const MAX_LOCATION_LEN: usize = 48;

/// Maximum number of audit records kept in memory.
pub const MAX_AUDIT_ENTRIES: usize = 64;

/// Snapshot of one saved assessment. Temperatures in °C, capacity-derived
/// values dimensionless; `Display` renders numerics to one decimal place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuditRecord {
    /// Save time in milliseconds (source supplied by the host).
    pub timestamp: Timestamp,
    /// Operator-selected location label, possibly empty.
    pub location: String<MAX_LOCATION_LEN>,
    /// Dry-bulb input (°C).
    pub dry_bulb_c: f32,
    /// Relative humidity input (%).
    pub relative_humidity_pct: f32,
    /// Globe temperature input (°C).
    pub globe_temp_c: f32,
    /// Wind speed input (m/s).
    pub wind_speed_ms: f32,
    /// Natural wet-bulb at save time (°C).
    pub wet_bulb_c: f32,
    /// Frozen baseline WBGT (°C).
    pub baseline_wbgt_c: f32,
    /// Applied total penalty (°C).
    pub total_penalty_c: f32,
    /// Effective WBGT, canonical (°C).
    pub effective_wbgt_c: f32,
    /// Effective WBGT in the session's display units.
    pub effective_wbgt_display: f32,
    /// Heat-strain profile ratio.
    pub hsp: f32,
    /// Final resolved risk level.
    pub risk: RiskLevel,
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | DB {:.1} °C RH {:.1} % GT {:.1} °C wind {:.1} m/s | \
             WB {:.1} °C base {:.1} °C pen +{:.1} °C eff {:.1} °C ({:.1}) | \
             HSP {:.1} | {}",
            self.timestamp,
            self.location.as_str(),
            self.dry_bulb_c,
            self.relative_humidity_pct,
            self.globe_temp_c,
            self.wind_speed_ms,
            self.wet_bulb_c,
            self.baseline_wbgt_c,
            self.total_penalty_c,
            self.effective_wbgt_c,
            self.effective_wbgt_display,
            self.hsp,
            self.risk.name(),
        )
    }
}

/// Bounded append-only log keyed by apply sequence.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditRecord, MAX_AUDIT_ENTRIES>,
    last_logged_sequence: Option<u32>,
}

impl AuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for the given apply sequence.
    ///
    /// Returns `false` without appending when that sequence is already
    /// logged. Evicts the oldest entry when full.
    pub fn append(&mut self, record: AuditRecord, sequence: u32) -> bool {
        if self.last_logged_sequence == Some(sequence) {
            return false;
        }

        if self.entries.is_full() {
            self.entries.remove(0);
        }
        // Cannot fail: an eviction just guaranteed a free slot
        let _ = self.entries.push(record);
        self.last_logged_sequence = Some(sequence);
        true
    }

    /// Records in chronological order.
    pub fn entries(&self) -> &[AuditRecord] {
        &self.entries
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
