//! Core computation engine for HeatGuard
//!
//! Converts raw environmental readings into a regulatory heat index (WBGT),
//! a modeled cooling-capacity estimate (MWL), and a heat-strain ratio (HSP),
//! then resolves them into a single actionable risk level for field
//! decisions about occupational heat stress.
//!
//! Key properties:
//! - Synchronous and single-threaded; each session owns its state
//! - Baseline WBGT freezes per environmental signature, so UI re-renders
//!   never drift a mid-assessment baseline
//! - Capacity estimates ratchet downward within a signature and the HSP
//!   override only ever escalates the WBGT band
//!
//! ```
//! use heatguard_core::{AssessmentSession, EnvironmentalReading, ExposurePenalties, RiskLevel};
//!
//! let mut session = AssessmentSession::new();
//! session.set_reading(EnvironmentalReading::new(32.0, 60.0, 1.0, 35.0, 101.3));
//! session.set_penalties(ExposurePenalties { ppe_c: 2.0, ..Default::default() });
//!
//! session.apply_adjustments().expect("reading produces a baseline");
//! let eval = session.evaluate();
//! assert_eq!(eval.final_risk, Some(RiskLevel::Caution));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
pub mod baseline;
pub mod capacity;
pub mod constants;
pub mod errors;
pub mod exposure;
pub mod reading;
pub mod risk;
pub mod session;
pub mod strain;
pub mod thresholds;
pub mod time;
pub mod units;
pub mod wbgt;
pub mod wetbulb;

// Public API
pub use audit::{AuditLog, AuditRecord};
pub use baseline::BaselineFreezeController;
pub use capacity::{CapacitySource, CoolingCapacityEstimator};
pub use errors::{EngineError, EngineResult};
pub use exposure::{
    AdHocPreset, EnclosurePreset, ExposurePenalties, PpePreset, RadiantPreset,
};
pub use reading::EnvironmentalReading;
pub use risk::RiskLevel;
pub use session::{AssessmentSession, Evaluation};
pub use strain::StrainBalance;
pub use thresholds::{Acclimatization, RiskThresholds, WetBulbStatus};
pub use units::DisplayUnits;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
