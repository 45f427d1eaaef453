//! Risk Classification: WBGT banding with a conservative HSP override.
//!
//! ## Two signals, one answer
//!
//! The WBGT band is the regulatory screen; HSP is the physiological
//! cross-check. The resolution rule is deliberately asymmetric: the HSP
//! override may only *escalate* the WBGT-derived band, never relax it. A
//! compliance index can under-call a situation a human-capacity model
//! catches (heavy PPE in moderate heat), but the regulatory floor is never
//! negotiable in the other direction.
//!
//! ## Banding
//!
//! Upper bounds are exclusive on the lower band: an effective WBGT exactly
//! at cut-point C classifies as `Withdrawal`, not `HighStrain`.
//!
//! ```text
//! eff < A      → Low
//! eff < B      → Caution
//! eff < C      → HighStrain
//! otherwise    → Withdrawal
//!
//! hsp ≥ 1.30                      → Withdrawal
//! hsp ≥ 1.00 ∧ band ≤ Caution     → HighStrain
//! hsp ≥ 0.80 ∧ band = Low         → Caution
//! ```

use crate::constants::model::{HSP_EXCEEDED_EDGE, HSP_MARGINAL_EDGE, HSP_WITHDRAWAL_EDGE};
use crate::thresholds::RiskThresholds;

/// Ordered four-level risk scale. Derived each evaluation; the audit log is
/// the durable record, not this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// Normal work acceptable.
    Low,
    /// Increased supervision and hydration.
    Caution,
    /// Reduce exposure; short work-rest cycles.
    HighStrain,
    /// Stop routine work; emergency tasks only.
    Withdrawal,
}

impl RiskLevel {
    /// Numeric severity, 0 (low) to 3 (withdrawal).
    pub const fn severity(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Caution => 1,
            RiskLevel::HighStrain => 2,
            RiskLevel::Withdrawal => 3,
        }
    }

    /// Short display name.
    pub const fn name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Caution => "CAUTION",
            RiskLevel::HighStrain => "HIGH STRAIN",
            RiskLevel::Withdrawal => "WITHDRAWAL",
        }
    }

    /// Supervisor guidance for this level.
    pub const fn guidance(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Normal work acceptable. Maintain hydration and routine supervision."
            }
            RiskLevel::Caution => {
                "Increase hydration frequency and supervision. Encourage shaded rest \
                 periods and monitor for early heat-strain symptoms."
            }
            RiskLevel::HighStrain => {
                "Reduce exposure immediately. Move workers to shaded or cooled areas, \
                 use ventilation where available and enforce short work-rest cycles."
            }
            RiskLevel::Withdrawal => {
                "Stop routine work. Only emergency tasks with medical monitoring; \
                 active cooling required."
            }
        }
    }

    /// Classify an effective WBGT against the cut-points.
    pub fn from_wbgt(effective_wbgt_c: f32, thresholds: &RiskThresholds) -> Self {
        if effective_wbgt_c < thresholds.wbgt_a_c {
            RiskLevel::Low
        } else if effective_wbgt_c < thresholds.wbgt_b_c {
            RiskLevel::Caution
        } else if effective_wbgt_c < thresholds.wbgt_c_c {
            RiskLevel::HighStrain
        } else {
            RiskLevel::Withdrawal
        }
    }
}

/// Resolve the final risk level from the WBGT band and the HSP value.
///
/// Escalation only: the result is never below `wbgt_band`. No further
/// transitions happen within one evaluation.
pub fn resolve_final_risk(wbgt_band: RiskLevel, hsp: f32) -> RiskLevel {
    if hsp >= HSP_WITHDRAWAL_EDGE {
        RiskLevel::Withdrawal
    } else if hsp >= HSP_EXCEEDED_EDGE && wbgt_band <= RiskLevel::Caution {
        RiskLevel::HighStrain
    } else if hsp >= HSP_MARGINAL_EDGE && wbgt_band == RiskLevel::Low {
        RiskLevel::Caution
    } else {
        wbgt_band
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::Acclimatization;

    fn thresholds() -> RiskThresholds {
        RiskThresholds::for_worker(Acclimatization::Acclimatized)
    }

    #[test]
    fn banding_edges_are_exclusive_upward() {
        let t = thresholds();
        assert_eq!(RiskLevel::from_wbgt(28.9, &t), RiskLevel::Low);
        assert_eq!(RiskLevel::from_wbgt(29.0, &t), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_wbgt(31.9, &t), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_wbgt(32.0, &t), RiskLevel::HighStrain);
        // Boundary: exactly C is withdrawal, not high strain
        assert_eq!(RiskLevel::from_wbgt(35.0, &t), RiskLevel::Withdrawal);
    }

    #[test]
    fn override_escalates_only() {
        // High HSP forces withdrawal from anywhere
        assert_eq!(resolve_final_risk(RiskLevel::Low, 1.30), RiskLevel::Withdrawal);

        // HSP ≥ 1.0 lifts low/caution to high strain but leaves high strain
        assert_eq!(resolve_final_risk(RiskLevel::Low, 1.1), RiskLevel::HighStrain);
        assert_eq!(resolve_final_risk(RiskLevel::Caution, 1.1), RiskLevel::HighStrain);
        assert_eq!(resolve_final_risk(RiskLevel::HighStrain, 1.1), RiskLevel::HighStrain);

        // Marginal HSP only lifts low
        assert_eq!(resolve_final_risk(RiskLevel::Low, 0.85), RiskLevel::Caution);
        assert_eq!(resolve_final_risk(RiskLevel::Caution, 0.85), RiskLevel::Caution);

        // Low HSP never relaxes a WBGT-derived band
        assert_eq!(
            resolve_final_risk(RiskLevel::Withdrawal, 0.2),
            RiskLevel::Withdrawal
        );
    }

    #[test]
    fn ordering_matches_severity() {
        assert!(RiskLevel::Low < RiskLevel::Caution);
        assert!(RiskLevel::Caution < RiskLevel::HighStrain);
        assert!(RiskLevel::HighStrain < RiskLevel::Withdrawal);
        assert_eq!(RiskLevel::Withdrawal.severity(), 3);
    }
}
