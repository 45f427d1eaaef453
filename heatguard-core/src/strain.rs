//! Heat-Strain Profile (HSP): heat load relative to cooling capacity.
//!
//! HSP compares what the environment demands (effective WBGT) with what the
//! worker can shed (operational cooling capacity):
//!
//! ```text
//! hsp = (effective_wbgt · 200) / (max(1, operational_capacity) · 30)
//! ```
//!
//! The 200/30 scales are frozen calibration constants chosen so that the
//! 0.80 / 1.00 band edges line up with field scenarios; they are not derived
//! from a physiological model and must not be re-tuned independently.
//! Lower HSP is safer; at 1.00 heat gain matches heat loss.

use crate::constants::model::{
    HSP_CAPACITY_MIN_WM2, HSP_CAPACITY_SCALE, HSP_EXCEEDED_EDGE, HSP_LOAD_SCALE,
    HSP_MARGINAL_EDGE,
};

/// Dimensionless heat-strain profile ratio.
pub fn heat_strain_profile(effective_wbgt_c: f32, operational_capacity_wm2: f32) -> f32 {
    (effective_wbgt_c * HSP_LOAD_SCALE)
        / (operational_capacity_wm2.max(HSP_CAPACITY_MIN_WM2) * HSP_CAPACITY_SCALE)
}

/// Interpretation band of an HSP value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrainBalance {
    /// HSP < 0.80: cooling exceeds the heat load.
    CoolingExceedsLoad,
    /// 0.80 ≤ HSP < 1.00: heat balance is marginal.
    Marginal,
    /// HSP ≥ 1.00: heat gain exceeds heat loss.
    HeatGainExceedsLoss,
}

impl StrainBalance {
    /// Classify an HSP value.
    pub fn classify(hsp: f32) -> Self {
        if hsp < HSP_MARGINAL_EDGE {
            StrainBalance::CoolingExceedsLoad
        } else if hsp < HSP_EXCEEDED_EDGE {
            StrainBalance::Marginal
        } else {
            StrainBalance::HeatGainExceedsLoss
        }
    }

    /// Field-friendly description.
    pub const fn description(&self) -> &'static str {
        match self {
            StrainBalance::CoolingExceedsLoad => "Cooling exceeds heat load",
            StrainBalance::Marginal => "Heat balance marginal",
            StrainBalance::HeatGainExceedsLoss => "Heat gain exceeds heat loss",
        }
    }
}
