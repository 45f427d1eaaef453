//! Acclimatization-adjusted risk thresholds.
//!
//! Two sets of band edges drive interpretation: the regulatory WBGT
//! cut-points (A/B/C) used for classification, and the wet-bulb
//! physiological limits used to report how well sweat evaporation is still
//! working. A worker without heat acclimatization gets every edge shifted
//! down uniformly by 2 °C - the same environment classifies more
//! conservatively.

use crate::constants::thresholds::{
    NON_ACCLIMATIZED_SHIFT_C, WBGT_CUT_A_C, WBGT_CUT_B_C, WBGT_CUT_C_C, WET_BULB_DANGER_C,
    WET_BULB_SAFE_C, WET_BULB_STRAIN_C,
};

/// Worker acclimatization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acclimatization {
    /// 5-7 shifts of progressive heat exposure completed.
    #[default]
    Acclimatized,
    /// New, returning or recently ill workers.
    NotAcclimatized,
}

impl Acclimatization {
    /// Uniform threshold shift for this status (°C).
    pub const fn shift_c(&self) -> f32 {
        match self {
            Acclimatization::Acclimatized => 0.0,
            Acclimatization::NotAcclimatized => NON_ACCLIMATIZED_SHIFT_C,
        }
    }
}

/// WBGT cut-points and wet-bulb band edges in force for one worker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskThresholds {
    /// WBGT cut-point A (°C): below is low risk.
    pub wbgt_a_c: f32,
    /// WBGT cut-point B (°C): A..B is caution.
    pub wbgt_b_c: f32,
    /// WBGT cut-point C (°C): at or above is withdrawal.
    pub wbgt_c_c: f32,
    /// Wet-bulb edge below which sweat evaporation is fully effective (°C).
    pub wb_safe_c: f32,
    /// Wet-bulb edge where strain starts rising (°C).
    pub wb_strain_c: f32,
    /// Wet-bulb evaporation ceiling (°C).
    pub wb_danger_c: f32,
}

impl RiskThresholds {
    /// Thresholds for a worker with the given acclimatization status.
    pub fn for_worker(acclimatization: Acclimatization) -> Self {
        let shift = acclimatization.shift_c();
        Self {
            wbgt_a_c: WBGT_CUT_A_C + shift,
            wbgt_b_c: WBGT_CUT_B_C + shift,
            wbgt_c_c: WBGT_CUT_C_C + shift,
            wb_safe_c: WET_BULB_SAFE_C + shift,
            wb_strain_c: WET_BULB_STRAIN_C + shift,
            wb_danger_c: WET_BULB_DANGER_C + shift,
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::for_worker(Acclimatization::Acclimatized)
    }
}

/// Physiological meaning of the natural wet-bulb reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WetBulbStatus {
    /// Body heat dissipation effective.
    Effective,
    /// Dissipation becoming limited.
    Limited,
    /// Body cooling inadequate.
    Inadequate,
    /// Dissipation compromised; at the evaporation ceiling.
    Compromised,
}

impl WetBulbStatus {
    /// Classify a natural wet-bulb reading against the band edges.
    pub fn classify(wet_bulb_c: f32, thresholds: &RiskThresholds) -> Self {
        if wet_bulb_c < thresholds.wb_safe_c {
            WetBulbStatus::Effective
        } else if wet_bulb_c < thresholds.wb_strain_c {
            WetBulbStatus::Limited
        } else if wet_bulb_c < thresholds.wb_danger_c {
            WetBulbStatus::Inadequate
        } else {
            WetBulbStatus::Compromised
        }
    }

    /// Field-friendly description.
    pub const fn description(&self) -> &'static str {
        match self {
            WetBulbStatus::Effective => "Body heat dissipation effective",
            WetBulbStatus::Limited => "Body heat dissipation becoming limited",
            WetBulbStatus::Inadequate => "Body cooling inadequate",
            WetBulbStatus::Compromised => "Body heat dissipation compromised",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acclimatized_baseline_values() {
        let t = RiskThresholds::for_worker(Acclimatization::Acclimatized);
        assert_eq!(t.wbgt_a_c, 29.0);
        assert_eq!(t.wbgt_b_c, 32.0);
        assert_eq!(t.wbgt_c_c, 35.0);
        assert_eq!(t.wb_safe_c, 26.0);
    }

    #[test]
    fn non_acclimatized_shifts_everything_down() {
        let t = RiskThresholds::for_worker(Acclimatization::NotAcclimatized);
        assert_eq!(t.wbgt_a_c, 27.0);
        assert_eq!(t.wbgt_b_c, 30.0);
        assert_eq!(t.wbgt_c_c, 33.0);
        assert_eq!(t.wb_safe_c, 24.0);
        assert_eq!(t.wb_strain_c, 26.0);
        assert_eq!(t.wb_danger_c, 28.0);
    }

    #[test]
    fn wet_bulb_bands() {
        let t = RiskThresholds::default();
        assert_eq!(WetBulbStatus::classify(24.0, &t), WetBulbStatus::Effective);
        assert_eq!(WetBulbStatus::classify(26.5, &t), WetBulbStatus::Limited);
        assert_eq!(WetBulbStatus::classify(29.0, &t), WetBulbStatus::Inadequate);
        assert_eq!(
            WetBulbStatus::classify(30.0, &t),
            WetBulbStatus::Compromised
        );
    }
}
