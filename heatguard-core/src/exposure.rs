//! Exposure adjustment model: categorized WBGT penalties.
//!
//! Clothing, enclosures, radiant surfaces and site-specific factors all add
//! heat load the environmental reading cannot see. Each category carries an
//! independent °C delta, seeded from a preset and individually overridable.
//! Selections are stored unclamped; the safety clamps (per-category maxima
//! and the 10 °C global cap) bite when the operator applies them, so a wild
//! manual entry can never push the effective WBGT outside the calibrated
//! range.
//!
//! Selections are *not* consumed by evaluations until an explicit apply
//! action; the applied snapshot is what classification and the capacity
//! penalty see.

use crate::constants::model::{
    ADHOC_PENALTY_MAX_C, PPE_PENALTY_MAX_C, RADIANT_PENALTY_MAX_C, TOTAL_PENALTY_MAX_C,
    VEHICLE_PENALTY_MAX_C,
};

/// Clothing / PPE presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PpePreset {
    /// Ordinary work clothing.
    #[default]
    None,
    /// Light coveralls.
    Light,
    /// Moderate PPE (e.g. double layer, hood).
    Moderate,
    /// Heavy or vapor-barrier PPE.
    Heavy,
}

impl PpePreset {
    /// WBGT penalty for this preset (°C).
    pub const fn delta_c(&self) -> f32 {
        match self {
            PpePreset::None => 0.0,
            PpePreset::Light => 1.0,
            PpePreset::Moderate => 2.0,
            PpePreset::Heavy => 3.0,
        }
    }
}

/// Vehicle / enclosure presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnclosurePreset {
    /// Open-air work.
    #[default]
    None,
    /// Open cab or canopy.
    Open,
    /// Enclosed cab or container.
    Enclosed,
    /// Enclosed and poorly ventilated.
    PoorlyVentilated,
}

impl EnclosurePreset {
    /// WBGT penalty for this preset (°C).
    pub const fn delta_c(&self) -> f32 {
        match self {
            EnclosurePreset::None => 0.0,
            EnclosurePreset::Open => 1.0,
            EnclosurePreset::Enclosed => 2.0,
            EnclosurePreset::PoorlyVentilated => 3.0,
        }
    }
}

/// Radiant / hot-surface presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadiantPreset {
    /// No nearby radiant sources beyond what the globe reading captured.
    #[default]
    None,
    /// Hot surfaces in the work area.
    HotSurfaces,
    /// Direct radiant exposure (furnace face, open flame).
    DirectRadiant,
    /// Extreme radiant exposure.
    ExtremeRadiant,
}

impl RadiantPreset {
    /// WBGT penalty for this preset (°C).
    pub const fn delta_c(&self) -> f32 {
        match self {
            RadiantPreset::None => 0.0,
            RadiantPreset::HotSurfaces => 2.0,
            RadiantPreset::DirectRadiant => 4.0,
            RadiantPreset::ExtremeRadiant => 5.0,
        }
    }
}

/// Ad-hoc / site-specific presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdHocPreset {
    /// Nothing site-specific.
    #[default]
    None,
    /// Minor local factor.
    Minor,
    /// Moderate local factor.
    Moderate,
    /// Severe local factor.
    Severe,
}

impl AdHocPreset {
    /// WBGT penalty for this preset (°C).
    pub const fn delta_c(&self) -> f32 {
        match self {
            AdHocPreset::None => 0.0,
            AdHocPreset::Minor => 1.0,
            AdHocPreset::Moderate => 2.0,
            AdHocPreset::Severe => 4.0,
        }
    }
}

/// Current per-category penalty selections, internally °C.
///
/// Values may sit outside the category clamps until applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposurePenalties {
    /// Clothing / PPE delta (°C).
    pub ppe_c: f32,
    /// Vehicle / enclosure delta (°C).
    pub vehicle_c: f32,
    /// Radiant / hot-surface delta (°C).
    pub radiant_c: f32,
    /// Ad-hoc / site-specific delta (°C).
    pub adhoc_c: f32,
}

impl ExposurePenalties {
    /// Seed all four categories from presets.
    pub const fn from_presets(
        ppe: PpePreset,
        enclosure: EnclosurePreset,
        radiant: RadiantPreset,
        adhoc: AdHocPreset,
    ) -> Self {
        Self {
            ppe_c: ppe.delta_c(),
            vehicle_c: enclosure.delta_c(),
            radiant_c: radiant.delta_c(),
            adhoc_c: adhoc.delta_c(),
        }
    }

    /// Clamp each category into its safety range.
    pub fn clamped(&self) -> Self {
        Self {
            ppe_c: self.ppe_c.clamp(0.0, PPE_PENALTY_MAX_C),
            vehicle_c: self.vehicle_c.clamp(0.0, VEHICLE_PENALTY_MAX_C),
            radiant_c: self.radiant_c.clamp(0.0, RADIANT_PENALTY_MAX_C),
            adhoc_c: self.adhoc_c.clamp(0.0, ADHOC_PENALTY_MAX_C),
        }
    }

    /// Clamped per-category sum, capped globally (°C). Always in [0, 10].
    pub fn total_c(&self) -> f32 {
        let c = self.clamped();
        (c.ppe_c + c.vehicle_c + c.radiant_c + c.adhoc_c).min(TOTAL_PENALTY_MAX_C)
    }
}

/// Snapshot of the penalties at the moment of an apply action.
///
/// The sequence number is monotonic per session; the audit log keys on it so
/// repeated rendering or repeated saves of the same apply never duplicate an
/// entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedAdjustments {
    /// Clamped per-category penalties as applied.
    pub penalties: ExposurePenalties,
    /// Capped total penalty (°C).
    pub total_c: f32,
    /// Monotonic apply sequence number within the session.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_seed_deltas() {
        let p = ExposurePenalties::from_presets(
            PpePreset::Moderate,
            EnclosurePreset::None,
            RadiantPreset::HotSurfaces,
            AdHocPreset::Minor,
        );
        assert_eq!(p.ppe_c, 2.0);
        assert_eq!(p.vehicle_c, 0.0);
        assert_eq!(p.radiant_c, 2.0);
        assert_eq!(p.adhoc_c, 1.0);
        assert_eq!(p.total_c(), 5.0);
    }

    #[test]
    fn category_clamps() {
        let p = ExposurePenalties {
            ppe_c: 9.0,
            vehicle_c: -2.0,
            radiant_c: 6.5,
            adhoc_c: 4.5,
        };
        let c = p.clamped();
        assert_eq!(c.ppe_c, 3.0);
        assert_eq!(c.vehicle_c, 0.0);
        assert_eq!(c.radiant_c, 5.0);
        assert_eq!(c.adhoc_c, 4.0);
    }

    #[test]
    fn global_cap_after_category_clamps() {
        // Per-category maxima sum to 15, global cap brings it to 10
        let p = ExposurePenalties {
            ppe_c: 100.0,
            vehicle_c: 100.0,
            radiant_c: 100.0,
            adhoc_c: 100.0,
        };
        assert_eq!(p.total_c(), TOTAL_PENALTY_MAX_C);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(ExposurePenalties::default().total_c(), 0.0);
    }
}
