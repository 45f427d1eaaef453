//! Cooling-Capacity Estimation (MWL) with Physiological Caps and Ratchet
//!
//! ## Model intent
//!
//! MWL (modeled work-load capacity, W/m²) stands in for an instrument
//! Thermal Work Limit reading when no instrument is on site. It is a
//! conservative proxy with four design rules:
//!
//! - capacity **falls** as WBGT rises (more heat load),
//! - capacity **rises** with wind (convective/evaporative support),
//! - capacity **falls** with radiant excess (globe above dry-bulb),
//! - capacity **falls** as humidity rises, with an extra penalty once the
//!   natural wet-bulb approaches the evaporation ceiling.
//!
//! The pipeline is multiplicative: a bounded quadratic base from the
//! baseline WBGT, then wind, radiant, humidity and wet-bulb-ceiling
//! modifiers, each clamped so no single input can drive the estimate
//! outside a realistic 0-450 W/m² band.
//!
//! The wet-bulb used by the ceiling penalty is recomputed from dry-bulb and
//! RH here, independent of the wet-bulb inside the baseline WBGT. The two
//! values are identical by construction but deliberately not shared state.
//!
//! ## Caps and ratchet
//!
//! On top of the model sit hard physiological ceilings (first matching rule
//! wins): extreme radiant load in still air limits a worker to ~115 W/m² no
//! matter what the multiplicative chain says.
//!
//! The environmental estimate also carries a **ratchet**: across repeated
//! evaluations of the same environmental signature the value may only hold
//! or fall, never bounce back up from transient recomputation. A signature
//! change discards the memory and the next estimate starts fresh. The
//! memory is `None` when unbounded.
//!
//! An instrument capacity reading (> 0 W/m²) substitutes for the model's
//! raw value; the cap table and ratchet still apply, and the estimate is
//! tagged [`CapacitySource::Instrument`].

use crate::constants::model::{
    ADHOC_LOSS_WM2_PER_C, BASE_INTERCEPT_WM2, BASE_WBGT_COEFF, CAPACITY_FLOOR_WM2,
    CAPACITY_MAX_WM2, CAP_DEFAULT_WM2, CAP_EXTREME_RADIANT_GLOBE_C, CAP_EXTREME_RADIANT_STILL_WM2,
    CAP_EXTREME_RADIANT_WIND_MS, CAP_SEVERE_RADIANT_GLOBE_C, CAP_SEVERE_RADIANT_WM2,
    CAP_WBGT_EXTREME_C, CAP_WBGT_EXTREME_WM2, CAP_WBGT_HIGH_C, CAP_WBGT_HIGH_WM2,
    HUMIDITY_DRY_BOOST, HUMIDITY_HIGH_KNEE_PCT, HUMIDITY_HIGH_PENALTY, HUMIDITY_LOW_KNEE_PCT,
    HUMIDITY_MID_PENALTY, HUMIDITY_MOD_MAX, HUMIDITY_MOD_MIN, PPE_LOSS_WM2_PER_C,
    RADIANT_LOSS_WM2_PER_C, RADIANT_MOD_COEFF, RADIANT_MOD_MAX, RADIANT_MOD_MIN,
    VEHICLE_LOSS_WM2_PER_C, WET_BULB_CEILING_C, WET_BULB_PENALTY_COEFF, WET_BULB_PENALTY_MIN,
    WIND_MOD_COEFF, WIND_MOD_MAX, WIND_MOD_MIN,
};
use crate::exposure::ExposurePenalties;
use crate::reading::EnvironmentalReading;
use crate::wetbulb::natural_wet_bulb_c;
use libm::{log1pf, roundf};

/// Quantization scale for the ratchet signature (2 decimals).
const RATCHET_SCALE: f32 = 100.0;

/// Where an environmental capacity estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapacitySource {
    /// Multiplicative model estimate.
    Model,
    /// Instrument TWL reading supplied by the operator.
    Instrument,
}

/// One environmental capacity estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityEstimate {
    /// Environmental cooling capacity after cap and ratchet (W/m²).
    pub environmental_wm2: f32,
    /// The physiological cap that was in force (W/m²).
    pub cap_wm2: f32,
    /// Model or instrument.
    pub source: CapacitySource,
}

/// Identity of the environment for ratchet purposes.
///
/// Includes the baseline WBGT and applied total penalty: a new baseline or
/// a different applied penalty set is a new assessment, not a transient
/// recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RatchetSignature([i32; 6]);

impl RatchetSignature {
    fn of(reading: &EnvironmentalReading, baseline_wbgt_c: f32, total_penalty_c: f32) -> Self {
        let q = |x: f32| roundf(x * RATCHET_SCALE) as i32;
        Self([
            q(reading.dry_bulb_c),
            q(reading.relative_humidity_pct),
            q(reading.wind_speed_ms),
            q(reading.globe_temp_c),
            q(baseline_wbgt_c),
            q(total_penalty_c),
        ])
    }
}

/// Modeled capacity before caps and ratchet (W/m²).
fn raw_model_wm2(reading: &EnvironmentalReading, baseline_wbgt_c: f32) -> f32 {
    let rh = reading.relative_humidity_pct.clamp(0.0, 100.0);
    let wind = reading.wind_speed_ms.max(0.0);

    // 1) Bounded quadratic base from WBGT
    let base =
        (BASE_INTERCEPT_WM2 - BASE_WBGT_COEFF * baseline_wbgt_c * baseline_wbgt_c)
            .clamp(0.0, CAPACITY_MAX_WM2);

    // 2) Wind benefit, log response
    let wind_mod = (1.0 + WIND_MOD_COEFF * log1pf(wind)).clamp(WIND_MOD_MIN, WIND_MOD_MAX);

    // 3) Radiant penalty from globe excess over dry-bulb
    let delta_globe = (reading.globe_temp_c - reading.dry_bulb_c).max(0.0);
    let radiant_mod =
        (1.0 - RADIANT_MOD_COEFF * delta_globe).clamp(RADIANT_MOD_MIN, RADIANT_MOD_MAX);

    // 4) Humidity modifier, piecewise in RH
    let humidity_mod = if rh <= HUMIDITY_LOW_KNEE_PCT {
        1.0 + HUMIDITY_DRY_BOOST * (HUMIDITY_LOW_KNEE_PCT - rh) / HUMIDITY_LOW_KNEE_PCT
    } else if rh <= HUMIDITY_HIGH_KNEE_PCT {
        1.0 - HUMIDITY_MID_PENALTY * (rh - HUMIDITY_LOW_KNEE_PCT)
            / (HUMIDITY_HIGH_KNEE_PCT - HUMIDITY_LOW_KNEE_PCT)
    } else {
        (1.0 - HUMIDITY_MID_PENALTY)
            - HUMIDITY_HIGH_PENALTY * (rh - HUMIDITY_HIGH_KNEE_PCT)
                / (100.0 - HUMIDITY_HIGH_KNEE_PCT)
    }
    .clamp(HUMIDITY_MOD_MIN, HUMIDITY_MOD_MAX);

    // 5) Evaporation-ceiling penalty, wet-bulb recomputed independently
    let wet_bulb = natural_wet_bulb_c(reading.dry_bulb_c, rh);
    let ceiling_pen = if wet_bulb > WET_BULB_CEILING_C {
        (1.0 - WET_BULB_PENALTY_COEFF * (wet_bulb - WET_BULB_CEILING_C))
            .clamp(WET_BULB_PENALTY_MIN, 1.0)
    } else {
        1.0
    };

    (base * wind_mod * radiant_mod * humidity_mod * ceiling_pen).clamp(0.0, CAPACITY_MAX_WM2)
}

/// Physiological cap for the given conditions (W/m²), first match wins.
fn physiological_cap_wm2(reading: &EnvironmentalReading, baseline_wbgt_c: f32) -> f32 {
    if reading.globe_temp_c >= CAP_EXTREME_RADIANT_GLOBE_C
        && reading.wind_speed_ms < CAP_EXTREME_RADIANT_WIND_MS
    {
        CAP_EXTREME_RADIANT_STILL_WM2
    } else if reading.globe_temp_c >= CAP_SEVERE_RADIANT_GLOBE_C {
        CAP_SEVERE_RADIANT_WM2
    } else if baseline_wbgt_c >= CAP_WBGT_EXTREME_C {
        CAP_WBGT_EXTREME_WM2
    } else if baseline_wbgt_c >= CAP_WBGT_HIGH_C {
        CAP_WBGT_HIGH_WM2
    } else {
        CAP_DEFAULT_WM2
    }
}

/// Capacity estimator with per-signature ratchet memory.
#[derive(Debug, Clone, Default)]
pub struct CoolingCapacityEstimator {
    memory: Option<(RatchetSignature, f32)>,
}

impl CoolingCapacityEstimator {
    /// Create an estimator with empty ratchet memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate environmental cooling capacity for one evaluation.
    ///
    /// `baseline_wbgt_c` is the frozen baseline, not the effective WBGT.
    /// `total_penalty_c` is the applied penalty total (zero before the first
    /// apply); it participates in the ratchet signature only.
    /// `instrument_wm2` substitutes for the model output when positive.
    pub fn estimate(
        &mut self,
        reading: &EnvironmentalReading,
        baseline_wbgt_c: f32,
        total_penalty_c: f32,
        instrument_wm2: Option<f32>,
    ) -> CapacityEstimate {
        let (raw, source) = match instrument_wm2 {
            Some(twl) if twl > 0.0 => (twl, CapacitySource::Instrument),
            _ => (raw_model_wm2(reading, baseline_wbgt_c), CapacitySource::Model),
        };
        let cap = physiological_cap_wm2(reading, baseline_wbgt_c);

        let signature = RatchetSignature::of(reading, baseline_wbgt_c, total_penalty_c);
        let previous = match self.memory {
            Some((sig, value)) if sig == signature => Some(value),
            _ => None,
        };

        let environmental = match previous {
            Some(prev) => raw.min(cap).min(prev),
            None => raw.min(cap),
        };
        self.memory = Some((signature, environmental));

        CapacityEstimate {
            environmental_wm2: environmental,
            cap_wm2: cap,
            source,
        }
    }

    /// Discard the ratchet memory; the next estimate starts fresh.
    pub fn reset(&mut self) {
        self.memory = None;
    }
}

/// Convert applied °C penalties into a capacity loss and floor the result.
///
/// Each term is floored at zero before weighting, so a (clamped-away)
/// negative selection can never *add* capacity.
pub fn apply_capacity_penalties(environmental_wm2: f32, penalties: &ExposurePenalties) -> f32 {
    let loss = PPE_LOSS_WM2_PER_C * penalties.ppe_c.max(0.0)
        + VEHICLE_LOSS_WM2_PER_C * penalties.vehicle_c.max(0.0)
        + RADIANT_LOSS_WM2_PER_C * penalties.radiant_c.max(0.0)
        + ADHOC_LOSS_WM2_PER_C * penalties.adhoc_c.max(0.0);

    (environmental_wm2 - loss).max(CAPACITY_FLOOR_WM2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> EnvironmentalReading {
        EnvironmentalReading::new(32.0, 60.0, 1.0, 35.0, 101.3)
    }

    #[test]
    fn reference_scenario_is_cap_bound() {
        // 32 °C / 60% / 1 m/s / globe 35: model raw lands near 360 W/m²,
        // the default 280 cap binds
        let mut est = CoolingCapacityEstimator::new();
        let e = est.estimate(&reading(), 28.09, 0.0, None);
        assert_eq!(e.environmental_wm2, CAP_DEFAULT_WM2);
        assert_eq!(e.cap_wm2, CAP_DEFAULT_WM2);
        assert_eq!(e.source, CapacitySource::Model);
    }

    #[test]
    fn extreme_radiant_still_air_cap() {
        // Globe 55 °C, wind 0.2 m/s: the 115 cap applies regardless of the
        // multiplicative model output
        let r = EnvironmentalReading::new(40.0, 30.0, 0.2, 55.0, 101.3);
        let mut est = CoolingCapacityEstimator::new();
        let e = est.estimate(&r, 33.0, 0.0, None);
        assert_eq!(e.environmental_wm2, CAP_EXTREME_RADIANT_STILL_WM2);
    }

    #[test]
    fn severe_radiant_cap_with_wind() {
        // Same globe with wind above 0.5 m/s drops to the 140 rule
        let r = EnvironmentalReading::new(40.0, 30.0, 1.5, 47.0, 101.3);
        let mut est = CoolingCapacityEstimator::new();
        let e = est.estimate(&r, 28.0, 0.0, None);
        assert_eq!(e.cap_wm2, CAP_SEVERE_RADIANT_WM2);
    }

    #[test]
    fn wbgt_caps() {
        let r = EnvironmentalReading::new(36.0, 60.0, 1.0, 38.0, 101.3);
        let mut est = CoolingCapacityEstimator::new();
        assert_eq!(est.estimate(&r, 33.5, 0.0, None).cap_wm2, CAP_WBGT_EXTREME_WM2);
        est.reset();
        assert_eq!(est.estimate(&r, 30.5, 0.0, None).cap_wm2, CAP_WBGT_HIGH_WM2);
    }

    #[test]
    fn ratchet_holds_or_falls_within_signature() {
        let mut est = CoolingCapacityEstimator::new();
        let first = est.estimate(&reading(), 28.09, 0.0, None).environmental_wm2;
        // Instrument reading above the memory cannot raise it back up
        let second = est
            .estimate(&reading(), 28.09, 0.0, Some(400.0))
            .environmental_wm2;
        assert!(second <= first);

        // Lower instrument reading pulls the memory down...
        let third = est
            .estimate(&reading(), 28.09, 0.0, Some(150.0))
            .environmental_wm2;
        assert_eq!(third, 150.0);
        // ...and the model cannot bounce it back
        let fourth = est.estimate(&reading(), 28.09, 0.0, None).environmental_wm2;
        assert_eq!(fourth, 150.0);
    }

    #[test]
    fn signature_change_resets_ratchet() {
        let mut est = CoolingCapacityEstimator::new();
        est.estimate(&reading(), 28.09, 0.0, Some(150.0));

        let mut windier = reading();
        windier.wind_speed_ms = 2.0;
        let fresh = est.estimate(&windier, 28.09, 0.0, None).environmental_wm2;
        assert!(fresh > 150.0, "fresh = {fresh}");
    }

    #[test]
    fn instrument_substitutes_but_cap_still_applies() {
        let mut est = CoolingCapacityEstimator::new();
        let e = est.estimate(&reading(), 28.09, 0.0, Some(350.0));
        assert_eq!(e.source, CapacitySource::Instrument);
        assert_eq!(e.environmental_wm2, CAP_DEFAULT_WM2);

        // Zero means "no instrument", not an instrument reading of zero
        est.reset();
        let e = est.estimate(&reading(), 28.09, 0.0, Some(0.0));
        assert_eq!(e.source, CapacitySource::Model);
    }

    #[test]
    fn penalty_loss_and_floor() {
        let p = ExposurePenalties {
            ppe_c: 2.0,
            vehicle_c: 0.0,
            radiant_c: 0.0,
            adhoc_c: 0.0,
        };
        assert_eq!(apply_capacity_penalties(280.0, &p), 244.0);

        // Heavy everything against a weak environment hits the 60 floor
        let heavy = ExposurePenalties {
            ppe_c: 3.0,
            vehicle_c: 3.0,
            radiant_c: 5.0,
            adhoc_c: 4.0,
        };
        assert_eq!(apply_capacity_penalties(115.0, &heavy), CAPACITY_FLOOR_WM2);

        // Negative terms are floored before weighting
        let negative = ExposurePenalties {
            ppe_c: -3.0,
            vehicle_c: 0.0,
            radiant_c: 0.0,
            adhoc_c: 0.0,
        };
        assert_eq!(apply_capacity_penalties(280.0, &negative), 280.0);
    }
}
