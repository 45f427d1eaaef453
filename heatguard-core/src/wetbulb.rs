//! Natural Wet-Bulb Estimation (Stull Approximation)
//!
//! ## Physics Background
//!
//! The natural wet-bulb temperature is the reading of a water-wicked
//! thermometer in ambient air: it reflects how much cooling evaporation can
//! still deliver, which makes it the closest single number to a true
//! physiological limit. At 100% RH the wet-bulb equals the dry-bulb and
//! sweating stops working entirely.
//!
//! Stull (2011) fitted an inverse psychrometric function valid for RH in
//! [0, 100]% at standard pressure:
//!
//! ```text
//! wb = t·atan(0.151977·sqrt(rh + 8.313659))
//!    + atan(t + rh) − atan(rh − 1.676331)
//!    + 0.00391838·rh^1.5·atan(0.023101·rh)
//!    − 4.686035
//! ```
//!
//! Accuracy is ~0.3 °C over field-relevant conditions - sufficient both for
//! the WBGT weighting and for the capacity model's evaporation-ceiling
//! penalty.
//!
//! This is a pure function with no failure modes: RH is clamped to its
//! domain and the arctangent terms are defined everywhere.

use crate::constants::physics::{STULL_C1, STULL_C2, STULL_C3, STULL_C4, STULL_C5, STULL_C6};
use libm::{atanf, powf, sqrtf};

/// Natural wet-bulb temperature in °C from dry-bulb (°C) and relative
/// humidity (%, clamped to [0, 100]).
///
/// Recomputed on every call; callers that need the same value twice make two
/// calls rather than sharing state.
pub fn natural_wet_bulb_c(dry_bulb_c: f32, relative_humidity_pct: f32) -> f32 {
    let rh = relative_humidity_pct.clamp(0.0, 100.0);
    let t = dry_bulb_c;

    t * atanf(STULL_C1 * sqrtf(rh + STULL_C2)) + atanf(t + rh) - atanf(rh - STULL_C3)
        + STULL_C4 * powf(rh, 1.5) * atanf(STULL_C5 * rh)
        - STULL_C6
}
