//! Baseline WBGT calculation with wind-damped globe correction.
//!
//! Outdoor WBGT weights the natural wet-bulb, globe and dry-bulb readings
//! 0.7 / 0.2 / 0.1. Before the weighting, the globe temperature is damped
//! toward the dry-bulb as wind rises - convection strips heat from the globe
//! the same way it does from a worker, so a 55 °C globe in a stiff breeze
//! carries less radiant load than the same globe in still air:
//!
//! ```text
//! v         = max(wind, 0.1)
//! damping   = 1 / (1 + 0.4·sqrt(v))
//! globe_adj = dry_bulb + (globe − dry_bulb)·damping
//! ```
//!
//! No clamping is applied here: WBGT is a physical quantity, and its
//! expected range is enforced only at classification.

use crate::constants::physics::{
    GLOBE_WIND_DAMPING_COEFF, GLOBE_WIND_FLOOR_MS, WBGT_DRY_BULB_WEIGHT, WBGT_GLOBE_WEIGHT,
    WBGT_WET_BULB_WEIGHT,
};
use crate::reading::EnvironmentalReading;
use crate::wetbulb::natural_wet_bulb_c;
use libm::sqrtf;

/// Globe temperature corrected toward dry-bulb under wind (°C).
pub fn wind_damped_globe_c(dry_bulb_c: f32, globe_temp_c: f32, wind_speed_ms: f32) -> f32 {
    let v = wind_speed_ms.max(GLOBE_WIND_FLOOR_MS);
    let damping = 1.0 / (1.0 + GLOBE_WIND_DAMPING_COEFF * sqrtf(v));
    dry_bulb_c + (globe_temp_c - dry_bulb_c) * damping
}

/// Outdoor WBGT (°C) from a raw environmental reading.
///
/// Recomputes the natural wet-bulb internally; the caller is free to compute
/// it again for display without affecting this result.
pub fn baseline_wbgt_c(reading: &EnvironmentalReading) -> f32 {
    let wet_bulb = natural_wet_bulb_c(reading.dry_bulb_c, reading.relative_humidity_pct);
    let globe_adj = wind_damped_globe_c(
        reading.dry_bulb_c,
        reading.globe_temp_c,
        reading.wind_speed_ms,
    );

    WBGT_WET_BULB_WEIGHT * wet_bulb
        + WBGT_GLOBE_WEIGHT * globe_adj
        + WBGT_DRY_BULB_WEIGHT * reading.dry_bulb_c
}
