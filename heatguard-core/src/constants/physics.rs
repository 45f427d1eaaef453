//! Psychrometric and WBGT formula constants.
//!
//! These values come from published approximations and standard index
//! definitions. They are not calibration knobs.

// ===== STULL NATURAL WET-BULB APPROXIMATION =====
//
// Stull (2011), "Wet-Bulb Temperature from Relative Humidity and Air
// Temperature", J. Appl. Meteor. Climatol. 50. Valid for RH in [0, 100]%
// at standard pressure; accuracy ~0.3 °C over field-relevant ranges.

/// Coefficient on `sqrt(rh + STULL_C2)` inside the leading arctangent term.
pub const STULL_C1: f32 = 0.151977;

/// Offset added to RH before the square root in the leading term.
pub const STULL_C2: f32 = 8.313659;

/// Offset subtracted from RH in the third arctangent term.
pub const STULL_C3: f32 = 1.676331;

/// Coefficient on the `rh^1.5 · atan(STULL_C5 · rh)` term.
pub const STULL_C4: f32 = 0.00391838;

/// Coefficient on RH inside the fourth arctangent term.
pub const STULL_C5: f32 = 0.023101;

/// Constant offset of the Stull approximation (°C).
pub const STULL_C6: f32 = 4.686035;

// ===== OUTDOOR WBGT WEIGHTING =====
//
// ISO 7243 outdoor (solar load) weighting of the component temperatures.

/// Natural wet-bulb weight in the outdoor WBGT sum.
pub const WBGT_WET_BULB_WEIGHT: f32 = 0.7;

/// Globe-temperature weight in the outdoor WBGT sum.
pub const WBGT_GLOBE_WEIGHT: f32 = 0.2;

/// Dry-bulb weight in the outdoor WBGT sum.
pub const WBGT_DRY_BULB_WEIGHT: f32 = 0.1;

// ===== WIND-DAMPED GLOBE CORRECTION =====

/// Coefficient on `sqrt(wind)` in the globe damping factor
/// `1 / (1 + 0.4·sqrt(v))`.
///
/// Higher wind mixes the globe toward the dry-bulb reading, standing in for
/// the convective term of a full globe heat-balance.
pub const GLOBE_WIND_DAMPING_COEFF: f32 = 0.4;

/// Floor applied to wind speed before the damping factor (m/s).
///
/// Keeps the correction defined in still air and reflects that a truly
/// zero-wind field reading is below anemometer resolution anyway.
pub const GLOBE_WIND_FLOOR_MS: f32 = 0.1;

// ===== FIELD ESTIMATES =====

/// Default globe-temperature excess over dry-bulb (°C) when no globe
/// thermometer reading is available.
///
/// Matches the auto-estimate applied to fetched weather data, which reports
/// shade temperature only.
pub const GLOBE_ESTIMATE_OFFSET_C: f32 = 3.0;

/// Standard sea-level pressure (kPa), used when a collaborator supplies no
/// station pressure.
pub const STANDARD_PRESSURE_KPA: f32 = 101.3;
