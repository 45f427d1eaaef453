//! Regulatory WBGT cut-points and wet-bulb physiological band edges.
//!
//! The WBGT values approximate NIOSH/OSHA screening guidance for
//! acclimatized industrial workers; the wet-bulb bands come from industrial
//! heat-strain literature on sweat-evaporation limits.

/// WBGT cut-point A: below this, low risk (°C).
pub const WBGT_CUT_A_C: f32 = 29.0;

/// WBGT cut-point B: A..B is caution (°C).
pub const WBGT_CUT_B_C: f32 = 32.0;

/// WBGT cut-point C: B..C is high strain, at or above is withdrawal (°C).
pub const WBGT_CUT_C_C: f32 = 35.0;

/// Uniform shift applied to every cut-point for non-acclimatized workers
/// (°C). Negative: thresholds move down, classifications become more
/// conservative.
pub const NON_ACCLIMATIZED_SHIFT_C: f32 = -2.0;

/// Natural wet-bulb below which sweat evaporation is fully effective (°C).
pub const WET_BULB_SAFE_C: f32 = 26.0;

/// Natural wet-bulb at which physiological strain starts rising (°C).
pub const WET_BULB_STRAIN_C: f32 = 28.0;

/// Natural wet-bulb evaporation ceiling; above this, body cooling is
/// compromised (°C).
pub const WET_BULB_DANGER_C: f32 = 30.0;
