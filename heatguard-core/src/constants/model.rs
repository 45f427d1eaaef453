//! MWL cooling-capacity model and exposure-penalty calibration.
//!
//! The MWL (modeled work-load capacity, W/m²) is a conservative proxy for an
//! instrument-measured Thermal Work Limit, not a validated thermophysiology
//! engine. Every number here is a frozen calibration constant: the model was
//! tuned against field scenarios as a whole, so individual values must not
//! be re-derived in isolation.

// ===== BASE CAPACITY =====

/// Intercept of the quadratic base-capacity curve (W/m²).
///
/// `base = BASE_INTERCEPT − BASE_WBGT_COEFF · wbgt²`, clamped to
/// [0, CAPACITY_MAX_WM2]. Higher WBGT means lower capacity.
pub const BASE_INTERCEPT_WM2: f32 = 600.0;

/// Quadratic WBGT coefficient of the base-capacity curve.
pub const BASE_WBGT_COEFF: f32 = 0.30;

/// Upper clamp on modeled capacity (W/m²). Realistic ceiling for sustained
/// human cooling; keeps the proxy out of "berserk" territory.
pub const CAPACITY_MAX_WM2: f32 = 450.0;

/// Floor on operational capacity after penalty losses (W/m²).
///
/// Below this, the ratio-based strain profile would explode without adding
/// decision value; 60 W/m² is already firmly in withdrawal territory.
pub const CAPACITY_FLOOR_WM2: f32 = 60.0;

// ===== MULTIPLICATIVE MODIFIERS =====

/// Wind benefit: `1 + WIND_MOD_COEFF · ln(1 + wind)`, clamped to
/// [WIND_MOD_MIN, WIND_MOD_MAX]. 1 m/s gives roughly +12%.
pub const WIND_MOD_COEFF: f32 = 0.18;
/// Lower clamp on the wind modifier.
pub const WIND_MOD_MIN: f32 = 0.85;
/// Upper clamp on the wind modifier.
pub const WIND_MOD_MAX: f32 = 1.40;

/// Radiant penalty per °C of globe excess over dry-bulb.
pub const RADIANT_MOD_COEFF: f32 = 0.005;
/// Lower clamp on the radiant modifier.
pub const RADIANT_MOD_MIN: f32 = 0.75;
/// Upper clamp on the radiant modifier.
pub const RADIANT_MOD_MAX: f32 = 1.05;

/// RH knee below which dry air boosts evaporative capacity (%).
pub const HUMIDITY_LOW_KNEE_PCT: f32 = 20.0;
/// RH knee above which the penalty steepens (%).
pub const HUMIDITY_HIGH_KNEE_PCT: f32 = 60.0;
/// Maximum dry-air boost at 0% RH (fraction).
pub const HUMIDITY_DRY_BOOST: f32 = 0.08;
/// Penalty across the 20–60% band (fraction, reaching 0.90 at 60%).
pub const HUMIDITY_MID_PENALTY: f32 = 0.10;
/// Additional penalty slope above 60% RH (fraction over the 60–100 span).
pub const HUMIDITY_HIGH_PENALTY: f32 = 0.35;
/// Lower clamp on the humidity modifier.
pub const HUMIDITY_MOD_MIN: f32 = 0.55;
/// Upper clamp on the humidity modifier.
pub const HUMIDITY_MOD_MAX: f32 = 1.08;

/// Natural wet-bulb above which the evaporation-ceiling penalty engages (°C).
pub const WET_BULB_CEILING_C: f32 = 25.0;
/// Ceiling penalty per °C of wet-bulb above the knee.
pub const WET_BULB_PENALTY_COEFF: f32 = 0.015;
/// Lower clamp on the wet-bulb ceiling penalty.
pub const WET_BULB_PENALTY_MIN: f32 = 0.55;

// ===== PHYSIOLOGICAL CAP TABLE =====
//
// Hard ceilings on environmental capacity, first matching rule wins.
// Ordered from most to least extreme conditions.

/// Cap when globe ≥ 50 °C with near-still air (W/m²).
pub const CAP_EXTREME_RADIANT_STILL_WM2: f32 = 115.0;
/// Globe threshold for the extreme-radiant-still cap (°C).
pub const CAP_EXTREME_RADIANT_GLOBE_C: f32 = 50.0;
/// Wind threshold for the extreme-radiant-still cap (m/s).
pub const CAP_EXTREME_RADIANT_WIND_MS: f32 = 0.5;

/// Cap when globe ≥ 45 °C (W/m²).
pub const CAP_SEVERE_RADIANT_WM2: f32 = 140.0;
/// Globe threshold for the severe-radiant cap (°C).
pub const CAP_SEVERE_RADIANT_GLOBE_C: f32 = 45.0;

/// Cap when baseline WBGT ≥ 33 °C (W/m²).
pub const CAP_WBGT_EXTREME_WM2: f32 = 170.0;
/// WBGT threshold for the extreme cap (°C).
pub const CAP_WBGT_EXTREME_C: f32 = 33.0;

/// Cap when baseline WBGT ≥ 30 °C (W/m²).
pub const CAP_WBGT_HIGH_WM2: f32 = 220.0;
/// WBGT threshold for the high cap (°C).
pub const CAP_WBGT_HIGH_C: f32 = 30.0;

/// Default cap in all other conditions (W/m²).
pub const CAP_DEFAULT_WM2: f32 = 280.0;

// ===== EXPOSURE PENALTIES =====

/// Maximum clothing/PPE penalty after clamping (°C).
pub const PPE_PENALTY_MAX_C: f32 = 3.0;
/// Maximum vehicle/enclosure penalty after clamping (°C).
pub const VEHICLE_PENALTY_MAX_C: f32 = 3.0;
/// Maximum radiant/hot-surface penalty after clamping (°C).
pub const RADIANT_PENALTY_MAX_C: f32 = 5.0;
/// Maximum ad-hoc/site-specific penalty after clamping (°C).
pub const ADHOC_PENALTY_MAX_C: f32 = 4.0;
/// Global cap on the summed exposure penalty (°C).
pub const TOTAL_PENALTY_MAX_C: f32 = 10.0;

// Capacity loss per °C of applied penalty, by category (W/m² per °C).
// PPE weighs heaviest: it blocks evaporation directly.

/// Capacity loss weight for clothing/PPE penalties.
pub const PPE_LOSS_WM2_PER_C: f32 = 18.0;
/// Capacity loss weight for vehicle/enclosure penalties.
pub const VEHICLE_LOSS_WM2_PER_C: f32 = 12.0;
/// Capacity loss weight for radiant penalties.
pub const RADIANT_LOSS_WM2_PER_C: f32 = 10.0;
/// Capacity loss weight for ad-hoc penalties.
pub const ADHOC_LOSS_WM2_PER_C: f32 = 8.0;

// ===== HEAT-STRAIN PROFILE =====

/// Numerator scale of the HSP ratio (heat-load side).
pub const HSP_LOAD_SCALE: f32 = 200.0;
/// Denominator scale of the HSP ratio (cooling side).
pub const HSP_CAPACITY_SCALE: f32 = 30.0;
/// Floor on operational capacity inside the ratio, preventing division
/// blow-up on degraded inputs.
pub const HSP_CAPACITY_MIN_WM2: f32 = 1.0;

/// HSP below which cooling exceeds the heat load.
pub const HSP_MARGINAL_EDGE: f32 = 0.80;
/// HSP at and above which heat gain exceeds heat loss.
pub const HSP_EXCEEDED_EDGE: f32 = 1.00;
/// HSP at and above which the override forces withdrawal.
pub const HSP_WITHDRAWAL_EDGE: f32 = 1.30;
