//! Environmental reading: the raw input of every evaluation.
//!
//! ## Input discipline
//!
//! Readings arrive from manual entry or a weather collaborator, so the
//! constructor recovers out-of-range inputs locally instead of failing:
//! relative humidity is clamped to [0, 100]% and wind speed floored at zero.
//! These are sensor/entry artifacts, not conditions the operator can act on.
//!
//! Non-finite values (NaN, infinity) are different: nothing downstream is
//! defined for them, so [`EnvironmentalReading::is_valid`] gates the whole
//! evaluation and the session reports an awaiting-input state instead.
//!
//! A reading is immutable within one evaluation; it changes only when the
//! host explicitly supplies a new one.

use crate::constants::physics::{GLOBE_ESTIMATE_OFFSET_C, STANDARD_PRESSURE_KPA};

/// One set of raw environmental inputs, internally metric.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentalReading {
    /// Dry-bulb (air) temperature in °C.
    pub dry_bulb_c: f32,
    /// Relative humidity in %, clamped to [0, 100].
    pub relative_humidity_pct: f32,
    /// Wind speed in m/s, never negative.
    pub wind_speed_ms: f32,
    /// Globe temperature in °C (radiant load).
    pub globe_temp_c: f32,
    /// Station pressure in kPa.
    pub pressure_kpa: f32,
}

impl Default for EnvironmentalReading {
    fn default() -> Self {
        // Typical hot-site starting point: 32 °C, 60% RH, light wind,
        // globe 3 °C over dry-bulb, standard pressure.
        Self {
            dry_bulb_c: 32.0,
            relative_humidity_pct: 60.0,
            wind_speed_ms: 1.0,
            globe_temp_c: 35.0,
            pressure_kpa: STANDARD_PRESSURE_KPA,
        }
    }
}

impl EnvironmentalReading {
    /// Build a reading, recovering out-of-range RH and wind by clamping.
    pub fn new(
        dry_bulb_c: f32,
        relative_humidity_pct: f32,
        wind_speed_ms: f32,
        globe_temp_c: f32,
        pressure_kpa: f32,
    ) -> Self {
        Self {
            dry_bulb_c,
            relative_humidity_pct: relative_humidity_pct.clamp(0.0, 100.0),
            wind_speed_ms: wind_speed_ms.max(0.0),
            globe_temp_c,
            pressure_kpa,
        }
    }

    /// Build a reading from fetched weather data that carries no globe
    /// thermometer or station pressure: globe is estimated as dry-bulb plus
    /// a fixed radiant offset, pressure defaults to standard sea level.
    pub fn from_weather(dry_bulb_c: f32, relative_humidity_pct: f32, wind_speed_ms: f32) -> Self {
        Self::new(
            dry_bulb_c,
            relative_humidity_pct,
            wind_speed_ms,
            dry_bulb_c + GLOBE_ESTIMATE_OFFSET_C,
            STANDARD_PRESSURE_KPA,
        )
    }

    /// Check every field is a finite number.
    pub fn is_valid(&self) -> bool {
        self.dry_bulb_c.is_finite()
            && self.relative_humidity_pct.is_finite()
            && self.wind_speed_ms.is_finite()
            && self.globe_temp_c.is_finite()
            && self.pressure_kpa.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_inputs_recovered() {
        let r = EnvironmentalReading::new(35.0, 130.0, -2.0, 40.0, 101.3);
        assert_eq!(r.relative_humidity_pct, 100.0);
        assert_eq!(r.wind_speed_ms, 0.0);

        let r = EnvironmentalReading::new(35.0, -5.0, 1.0, 40.0, 101.3);
        assert_eq!(r.relative_humidity_pct, 0.0);
    }

    #[test]
    fn weather_reading_estimates_globe() {
        let r = EnvironmentalReading::from_weather(30.0, 55.0, 2.0);
        assert_eq!(r.globe_temp_c, 33.0);
        assert_eq!(r.pressure_kpa, STANDARD_PRESSURE_KPA);
    }

    #[test]
    fn non_finite_detected() {
        let mut r = EnvironmentalReading::default();
        assert!(r.is_valid());

        r.globe_temp_c = f32::NAN;
        assert!(!r.is_valid());
    }
}
