//! Unit conversions between internal and display representations.
//!
//! Internal truth is always metric: °C, m/s, kPa. Display units only affect
//! what a presentation collaborator shows and the display-unit duplicate
//! stored in audit records. Conversions are exact linear maps, so they have
//! no failure modes.

/// Factor from m/s to mph.
const MS_TO_MPH: f32 = 2.23694;

/// Factor from kPa to inHg.
const KPA_TO_INHG: f32 = 0.2953;

/// Convert Celsius to Fahrenheit.
#[inline]
pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius.
#[inline]
pub fn fahrenheit_to_celsius(f: f32) -> f32 {
    (f - 32.0) * 5.0 / 9.0
}

/// Convert a Celsius temperature *delta* to a Fahrenheit delta (no offset).
#[inline]
pub fn celsius_delta_to_fahrenheit(dc: f32) -> f32 {
    dc * 9.0 / 5.0
}

/// Convert metres per second to miles per hour.
#[inline]
pub fn ms_to_mph(v: f32) -> f32 {
    v * MS_TO_MPH
}

/// Convert miles per hour to metres per second.
#[inline]
pub fn mph_to_ms(v: f32) -> f32 {
    v / MS_TO_MPH
}

/// Convert kilopascals to inches of mercury.
#[inline]
pub fn kpa_to_inhg(k: f32) -> f32 {
    k * KPA_TO_INHG
}

/// Convert inches of mercury to kilopascals.
#[inline]
pub fn inhg_to_kpa(i: f32) -> f32 {
    i / KPA_TO_INHG
}

/// Display unit system selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayUnits {
    /// °C, m/s, kPa (internal truth).
    #[default]
    Metric,
    /// °F, mph, inHg.
    Imperial,
}

impl DisplayUnits {
    /// Temperature unit suffix for this system.
    pub const fn temp_unit(&self) -> &'static str {
        match self {
            DisplayUnits::Metric => "°C",
            DisplayUnits::Imperial => "°F",
        }
    }

    /// Convert an internal °C temperature into this display system.
    pub fn display_temp(&self, c: f32) -> f32 {
        match self {
            DisplayUnits::Metric => c,
            DisplayUnits::Imperial => celsius_to_fahrenheit(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_round_trip() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 1e-5);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-4);
        assert!((fahrenheit_to_celsius(celsius_to_fahrenheit(36.6)) - 36.6).abs() < 1e-4);
    }

    #[test]
    fn delta_has_no_offset() {
        // A 2 °C penalty is 3.6 °F, not 35.6 °F
        assert!((celsius_delta_to_fahrenheit(2.0) - 3.6).abs() < 1e-5);
    }

    #[test]
    fn speed_and_pressure() {
        assert!((ms_to_mph(1.0) - 2.23694).abs() < 1e-5);
        assert!((mph_to_ms(ms_to_mph(5.5)) - 5.5).abs() < 1e-5);
        assert!((kpa_to_inhg(101.3) - 29.91389).abs() < 1e-3);
        assert!((inhg_to_kpa(kpa_to_inhg(95.0)) - 95.0).abs() < 1e-4);
    }

    #[test]
    fn display_units() {
        assert_eq!(DisplayUnits::Metric.temp_unit(), "°C");
        assert!((DisplayUnits::Imperial.display_temp(30.0) - 86.0).abs() < 1e-4);
        assert_eq!(DisplayUnits::Metric.display_temp(30.0), 30.0);
    }
}
