//! Baseline Freeze Controller
//!
//! ## Why freeze the baseline?
//!
//! A field assessment is a multi-step workflow: the operator enters a
//! reading, reviews the baseline WBGT, selects exposure penalties, applies
//! them, and saves. Host UIs re-run the evaluation many times during that
//! workflow, and floating-point jitter or incidental recomputation must not
//! let the baseline drift mid-assessment. The controller therefore locks the
//! first WBGT computed for a given environmental signature and serves that
//! frozen value until the signature genuinely changes.
//!
//! ## State machine
//!
//! ```text
//!            observe(new signature)            observe(same signature)
//! Unset ───────────────────────────▶ Frozen ─────────────────────────▶ Frozen
//!   ▲                                  │
//!   └──────────────────────────────────┘
//!        signature change / reset()
//! ```
//!
//! Signature change and explicit reset are the only ways back to `Unset`,
//! and both report [`Transition::Refrozen`]/invalidation so the session can
//! clear applied penalties atomically with the baseline - an effective WBGT
//! must never combine a penalty set with a baseline it was not applied to.
//!
//! The signature quantizes each input to three decimals; anything below
//! that is measurement noise, not an input change.

use crate::reading::EnvironmentalReading;
use libm::roundf;

/// Quantization scale for signature components (3 decimals).
const SIGNATURE_SCALE: f32 = 1000.0;

/// Quantized identity of an environmental reading.
///
/// Two readings compare equal when every component matches to three
/// decimals, giving stable `Eq` semantics without comparing raw floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvSignature([i32; 5]);

impl EnvSignature {
    /// Build the signature of a reading.
    pub fn of(reading: &EnvironmentalReading) -> Self {
        let q = |x: f32| roundf(x * SIGNATURE_SCALE) as i32;
        Self([
            q(reading.dry_bulb_c),
            q(reading.relative_humidity_pct),
            q(reading.wind_speed_ms),
            q(reading.globe_temp_c),
            q(reading.pressure_kpa),
        ])
    }
}

/// Result of feeding one evaluation's reading to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The stored baseline is still valid for this reading.
    Held,
    /// The baseline was (re)frozen: the signature was new or the controller
    /// had been reset. Any applied penalties are now stale.
    Refrozen,
}

/// Freeze-once holder for the baseline WBGT.
#[derive(Debug, Clone, Default)]
pub struct BaselineFreezeController {
    frozen_wbgt_c: Option<f32>,
    signature: Option<EnvSignature>,
}

impl BaselineFreezeController {
    /// Create an unset controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the reading for this evaluation together with its freshly
    /// computed baseline WBGT.
    ///
    /// Freezes `wbgt_raw_c` if the signature is new (or after a reset) and
    /// reports [`Transition::Refrozen`]; otherwise the stored value holds.
    pub fn observe(&mut self, signature: EnvSignature, wbgt_raw_c: f32) -> Transition {
        if self.signature != Some(signature) {
            self.frozen_wbgt_c = None;
            self.signature = Some(signature);
        }

        match self.frozen_wbgt_c {
            Some(_) => Transition::Held,
            None => {
                self.frozen_wbgt_c = Some(wbgt_raw_c);
                log::debug!("baseline frozen at {wbgt_raw_c:.2} °C");
                Transition::Refrozen
            }
        }
    }

    /// The frozen baseline WBGT, if any reading has been observed.
    pub fn frozen_wbgt_c(&self) -> Option<f32> {
        self.frozen_wbgt_c
    }

    /// Drop the frozen value and signature unconditionally. The next
    /// observation refreezes.
    pub fn reset(&mut self) {
        self.frozen_wbgt_c = None;
        self.signature = None;
    }
}
