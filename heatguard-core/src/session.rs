//! Assessment Session: the evaluation context and action surface.
//!
//! ## Overview
//!
//! One `AssessmentSession` owns everything a single field assessment needs:
//! the current reading, the operator's selections, the frozen baseline, the
//! capacity ratchet memory and the audit log. Sessions are independent -
//! nothing is shared between concurrent assessments, so the engine needs no
//! synchronization.
//!
//! Every derivation is an ordered, synchronous pass triggered by one of
//! three external events:
//!
//! ```text
//! input change ──▶ evaluate()            (derive, freeze/invalidate)
//! apply        ──▶ apply_adjustments()   (bind penalties to the baseline)
//! save         ──▶ save(timestamp)       (append one audit record)
//! ```
//!
//! ## Ordering guarantee
//!
//! An effective WBGT is never computed from penalties applied against a
//! stale baseline. `apply_adjustments` re-observes the current reading
//! before binding, and the freeze controller invalidates applied penalties
//! atomically with the baseline whenever the environmental signature
//! changes.
//!
//! ## Void states, not zeros
//!
//! [`Evaluation`] carries `Option` fields: before a valid reading exists,
//! baseline, effective WBGT, capacity, HSP and risk are all `None`. A
//! missing HSP is "not computed", never 0.0 - displays must render it as a
//! void state.

use crate::audit::{AuditLog, AuditRecord, MAX_LOCATION_LEN};
use crate::baseline::{BaselineFreezeController, EnvSignature, Transition};
use crate::capacity::{
    apply_capacity_penalties, CapacityEstimate, CapacitySource, CoolingCapacityEstimator,
};
use crate::errors::{EngineError, EngineResult};
use crate::exposure::{AppliedAdjustments, ExposurePenalties};
use crate::reading::EnvironmentalReading;
use crate::risk::{resolve_final_risk, RiskLevel};
use crate::strain::{heat_strain_profile, StrainBalance};
use crate::thresholds::{Acclimatization, RiskThresholds, WetBulbStatus};
use crate::time::{TimeSource, Timestamp};
use crate::units::DisplayUnits;
use crate::wbgt::baseline_wbgt_c;
use crate::wetbulb::natural_wet_bulb_c;
use heapless::String;

/// Complete derived output of one evaluation pass.
///
/// All temperatures in °C, capacities in W/m². `None` means "not computed",
/// see the module docs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Natural wet-bulb, always derivable from a valid reading.
    pub wet_bulb_c: Option<f32>,
    /// Physiological wet-bulb status.
    pub wet_bulb_status: Option<WetBulbStatus>,
    /// Frozen baseline WBGT.
    pub baseline_wbgt_c: Option<f32>,
    /// Applied total penalty (zero until the first apply).
    pub total_penalty_c: f32,
    /// Effective WBGT: frozen baseline plus applied penalties.
    pub effective_wbgt_c: Option<f32>,
    /// Environmental cooling capacity (before penalty losses).
    pub environmental_capacity_wm2: Option<f32>,
    /// Operational cooling capacity (after penalty losses).
    pub operational_capacity_wm2: Option<f32>,
    /// Whether the capacity came from the model or an instrument.
    pub capacity_source: Option<CapacitySource>,
    /// Heat-strain profile ratio.
    pub hsp: Option<f32>,
    /// Interpretation band of the HSP.
    pub strain_balance: Option<StrainBalance>,
    /// WBGT-derived band, before the HSP override.
    pub wbgt_band: Option<RiskLevel>,
    /// Final resolved risk level.
    pub final_risk: Option<RiskLevel>,
    /// Thresholds in force for this evaluation.
    pub thresholds: RiskThresholds,
    /// Operator-entered instrument WBGT, informational only.
    pub instrument_wbgt_c: Option<f32>,
}

impl Evaluation {
    /// An awaiting-input evaluation with nothing derived.
    fn awaiting_input(thresholds: RiskThresholds) -> Self {
        Self {
            wet_bulb_c: None,
            wet_bulb_status: None,
            baseline_wbgt_c: None,
            total_penalty_c: 0.0,
            effective_wbgt_c: None,
            environmental_capacity_wm2: None,
            operational_capacity_wm2: None,
            capacity_source: None,
            hsp: None,
            strain_balance: None,
            wbgt_band: None,
            final_risk: None,
            thresholds,
            instrument_wbgt_c: None,
        }
    }
}

/// Evaluation context for one field assessment.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    reading: Option<EnvironmentalReading>,
    acclimatization: Acclimatization,
    display_units: DisplayUnits,
    location: String<MAX_LOCATION_LEN>,
    penalties: ExposurePenalties,
    instrument_capacity_wm2: Option<f32>,
    instrument_wbgt_c: Option<f32>,
    baseline: BaselineFreezeController,
    estimator: CoolingCapacityEstimator,
    applied: Option<AppliedAdjustments>,
    apply_sequence: u32,
    audit: AuditLog,
}

impl AssessmentSession {
    /// Create a session awaiting its first environmental reading.
    pub fn new() -> Self {
        Self::default()
    }

    // ----- inputs -------------------------------------------------------

    /// Replace the environmental reading.
    ///
    /// The change takes effect at the next evaluation or apply; if the
    /// signature differs, the baseline refreezes and applied penalties are
    /// cleared there.
    pub fn set_reading(&mut self, reading: EnvironmentalReading) {
        self.reading = Some(reading);
    }

    /// Collaborator seam for external data fetches: `None` (fetch failed or
    /// no fresh data) leaves the current reading unchanged.
    pub fn ingest(&mut self, reading: Option<EnvironmentalReading>) {
        match reading {
            Some(r) => self.set_reading(r),
            None => log::debug!("no fresh environmental data; reading unchanged"),
        }
    }

    /// Current environmental reading, if one has been supplied.
    pub fn reading(&self) -> Option<&EnvironmentalReading> {
        self.reading.as_ref()
    }

    /// Replace the penalty selections. Selections are not consumed until an
    /// explicit [`Self::apply_adjustments`].
    pub fn set_penalties(&mut self, penalties: ExposurePenalties) {
        self.penalties = penalties;
    }

    /// Current (unapplied) penalty selections.
    pub fn penalties(&self) -> &ExposurePenalties {
        &self.penalties
    }

    /// Set the worker's acclimatization status.
    pub fn set_acclimatization(&mut self, status: Acclimatization) {
        self.acclimatization = status;
    }

    /// Set the display unit system (presentation only).
    pub fn set_display_units(&mut self, units: DisplayUnits) {
        self.display_units = units;
    }

    /// Set the location label recorded in audit entries; truncated to the
    /// inline capacity.
    pub fn set_location(&mut self, label: &str) {
        self.location.clear();
        for ch in label.chars() {
            if self.location.push(ch).is_err() {
                break;
            }
        }
    }

    /// Supply an instrument TWL reading (W/m²). Values ≤ 0 mean "no
    /// instrument" and the model is used.
    pub fn set_instrument_capacity(&mut self, twl_wm2: f32) {
        self.instrument_capacity_wm2 = (twl_wm2 > 0.0).then_some(twl_wm2);
    }

    /// Supply an instrument WBGT reading (°C). Informational only; never
    /// consumed by classification.
    pub fn set_instrument_wbgt(&mut self, wbgt_c: f32) {
        self.instrument_wbgt_c = (wbgt_c > 0.0).then_some(wbgt_c);
    }

    // ----- derivation ---------------------------------------------------

    /// Observe the current reading: freeze the baseline on a new signature
    /// and clear applied penalties atomically on invalidation.
    ///
    /// Returns the frozen baseline, or `None` for an invalid reading.
    fn observe_reading(&mut self) -> Option<f32> {
        let reading = self.reading.filter(EnvironmentalReading::is_valid)?;

        let signature = EnvSignature::of(&reading);
        let raw = baseline_wbgt_c(&reading);
        if self.baseline.observe(signature, raw) == Transition::Refrozen && self.applied.is_some()
        {
            log::debug!("environment changed; clearing applied adjustments");
            self.applied = None;
        }
        self.baseline.frozen_wbgt_c()
    }

    /// Run one full derivation pass over the current state.
    ///
    /// Never fails: with no valid reading the result is the awaiting-input
    /// state. Repeated calls with unchanged inputs are stable - the frozen
    /// baseline holds and the capacity ratchet can only hold or fall.
    pub fn evaluate(&mut self) -> Evaluation {
        let thresholds = RiskThresholds::for_worker(self.acclimatization);

        let Some(baseline) = self.observe_reading() else {
            return Evaluation::awaiting_input(thresholds);
        };
        // observe_reading succeeded, so a valid reading exists
        let reading = self.reading.unwrap_or_default();

        let wet_bulb = natural_wet_bulb_c(reading.dry_bulb_c, reading.relative_humidity_pct);

        let (applied_penalties, total_penalty) = match &self.applied {
            Some(a) => (a.penalties, a.total_c),
            None => (ExposurePenalties::default(), 0.0),
        };
        let effective = baseline + total_penalty;

        let estimate: CapacityEstimate = self.estimator.estimate(
            &reading,
            baseline,
            total_penalty,
            self.instrument_capacity_wm2,
        );
        let operational = apply_capacity_penalties(estimate.environmental_wm2, &applied_penalties);

        let hsp = heat_strain_profile(effective, operational);
        let wbgt_band = RiskLevel::from_wbgt(effective, &thresholds);
        let final_risk = resolve_final_risk(wbgt_band, hsp);

        Evaluation {
            wet_bulb_c: Some(wet_bulb),
            wet_bulb_status: Some(WetBulbStatus::classify(wet_bulb, &thresholds)),
            baseline_wbgt_c: Some(baseline),
            total_penalty_c: total_penalty,
            effective_wbgt_c: Some(effective),
            environmental_capacity_wm2: Some(estimate.environmental_wm2),
            operational_capacity_wm2: Some(operational),
            capacity_source: Some(estimate.source),
            hsp: Some(hsp),
            strain_balance: Some(StrainBalance::classify(hsp)),
            wbgt_band: Some(wbgt_band),
            final_risk: Some(final_risk),
            thresholds,
            instrument_wbgt_c: self.instrument_wbgt_c,
        }
    }

    // ----- actions ------------------------------------------------------

    /// Apply the current penalty selections against the frozen baseline.
    ///
    /// Re-observes the reading first, so penalties always bind to the
    /// baseline of the environment they were selected under. Returns the
    /// new effective WBGT.
    ///
    /// # Errors
    ///
    /// [`EngineError::BaselineUnavailable`] when no valid reading has
    /// produced a frozen baseline.
    pub fn apply_adjustments(&mut self) -> EngineResult<f32> {
        let baseline = self
            .observe_reading()
            .ok_or(EngineError::BaselineUnavailable)?;

        let clamped = self.penalties.clamped();
        let total = self.penalties.total_c();
        self.apply_sequence += 1;
        self.applied = Some(AppliedAdjustments {
            penalties: clamped,
            total_c: total,
            sequence: self.apply_sequence,
        });

        let effective = baseline + total;
        log::info!(
            "adjustments applied: +{total:.1} °C -> effective WBGT {effective:.1} °C (seq {})",
            self.apply_sequence
        );
        Ok(effective)
    }

    /// Clear all derived state unconditionally: frozen baseline, applied
    /// penalties and the capacity ratchet memory. Inputs and the audit log
    /// survive.
    pub fn reset(&mut self) {
        self.baseline.reset();
        self.estimator.reset();
        self.applied = None;
        log::info!("assessment reset");
    }

    /// Append one audit record for the current applied evaluation.
    ///
    /// Idempotent per apply: returns `Ok(false)` when the current apply
    /// sequence is already logged, so repeated rendering never duplicates
    /// an entry.
    ///
    /// # Errors
    ///
    /// [`EngineError::CapacityUnavailable`] when no applied evaluation
    /// exists to record.
    pub fn save(&mut self, timestamp: Timestamp) -> EngineResult<bool> {
        let evaluation = self.evaluate();
        let sequence = match &self.applied {
            Some(a) => a.sequence,
            None => return Err(EngineError::CapacityUnavailable),
        };
        let (Some(wet_bulb), Some(baseline), Some(effective), Some(hsp), Some(risk)) = (
            evaluation.wet_bulb_c,
            evaluation.baseline_wbgt_c,
            evaluation.effective_wbgt_c,
            evaluation.hsp,
            evaluation.final_risk,
        ) else {
            return Err(EngineError::CapacityUnavailable);
        };

        // An applied evaluation implies a valid reading
        let reading = self.reading.unwrap_or_default();
        let record = AuditRecord {
            timestamp,
            location: self.location.clone(),
            dry_bulb_c: reading.dry_bulb_c,
            relative_humidity_pct: reading.relative_humidity_pct,
            globe_temp_c: reading.globe_temp_c,
            wind_speed_ms: reading.wind_speed_ms,
            wet_bulb_c: wet_bulb,
            baseline_wbgt_c: baseline,
            total_penalty_c: evaluation.total_penalty_c,
            effective_wbgt_c: effective,
            effective_wbgt_display: self.display_units.display_temp(effective),
            hsp,
            risk,
        };

        let appended = self.audit.append(record, sequence);
        if appended {
            log::info!("audit record saved (seq {sequence})");
        }
        Ok(appended)
    }

    /// [`Self::save`] with the timestamp drawn from a host-supplied clock.
    ///
    /// # Errors
    ///
    /// Same as [`Self::save`].
    pub fn save_with<T: TimeSource>(&mut self, clock: &T) -> EngineResult<bool> {
        self.save(clock.now())
    }

    /// The audit log for this session.
    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_reading() -> EnvironmentalReading {
        EnvironmentalReading::new(32.0, 60.0, 1.0, 35.0, 101.3)
    }

    #[test]
    fn awaiting_input_on_invalid_reading() {
        let mut session = AssessmentSession::new();
        session.set_reading(EnvironmentalReading::new(
            f32::NAN,
            60.0,
            1.0,
            35.0,
            101.3,
        ));

        let eval = session.evaluate();
        assert_eq!(eval.baseline_wbgt_c, None);
        assert_eq!(eval.hsp, None);
        assert_eq!(eval.final_risk, None);
    }

    #[test]
    fn effective_tracks_frozen_baseline_before_apply() {
        let mut session = AssessmentSession::new();
        session.set_reading(hot_reading());

        let eval = session.evaluate();
        assert_eq!(eval.effective_wbgt_c, eval.baseline_wbgt_c);
        assert_eq!(eval.total_penalty_c, 0.0);
        // Penalty selections alone change nothing
        session.set_penalties(ExposurePenalties {
            ppe_c: 2.0,
            ..Default::default()
        });
        let eval = session.evaluate();
        assert_eq!(eval.effective_wbgt_c, eval.baseline_wbgt_c);
    }

    #[test]
    fn apply_requires_baseline() {
        // Fresh session: no reading has ever produced a frozen baseline
        let mut session = AssessmentSession::new();
        assert_eq!(
            session.apply_adjustments(),
            Err(EngineError::BaselineUnavailable)
        );

        // An invalid reading is no better
        session.set_reading(EnvironmentalReading::new(
            f32::NAN,
            60.0,
            1.0,
            35.0,
            101.3,
        ));
        assert_eq!(
            session.apply_adjustments(),
            Err(EngineError::BaselineUnavailable)
        );
    }

    #[test]
    fn ingest_none_is_no_change() {
        let mut session = AssessmentSession::new();
        session.ingest(None);
        assert_eq!(session.reading(), None);

        session.set_reading(hot_reading());
        session.ingest(None);
        assert_eq!(session.reading(), Some(&hot_reading()));
    }

    #[test]
    fn save_without_apply_is_not_computed() {
        let mut session = AssessmentSession::new();
        session.set_reading(hot_reading());
        session.evaluate();
        assert_eq!(session.save(1000), Err(EngineError::CapacityUnavailable));
    }

    #[test]
    fn location_label_truncates() {
        let mut session = AssessmentSession::new();
        let long = "x".repeat(MAX_LOCATION_LEN + 20);
        session.set_location(&long);
        session.set_reading(hot_reading());
        session.apply_adjustments().unwrap();
        session.save(1).unwrap();
        assert_eq!(
            session.audit_log().entries()[0].location.len(),
            MAX_LOCATION_LEN
        );
    }
}
