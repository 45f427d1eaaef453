//! Property tests for the model invariants
//!
//! The clamps and ratchets in the capacity and penalty pipeline exist so
//! that no combination of operator inputs can push a derived value outside
//! its calibrated band. Each property here drives one of those guarantees
//! with arbitrary inputs.

use heatguard_core::capacity::{apply_capacity_penalties, CoolingCapacityEstimator};
use heatguard_core::reading::EnvironmentalReading;
use heatguard_core::risk::{resolve_final_risk, RiskLevel};
use heatguard_core::strain::heat_strain_profile;
use heatguard_core::thresholds::{Acclimatization, RiskThresholds};
use heatguard_core::wetbulb::natural_wet_bulb_c;
use heatguard_core::ExposurePenalties;
use proptest::prelude::*;

fn arb_penalties() -> impl Strategy<Value = ExposurePenalties> {
    (
        -50.0f32..150.0,
        -50.0f32..150.0,
        -50.0f32..150.0,
        -50.0f32..150.0,
    )
        .prop_map(|(ppe_c, vehicle_c, radiant_c, adhoc_c)| ExposurePenalties {
            ppe_c,
            vehicle_c,
            radiant_c,
            adhoc_c,
        })
}

fn arb_reading() -> impl Strategy<Value = EnvironmentalReading> {
    (
        -10.0f32..55.0,  // dry-bulb
        0.0f32..100.0,   // RH
        0.0f32..20.0,    // wind
        -10.0f32..70.0,  // globe
    )
        .prop_map(|(db, rh, ws, gt)| EnvironmentalReading::new(db, rh, ws, gt, 101.3))
}

proptest! {
    #[test]
    fn total_penalty_is_always_capped(p in arb_penalties()) {
        let total = p.total_c();
        prop_assert!((0.0..=10.0).contains(&total), "total = {total}");
    }

    #[test]
    fn per_category_clamps_hold(p in arb_penalties()) {
        let c = p.clamped();
        prop_assert!((0.0..=3.0).contains(&c.ppe_c));
        prop_assert!((0.0..=3.0).contains(&c.vehicle_c));
        prop_assert!((0.0..=5.0).contains(&c.radiant_c));
        prop_assert!((0.0..=4.0).contains(&c.adhoc_c));
    }

    #[test]
    fn operational_capacity_never_below_floor(
        env in 0.0f32..450.0,
        p in arb_penalties(),
    ) {
        let op = apply_capacity_penalties(env, &p.clamped());
        prop_assert!(op >= 60.0, "operational = {op}");
    }

    #[test]
    fn hsp_non_negative_and_finite(
        effective in 0.0f32..60.0,
        op in 0.0f32..450.0,
    ) {
        let hsp = heat_strain_profile(effective, op);
        prop_assert!(hsp >= 0.0);
        prop_assert!(hsp.is_finite());
    }

    #[test]
    fn wbgt_banding_is_monotone(
        lower in -5.0f32..45.0,
        bump in 0.0f32..15.0,
        acclimatized in any::<bool>(),
    ) {
        let status = if acclimatized {
            Acclimatization::Acclimatized
        } else {
            Acclimatization::NotAcclimatized
        };
        let t = RiskThresholds::for_worker(status);
        let a = RiskLevel::from_wbgt(lower, &t);
        let b = RiskLevel::from_wbgt(lower + bump, &t);
        prop_assert!(b >= a, "{a:?} at {lower} vs {b:?} at {}", lower + bump);
    }

    #[test]
    fn hsp_override_never_de_escalates(
        band_ix in 0u8..4,
        hsp in 0.0f32..3.0,
    ) {
        let band = match band_ix {
            0 => RiskLevel::Low,
            1 => RiskLevel::Caution,
            2 => RiskLevel::HighStrain,
            _ => RiskLevel::Withdrawal,
        };
        prop_assert!(resolve_final_risk(band, hsp) >= band);
    }

    #[test]
    fn estimator_is_non_increasing_for_fixed_signature(
        r in arb_reading(),
        baseline in 15.0f32..45.0,
        rounds in 1usize..8,
    ) {
        let mut est = CoolingCapacityEstimator::new();
        let mut prev = est.estimate(&r, baseline, 0.0, None).environmental_wm2;
        for _ in 0..rounds {
            let next = est.estimate(&r, baseline, 0.0, None).environmental_wm2;
            prop_assert!(next <= prev, "estimate rose from {prev} to {next}");
            prev = next;
        }
    }

    #[test]
    fn estimate_never_exceeds_its_cap(
        r in arb_reading(),
        baseline in 15.0f32..45.0,
    ) {
        let mut est = CoolingCapacityEstimator::new();
        let e = est.estimate(&r, baseline, 0.0, None);
        prop_assert!(e.environmental_wm2 <= e.cap_wm2);
        prop_assert!((0.0..=450.0).contains(&e.environmental_wm2));
    }

    #[test]
    fn wet_bulb_stays_at_or_below_dry_bulb(
        db in 5.0f32..50.0,
        rh in 0.0f32..95.0,
    ) {
        // Stull's fit can overshoot by a few hundredths right at
        // saturation, hence the sub-saturated range and small slack
        let wb = natural_wet_bulb_c(db, rh);
        prop_assert!(wb <= db + 0.1, "wb {wb} above dry-bulb {db} at rh {rh}");
    }

    #[test]
    fn wet_bulb_rises_with_humidity(
        db in 5.0f32..50.0,
        rh in 15.0f32..90.0,
    ) {
        // Below ~10% RH the fit is not monotone; field conditions are not
        let drier = natural_wet_bulb_c(db, rh - 5.0);
        let wetter = natural_wet_bulb_c(db, rh + 5.0);
        prop_assert!(wetter >= drier, "wb fell from {drier} to {wetter}");
    }
}
