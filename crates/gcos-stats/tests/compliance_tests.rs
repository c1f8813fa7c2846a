//! Tests for GCOS compliance evaluation.

use gcos_common::{ColocatedSeries, CriterionTable, GcosError, Tier};
use gcos_stats::{evaluate, evaluate_series, ComplianceFractions};
use test_utils::{
    assert_approx_eq, create_aod_observations, create_missing_series, create_perturbed_model,
    fixtures, with_gaps,
};

const AOD: &str = "od550aer";

fn reference() -> CriterionTable {
    CriterionTable::reference()
}

fn assert_fractions(result: &ComplianceFractions, goal: f64, breakthrough: f64, threshold: f64) {
    assert_eq!(result.goal, goal, "goal");
    assert_eq!(result.breakthrough, breakthrough, "breakthrough");
    assert_eq!(result.threshold, threshold, "threshold");
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_identical_series_fully_compliant() {
    let obs = [1.0, 1.0, 1.0];
    let model = [1.0, 1.0, 1.0];

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_fractions(&result, 1.0, 1.0, 1.0);
    assert_eq!(result.valid_count, 3);
}

#[test]
fn test_twenty_percent_error_passes_threshold_only() {
    let obs = [1.0, 1.0];
    let model = [1.20, 1.0];

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_fractions(&result, 0.5, 0.5, 1.0);
}

#[test]
fn test_missing_observation_excluded() {
    let obs = [f64::NAN, 1.0];
    let model = [1.0, 1.0];

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_fractions(&result, 1.0, 1.0, 1.0);
    assert_eq!(result.valid_count, 1);
    assert_eq!(result.total_count, 2);
}

#[test]
fn test_zero_observation_decided_by_absolute_floor() {
    // Relative error against a zero observation is infinite; only the
    // absolute floors (0.02 / 0.03 / 0.06) can pass these pairs.
    let obs = [0.0, 0.0];
    let model = [0.02, 0.03];

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_fractions(&result, 0.5, 1.0, 1.0);
}

#[test]
fn test_both_zero_counts_as_compliant() {
    // 0/0 is NaN on both relative sides; absolute difference 0 passes.
    let result = evaluate(&[0.0], &[0.0], AOD, &reference()).unwrap();
    assert_fractions(&result, 1.0, 1.0, 1.0);
}

#[test]
fn test_missing_model_excluded() {
    let obs = [0.5, 0.5, 0.5];
    let model = [f64::NAN, 0.5, 0.9];

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_eq!(result.valid_count, 2);
    assert_fractions(&result, 0.5, 0.5, 0.5);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_fractions_within_unit_interval() {
    let table = reference();
    for len in [1, 7, 60, 500] {
        let obs = create_aod_observations(len);
        let model = create_perturbed_model(&obs);
        let result = evaluate(&obs, &model, AOD, &table).unwrap();
        for (tier, fraction) in result.iter() {
            assert!(
                (0.0..=1.0).contains(&fraction),
                "{} fraction {} out of range for len {}",
                tier,
                fraction,
                len
            );
        }
    }
}

#[test]
fn test_tiers_monotonic_for_ordered_table() {
    let obs = create_aod_observations(240);
    let model = create_perturbed_model(&obs);

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert!(result.goal <= result.breakthrough);
    assert!(result.breakthrough <= result.threshold);
    assert!(result.goal < result.threshold);
}

#[test]
fn test_missing_pairs_do_not_influence_result() {
    let obs = create_aod_observations(180);
    let model = create_perturbed_model(&obs);
    let gapped_obs = with_gaps(&obs, 4, 0);
    let gapped_model = with_gaps(&model, 7, 3);

    let with_missing = evaluate(&gapped_obs, &gapped_model, AOD, &reference()).unwrap();

    let (kept_obs, kept_model): (Vec<f64>, Vec<f64>) = gapped_obs
        .iter()
        .zip(&gapped_model)
        .filter(|(o, m)| !o.is_nan() && !m.is_nan())
        .map(|(o, m)| (*o, *m))
        .unzip();
    let filtered = evaluate(&kept_obs, &kept_model, AOD, &reference()).unwrap();

    assert!(with_missing.valid_count < obs.len());
    assert_eq!(with_missing.valid_count, filtered.valid_count);
    assert_fractions(
        &with_missing,
        filtered.goal,
        filtered.breakthrough,
        filtered.threshold,
    );
}

#[test]
fn test_perfect_agreement_on_generated_series() {
    let obs = create_aod_observations(100);
    let result = evaluate(&obs, &obs, AOD, &reference()).unwrap();
    assert_fractions(&result, 1.0, 1.0, 1.0);
}

#[test]
fn test_all_missing_gives_zero() {
    let obs = create_missing_series(5);
    let model = create_aod_observations(5);

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_eq!(result, ComplianceFractions::empty(5));
}

#[test]
fn test_empty_input_gives_zero() {
    let result = evaluate(&[], &[], AOD, &reference()).unwrap();
    assert_fractions(&result, 0.0, 0.0, 0.0);
    assert_eq!(result.total_count, 0);
}

#[test]
fn test_opposite_infinities_excluded() {
    // inf + -inf is NaN, so the pair is treated as missing
    let obs = [f64::INFINITY, 1.0];
    let model = [f64::NEG_INFINITY, 1.0];

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_eq!(result.valid_count, 1);
    assert_fractions(&result, 1.0, 1.0, 1.0);
}

#[test]
fn test_negative_denominator_passes_relative_criteria() {
    // |-1 - 1| / -1 = -2 is below every relative fraction
    let obs = [f64::INFINITY, -1.0, 1.0];
    let model = [f64::NEG_INFINITY, 1.0, 1.2];

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_eq!(result.valid_count, 2);
    assert_fractions(&result, 0.5, 0.5, 1.0);
}

#[test]
fn test_generated_series_goal_share() {
    // Offsets 0 and +3% always meet goal, so at least a third of the pairs
    // pass; the larger offsets only pass through the 0.02 absolute floor.
    let obs = create_aod_observations(300);
    let model = create_perturbed_model(&obs);
    let expected = obs
        .iter()
        .zip(&model)
        .filter(|(o, m)| {
            let diff = (*o - *m).abs();
            diff / *m <= 0.04 || diff / *o <= 0.04 || diff <= 0.02
        })
        .count() as f64
        / obs.len() as f64;

    let result = evaluate(&obs, &model, AOD, &reference()).unwrap();

    assert_approx_eq!(result.goal, expected);
    assert!(result.goal > 2.0 / 6.0 - 1e-9);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_variable_is_configuration_error() {
    let err = evaluate(&[1.0], &[1.0], "concpm10", &reference()).unwrap_err();
    assert!(matches!(err, GcosError::Configuration(_)));
}

#[test]
fn test_length_mismatch_is_invalid_input() {
    let err = evaluate(&[1.0, 2.0], &[1.0], AOD, &reference()).unwrap_err();
    assert!(matches!(err, GcosError::InvalidInput(_)));
}

// ============================================================================
// Tables and series
// ============================================================================

#[test]
fn test_custom_table() {
    let table = CriterionTable::from_json_str(fixtures::criteria::SINGLE_JSON).unwrap();
    // |0.5 - 0.6| just under 0.1: relative 0.2 / 0.167 fails goal, absolute passes breakthrough
    let result = evaluate(&[0.5], &[0.6], "ang4487aer", &table).unwrap();
    assert_eq!(result.get(Tier::Goal), 0.0);
    assert_eq!(result.get(Tier::Breakthrough), 1.0);
    assert_eq!(result.get(Tier::Threshold), 1.0);

    assert!(evaluate(&[0.5], &[0.6], AOD, &table).is_err());
}

#[test]
fn test_evaluate_series_uses_model_variable() {
    let series = ColocatedSeries::from_json_str(fixtures::documents::SMALL_AOD).unwrap();

    let result = evaluate_series(&series, &reference()).unwrap();

    assert_fractions(&result, 0.5, 0.5, 1.0);
    assert_eq!(result.valid_count, 2);
    assert_eq!(result.total_count, 4);
}

#[test]
fn test_evaluate_series_unknown_variable() {
    let series = ColocatedSeries::from_json_str(fixtures::documents::UNKNOWN_VARIABLE).unwrap();
    let err = evaluate_series(&series, &reference()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_table_shared_across_threads() {
    let table = reference();
    let obs = create_aod_observations(64);
    let model = create_perturbed_model(&obs);
    let expected = evaluate(&obs, &model, AOD, &table).unwrap();

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..4 {
            handles.push(scope.spawn(|| evaluate(&obs, &model, AOD, &table).unwrap()));
        }
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
