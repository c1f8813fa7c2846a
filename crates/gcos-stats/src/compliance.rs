//! GCOS tier compliance.
//!
//! A pair (observation, model) complies with a tier when its absolute
//! difference is within the tier's absolute floor, or its difference relative
//! to either value is within the tier's relative fraction. Pairs where either
//! value is NaN are excluded before counting.
//!
//! Relative differences are plain IEEE-754 divisions: a zero denominator
//! yields infinity or NaN, which fails every relative comparison and leaves
//! the absolute criterion to decide.

use gcos_common::{ColocatedSeries, CriterionTable, GcosError, GcosResult, Tier, TierCriterion};
use serde::Serialize;
use tracing::{debug, warn};

/// Differences between one observation and one model value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDeviation {
    pub absolute: f64,
    pub relative_to_model: f64,
    pub relative_to_observation: f64,
}

impl PairDeviation {
    pub fn new(observation: f64, model: f64) -> Self {
        let absolute = (observation - model).abs();
        Self {
            absolute,
            relative_to_model: absolute / model,
            relative_to_observation: absolute / observation,
        }
    }

    /// Relative criterion in either direction, or the absolute criterion.
    pub fn complies(&self, criterion: &TierCriterion) -> bool {
        self.relative_to_model <= criterion.relative_error
            || self.relative_to_observation <= criterion.relative_error
            || self.absolute <= criterion.absolute_error
    }
}

/// Fraction of valid pairs meeting each GCOS tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceFractions {
    pub goal: f64,
    pub breakthrough: f64,
    pub threshold: f64,
    /// Pairs where neither value was missing.
    pub valid_count: usize,
    /// Pairs in the input, including missing ones.
    pub total_count: usize,
}

impl ComplianceFractions {
    /// All-zero result used when no pair is valid.
    pub fn empty(total_count: usize) -> Self {
        Self {
            goal: 0.0,
            breakthrough: 0.0,
            threshold: 0.0,
            valid_count: 0,
            total_count,
        }
    }

    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Goal => self.goal,
            Tier::Breakthrough => self.breakthrough,
            Tier::Threshold => self.threshold,
        }
    }

    /// Fractions in canonical tier order, strictest first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, f64)> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }

    /// Fractions scaled to percent, in canonical tier order.
    pub fn percentages(&self) -> [f64; 3] {
        [self.goal * 100.0, self.breakthrough * 100.0, self.threshold * 100.0]
    }
}

/// Compute GCOS compliance fractions for aligned observation and model values.
///
/// # Arguments
/// - `observation`: observed values, NaN where missing
/// - `model`: model values at the same indices, NaN where missing
/// - `variable`: variable name used to select the criteria
/// - `criteria`: criterion table
///
/// # Errors
/// - [`GcosError::Configuration`] if `variable` has no entry in `criteria`
/// - [`GcosError::InvalidInput`] if the two slices differ in length
///
/// When no pair is valid every fraction is 0.0.
pub fn evaluate(
    observation: &[f64],
    model: &[f64],
    variable: &str,
    criteria: &CriterionTable,
) -> GcosResult<ComplianceFractions> {
    let tiers = criteria.get(variable)?;

    if observation.len() != model.len() {
        return Err(GcosError::invalid_input(format!(
            "observation has {} values but model has {}",
            observation.len(),
            model.len()
        )));
    }

    let mut compliant = [0usize; 3];
    let mut valid_count = 0usize;

    for (&obs, &modelled) in observation.iter().zip(model) {
        // NaN in either value propagates through the sum
        if (obs + modelled).is_nan() {
            continue;
        }
        valid_count += 1;

        let deviation = PairDeviation::new(obs, modelled);
        for (count, (_, criterion)) in compliant.iter_mut().zip(tiers.iter()) {
            if deviation.complies(criterion) {
                *count += 1;
            }
        }
    }

    if valid_count == 0 {
        warn!(
            variable = %variable,
            total = observation.len(),
            "No valid observation/model pairs; reporting zero compliance"
        );
        return Ok(ComplianceFractions::empty(observation.len()));
    }

    let fraction = |count: usize| count as f64 / valid_count as f64;
    let result = ComplianceFractions {
        goal: fraction(compliant[0]),
        breakthrough: fraction(compliant[1]),
        threshold: fraction(compliant[2]),
        valid_count,
        total_count: observation.len(),
    };

    debug!(
        variable = %variable,
        total = result.total_count,
        valid = result.valid_count,
        goal = result.goal,
        breakthrough = result.breakthrough,
        threshold = result.threshold,
        "Computed GCOS compliance"
    );

    Ok(result)
}

/// Compute compliance for a colocated series, using its model variable name.
pub fn evaluate_series(
    series: &ColocatedSeries,
    criteria: &CriterionTable,
) -> GcosResult<ComplianceFractions> {
    evaluate(
        series.observation(),
        series.model(),
        series.model_variable(),
        criteria,
    )
}
