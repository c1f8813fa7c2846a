//! Synthetic observation/model series for tests.
//!
//! Values are deterministic so expected compliance fractions can be worked
//! out by hand.

/// Relative model offsets cycled by [`create_perturbed_model`].
///
/// Chosen so that each tier of the reference AOD table passes a different
/// share of samples.
pub const MODEL_OFFSETS: [f64; 6] = [0.0, 0.03, -0.08, 0.15, -0.25, 0.5];

/// Creates aerosol-optical-depth-like observations in the range 0.05..0.85.
///
/// # Example
///
/// ```
/// use test_utils::create_aod_observations;
///
/// let obs = create_aod_observations(100);
/// assert_eq!(obs.len(), 100);
/// assert!(obs.iter().all(|v| *v > 0.0 && *v < 0.9));
/// ```
pub fn create_aod_observations(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 0.45 + 0.4 * (i as f64 * 0.37).sin())
        .collect()
}

/// Creates a model series that deviates from `observation` by the cycled
/// [`MODEL_OFFSETS`] (relative to the observation).
pub fn create_perturbed_model(observation: &[f64]) -> Vec<f64> {
    observation
        .iter()
        .enumerate()
        .map(|(i, obs)| obs * (1.0 + MODEL_OFFSETS[i % MODEL_OFFSETS.len()]))
        .collect()
}

/// Returns a copy of `values` with every `every`-th element (starting at
/// `offset`) replaced by NaN.
pub fn with_gaps(values: &[f64], every: usize, offset: usize) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if every > 0 && i >= offset && (i - offset) % every == 0 {
                f64::NAN
            } else {
                *v
            }
        })
        .collect()
}

/// Creates a series of `len` NaN values.
pub fn create_missing_series(len: usize) -> Vec<f64> {
    vec![f64::NAN; len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturbed_model_offsets() {
        let obs = vec![1.0; 6];
        let model = create_perturbed_model(&obs);
        assert_eq!(model[0], 1.0);
        assert!((model[3] - 1.15).abs() < 1e-12);
        assert!((model[5] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_with_gaps() {
        let values = vec![1.0; 7];
        let gapped = with_gaps(&values, 3, 1);
        let nan_idx: Vec<usize> = gapped
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_nan())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(nan_idx, vec![1, 4]);
    }

    #[test]
    fn test_missing_series() {
        assert!(create_missing_series(4).iter().all(|v| v.is_nan()));
    }
}
