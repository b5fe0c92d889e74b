//! Feature frequency statistics consumed by the prevalence-mining stage.
//!
//! - [`count_features`] tallies instances per feature type.
//! - [`calculate_dispersion`] measures how unevenly those counts are spread, on a log scale.
//! - [`rare_intensity`] weights the feature types of a colocation by how close their frequency is to
//!   that of the rarest feature type taking part.

use std::collections::{BTreeMap, HashMap};

use crate::{FeatureType, Instance};

/// Number of instances of each feature type.
pub type FeatureCounts = BTreeMap<FeatureType, usize>;

/// Lower bound substituted for `2δ²` when the dispersion δ is zero.
pub const DISPERSION_FLOOR: f64 = 1e-9;

/// Count the instances of each feature type.
pub fn count_features<'a, Id: 'a>(
    instances: impl IntoIterator<Item = &'a Instance<Id>>,
) -> FeatureCounts {
    let mut counts = FeatureCounts::new();
    for instance in instances {
        *counts.entry(instance.data.feature().clone()).or_default() += 1;
    }
    counts
}

/// The dispersion δ of a feature frequency distribution.
///
/// With `m` feature types and ascending counts `N₁ ≤ … ≤ Nₘ`:
///
/// ```text
/// δ = sqrt( 2 / (m (m − 1)) · Σ_{i<j} (ln Nⱼ − ln Nᵢ)² )
/// ```
///
/// i.e. the root mean square of the pairwise log-ratios of feature frequency. Returns `0.0` for fewer
/// than two feature types. The result does not depend on the order of `counts`.
///
/// ```
/// use colocation_cliques::calculate_dispersion;
///
/// assert_eq!(calculate_dispersion([42]), 0.0);
/// assert_eq!(calculate_dispersion([7, 7, 7]), 0.0);
/// assert!(calculate_dispersion([1, 10, 100]) > 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_dispersion(counts: impl IntoIterator<Item = usize>) -> f64 {
    let mut logs: Vec<f64> = counts.into_iter().map(|count| (count as f64).ln()).collect();
    let m = logs.len();
    if m <= 1 {
        return 0.0;
    }

    // summing in a fixed order keeps the result independent of the input order
    logs.sort_by(f64::total_cmp);

    let mut sum_squares = 0.0;
    for (i, low) in logs.iter().enumerate() {
        for high in &logs[i + 1..] {
            let diff = high - low;
            sum_squares += diff * diff;
        }
    }

    let m = m as f64;
    (2.0 / (m * (m - 1.0)) * sum_squares).sqrt()
}

/// The rare intensity of each feature type of `colocation`.
///
/// With `N_min` the smallest count among the colocation's feature types:
///
/// ```text
/// RI(f) = exp( −(ln N_f − ln N_min)² / (2δ²) )
/// ```
///
/// The rarest feature type therefore always has intensity `1.0`, and more frequent ones decay
/// towards zero, faster when the global dispersion `delta` is small. A zero `2δ²` is replaced by
/// [`DISPERSION_FLOOR`].
///
/// Feature types missing from `counts`, or with a zero count, get no entry. If no feature type of the
/// colocation has a positive count the result is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rare_intensity(
    colocation: &[FeatureType],
    counts: &FeatureCounts,
    delta: f64,
) -> HashMap<FeatureType, f64> {
    let mut intensities = HashMap::new();

    let Some(min_count) = colocation.iter().filter_map(|f| counts.get(f)).copied().min() else {
        return intensities;
    };
    if min_count == 0 {
        return intensities;
    }

    let mut denominator = 2.0 * delta * delta;
    if denominator == 0.0 {
        denominator = DISPERSION_FLOOR;
    }
    let log_min = (min_count as f64).ln();

    for feature in colocation {
        let Some(&count) = counts.get(feature) else {
            continue;
        };
        if count == 0 {
            continue;
        }
        let delta_log = (count as f64).ln() - log_min;
        intensities.insert(feature.clone(), (-(delta_log * delta_log) / denominator).exp());
    }

    intensities
}
