use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    CandidateQueue, Colocation, ColocationEngine, ColocationMap, ColocationPriority, FeatureCounts,
    FeatureType, Instance, InvalidDistance, calculate_dispersion, count_features, neighbor_sets,
    rare_intensity,
};

/// Everything the prevalence-mining stage starts from.
///
/// Prepared from raw instances in one pass: feature counts and their dispersion, the neighbour graph
/// under a distance threshold, its maximal cliques grouped by colocation, and the queue of candidate
/// colocations.
pub struct MiningSeed<Id, P> {
    /// Number of instances of each feature type.
    pub feature_counts: FeatureCounts,

    /// Dispersion δ of the feature counts, see [`calculate_dispersion`].
    pub dispersion: f64,

    /// The maximal cliques of the neighbour graph, grouped by colocation.
    pub colocations: ColocationMap<Id>,

    /// Every colocation, queued by priority.
    pub candidates: CandidateQueue<P>,
}

impl<Id, P> MiningSeed<Id, P>
where
    Id: Copy + Ord + Hash + Debug,
    P: ColocationPriority,
{
    /// Prepare the mining inputs for `instances`.
    ///
    /// Two instances are neighbours when they lie within `distance` of each other.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` is negative, infinite, or NaN.
    pub fn prepare(
        instances: &[Instance<Id>],
        distance: f64,
        engine: &ColocationEngine,
        priority: P,
    ) -> Result<Self, InvalidDistance> {
        let feature_counts = count_features(instances);
        let dispersion = calculate_dispersion(feature_counts.values().copied());

        let graph = neighbor_sets(instances, distance)?;
        let colocations = engine.execute(&graph);
        let candidates = engine.extract_candidates(&colocations, priority);

        tracing::info!(
            instances = instances.len(),
            features = feature_counts.len(),
            dispersion,
            colocations = colocations.len(),
            "prepared mining seed"
        );

        Ok(Self {
            feature_counts,
            dispersion,
            colocations,
            candidates,
        })
    }
}

impl<Id, P> MiningSeed<Id, P> {
    /// The rare intensity of each feature type of `colocation`, using the seed's counts and
    /// dispersion. See [`rare_intensity`].
    #[must_use]
    pub fn rare_intensity(&self, colocation: &Colocation) -> HashMap<FeatureType, f64> {
        rare_intensity(colocation.features(), &self.feature_counts, self.dispersion)
    }
}

impl<Id, P> Debug for MiningSeed<Id, P>
where
    Id: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiningSeed")
            .field("feature_counts", &self.feature_counts)
            .field("dispersion", &self.dispersion)
            .field("colocations", &self.colocations)
            .field("candidates", &self.candidates)
            .finish()
    }
}
