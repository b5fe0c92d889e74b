use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    AdjacencyIndex, CandidateQueue, ColocationMap, ColocationPriority, DensityThreshold,
    NeighborSet, Strategy, cliques, extract_candidates,
};

/// Builder for a [`ColocationEngine`].
#[must_use]
#[derive(Debug, Default)]
pub struct ColocationEngineBuilder {
    strategy: Strategy,
    threshold: DensityThreshold,
}

impl ColocationEngineBuilder {
    /// Select the top-level enumeration driver. Defaults to [`Strategy::Hybrid`].
    pub const fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the rule deciding which subproblems of a hybrid run are dense.
    ///
    /// Has no effect on [`Strategy::PivotBaseline`].
    pub const fn density_threshold(mut self, threshold: DensityThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Finalise the builder and return a [`ColocationEngine`].
    pub const fn build(self) -> ColocationEngine {
        ColocationEngine {
            strategy: self.strategy,
            threshold: self.threshold,
        }
    }
}

/// Enumerates the maximal cliques of a neighbour graph and groups them into colocations.
///
/// The engine is plain configuration and holds no state between runs.
///
/// # Example
///
/// ```
/// use colocation_cliques::{Colocation, ColocationEngine, SpatialInstance, Unique, neighbor_sets};
///
/// let instances = vec![
///     Unique { data: SpatialInstance::new("A", 0.0, 0.0), id: 0 },
///     Unique { data: SpatialInstance::new("B", 1.0, 0.0), id: 1 },
///     Unique { data: SpatialInstance::new("B", 0.0, 1.0), id: 2 },
///     Unique { data: SpatialInstance::new("C", 50.0, 50.0), id: 3 },
/// ];
/// let graph = neighbor_sets(&instances, 2.0).unwrap();
///
/// let colocations = ColocationEngine::default().execute(&graph);
///
/// let key: Colocation = ["A", "B", "B"].into_iter().collect();
/// assert_eq!(colocations.len(), 1);
/// assert!(colocations.contains(&key));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColocationEngine {
    strategy: Strategy,
    threshold: DensityThreshold,
}

impl ColocationEngine {
    /// Configure a new engine.
    pub fn builder() -> ColocationEngineBuilder {
        ColocationEngineBuilder::default()
    }

    /// The configured enumeration driver.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The configured density rule.
    #[must_use]
    pub const fn density_threshold(&self) -> DensityThreshold {
        self.threshold
    }

    /// Group every maximal clique of at least two instances by its colocation.
    #[must_use]
    pub fn execute<Id>(&self, neighbor_sets: &[NeighborSet<'_, Id>]) -> ColocationMap<Id>
    where
        Id: Copy + Ord + Hash + Debug,
    {
        let graph = AdjacencyIndex::from_neighbor_sets(neighbor_sets);
        let mut colocations = ColocationMap::default();

        self.enumerate(&graph, &mut |clique: &[Id]| {
            colocations.record(
                clique
                    .iter()
                    .filter_map(|&id| graph.feature(id).map(|feature| (id, feature.clone()))),
            );
        });

        tracing::debug!(colocations = colocations.len(), "grouped maximal cliques");
        colocations
    }

    /// Every maximal clique of the neighbour graph, each sorted by id, in discovery order.
    ///
    /// Isolated instances are reported as single-instance cliques.
    #[must_use]
    pub fn maximal_cliques<Id>(&self, neighbor_sets: &[NeighborSet<'_, Id>]) -> Vec<Vec<Id>>
    where
        Id: Copy + Ord + Hash + Debug,
    {
        let graph = AdjacencyIndex::from_neighbor_sets(neighbor_sets);
        let mut found = Vec::new();

        self.enumerate(&graph, &mut |clique: &[Id]| {
            let mut clique = clique.to_vec();
            clique.sort_unstable();
            found.push(clique);
        });

        found
    }

    /// Queue every colocation of `colocations` for mining, ordered by `priority`.
    pub fn extract_candidates<Id, P>(
        &self,
        colocations: &ColocationMap<Id>,
        priority: P,
    ) -> CandidateQueue<P>
    where
        P: ColocationPriority,
    {
        extract_candidates(colocations, priority)
    }

    fn enumerate<Id, F>(&self, graph: &AdjacencyIndex<'_, Id>, report: &mut F)
    where
        Id: Copy + Ord + Hash + Debug,
        F: FnMut(&[Id]),
    {
        tracing::debug!(
            vertices = graph.len(),
            strategy = ?self.strategy,
            "enumerating maximal cliques"
        );

        let mut reported = 0_usize;
        let mut counted = |clique: &[Id]| {
            reported += 1;
            tracing::trace!(?clique, "maximal clique");
            report(clique);
        };

        match self.strategy {
            Strategy::Hybrid => {
                let dispatch = cliques::hybrid(graph, self.threshold, &mut counted);
                tracing::debug!(
                    dense = dispatch.dense,
                    sparse = dispatch.sparse,
                    "dispatched subproblems"
                );
            }
            Strategy::PivotBaseline => cliques::pivot_baseline(graph, &mut counted),
        }

        tracing::debug!(cliques = reported, "enumerated maximal cliques");
    }
}
