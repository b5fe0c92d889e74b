//! Graph fixtures shared by the unit tests.

use std::collections::BTreeSet;

use crate::{Instance, NeighborSet, SpatialInstance, Unique};

/// Graph builder utility for constructing test graphs more ergonomically.
///
/// Vertices are instances with ids `0..n`; edges are stored once and expanded into symmetric
/// neighbour sets on demand.
pub struct GraphBuilder {
    instances: Vec<Instance<u32>>,
    edges: BTreeSet<(u32, u32)>,
}

impl GraphBuilder {
    /// `count` vertices, all of feature type "A".
    pub fn with_vertices(count: u32) -> Self {
        Self::with_features(&vec!["A"; count as usize])
    }

    /// One vertex per entry of `features`, with ids in the same order.
    pub fn with_features(features: &[&str]) -> Self {
        let instances = features
            .iter()
            .zip(0..)
            .map(|(&feature, id)| Unique {
                data: SpatialInstance::new(feature, 0.0, 0.0),
                id,
            })
            .collect();
        Self {
            instances,
            edges: BTreeSet::new(),
        }
    }

    pub fn add_edge(mut self, u: u32, v: u32) -> Self {
        if u != v {
            self.edges.insert((u.min(v), u.max(v)));
        }
        self
    }

    pub fn complete(mut self) -> Self {
        let n = u32::try_from(self.instances.len()).unwrap();
        for u in 0..n {
            for v in (u + 1)..n {
                self.edges.insert((u, v));
            }
        }
        self
    }

    pub fn neighbor_sets(&self) -> Vec<NeighborSet<'_, u32>> {
        self.instances
            .iter()
            .map(|center| NeighborSet {
                center,
                neighbors: self
                    .edges
                    .iter()
                    .filter_map(|&(u, v)| match center.id {
                        id if id == u => Some(&self.instances[v as usize]),
                        id if id == v => Some(&self.instances[u as usize]),
                        _ => None,
                    })
                    .collect(),
            })
            .collect()
    }
}
