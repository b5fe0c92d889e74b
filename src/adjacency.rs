use std::collections::HashMap;
use std::hash::Hash;

use crate::{FeatureType, NeighborSet};

/// Lookup from each instance to its neighbours, sorted by instance id.
///
/// Sorted neighbour lists let the clique search intersect and subtract candidate sets with linear
/// merges. Looking up an id that has no neighbour list yields an empty slice: isolated or unknown
/// vertices are legal.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<'a, Id> {
    neighbours: HashMap<Id, Vec<Id>>,
    features: HashMap<Id, &'a FeatureType>,
    vertices: Vec<Id>,
}

impl<'a, Id> AdjacencyIndex<'a, Id>
where
    Id: Copy + Ord + Hash,
{
    /// Build the index from a list of neighbour sets.
    ///
    /// Self references and repeated neighbours are dropped. Repeated entries for the same centre are
    /// merged. Every centre, and every id mentioned as a neighbour, becomes a vertex.
    #[must_use]
    pub fn from_neighbor_sets(neighbor_sets: &[NeighborSet<'a, Id>]) -> Self {
        let mut neighbours: HashMap<Id, Vec<Id>> = HashMap::with_capacity(neighbor_sets.len());
        let mut features = HashMap::with_capacity(neighbor_sets.len());

        for set in neighbor_sets {
            let instance: &'a _ = set.center;
            let center = instance.id;
            features.insert(center, instance.data.feature());

            let list = neighbours.entry(center).or_default();
            for &neighbour in &set.neighbors {
                features.entry(neighbour.id).or_insert(neighbour.data.feature());
                if neighbour.id != center {
                    list.push(neighbour.id);
                }
            }
        }

        for list in neighbours.values_mut() {
            list.sort_unstable();
            list.dedup();
        }

        let mut vertices: Vec<Id> = features.keys().copied().collect();
        vertices.sort_unstable();

        Self {
            neighbours,
            features,
            vertices,
        }
    }

    /// The sorted neighbours of `id`, empty if the id is unknown.
    #[must_use]
    pub fn neighbours(&self, id: Id) -> &[Id] {
        self.neighbours
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The feature type of `id`, if it is a vertex of the graph.
    #[must_use]
    pub fn feature(&self, id: Id) -> Option<&'a FeatureType> {
        self.features.get(&id).copied()
    }

    /// Every vertex, in ascending id order.
    #[must_use]
    pub fn vertices(&self) -> &[Id] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
