use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::AdjacencyIndex;

/// A degeneracy (core decomposition) ordering of the vertices of a graph.
///
/// Vertices are peeled one at a time, always taking the vertex with the smallest residual degree
/// (ties broken by id). Seeding each clique search with only the *later* neighbours of a vertex bounds
/// the candidate set by the degeneracy of the graph.
#[derive(Debug, Clone)]
pub struct DegeneracyOrder<Id> {
    order: Vec<Id>,
    positions: HashMap<Id, usize>,
}

impl<Id> DegeneracyOrder<Id>
where
    Id: Copy + Ord + Hash,
{
    /// Compute the ordering of every vertex in `graph`.
    ///
    /// Runs in O((N + M) log N): the queue is an ordered set keyed by (residual degree, id), and
    /// decreasing a key is a remove followed by a reinsert.
    #[must_use]
    pub fn compute(graph: &AdjacencyIndex<'_, Id>) -> Self {
        let mut degrees: HashMap<Id, usize> = graph
            .vertices()
            .iter()
            .map(|&v| (v, graph.neighbours(v).len()))
            .collect();
        let mut queue: BTreeSet<(usize, Id)> = degrees.iter().map(|(&v, &d)| (d, v)).collect();

        let mut order = Vec::with_capacity(queue.len());
        let mut positions = HashMap::with_capacity(queue.len());

        while let Some((_, vertex)) = queue.pop_first() {
            positions.insert(vertex, order.len());
            order.push(vertex);

            for &neighbour in graph.neighbours(vertex) {
                let Some(degree) = degrees.get_mut(&neighbour) else {
                    continue;
                };
                // already peeled vertices are no longer queued
                if queue.remove(&(*degree, neighbour)) {
                    *degree = degree.saturating_sub(1);
                    queue.insert((*degree, neighbour));
                }
            }
        }

        Self { order, positions }
    }

    /// The position of `vertex` in the ordering.
    #[must_use]
    pub fn position(&self, vertex: Id) -> Option<usize> {
        self.positions.get(&vertex).copied()
    }
}

impl<Id> DegeneracyOrder<Id> {
    /// The vertices, in elimination order.
    #[must_use]
    pub fn as_slice(&self) -> &[Id] {
        &self.order
    }

    /// Number of ordered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the ordering is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_graph::GraphBuilder;

    #[test]
    fn empty_graph_has_empty_order() {
        let graph = GraphBuilder::with_vertices(0);
        let sets = graph.neighbor_sets();
        let order = DegeneracyOrder::compute(&AdjacencyIndex::from_neighbor_sets(&sets));

        assert!(order.is_empty());
    }

    #[test]
    fn star_peels_leaves_before_centre() {
        // 0 is the centre of a star with four leaves
        let graph = GraphBuilder::with_vertices(5)
            .add_edge(0, 1)
            .add_edge(0, 2)
            .add_edge(0, 3)
            .add_edge(0, 4);
        let sets = graph.neighbor_sets();
        let order = DegeneracyOrder::compute(&AdjacencyIndex::from_neighbor_sets(&sets));

        // leaves tie on degree 1 and are taken by id; after three leaves the centre and the last leaf
        // both have degree 1, and the centre has the smaller id
        assert_eq!(order.as_slice(), [1, 2, 3, 0, 4]);
    }

    #[test]
    fn positions_match_order() {
        let graph = GraphBuilder::with_vertices(6)
            .add_edge(0, 1)
            .add_edge(1, 2)
            .add_edge(2, 0)
            .add_edge(2, 3)
            .add_edge(3, 4);
        let sets = graph.neighbor_sets();
        let order = DegeneracyOrder::compute(&AdjacencyIndex::from_neighbor_sets(&sets));

        assert_eq!(order.len(), 6);
        for (i, &v) in order.as_slice().iter().enumerate() {
            assert_eq!(order.position(v), Some(i));
        }
        assert_eq!(order.position(99), None);
    }

    #[test]
    fn path_is_peeled_from_its_lower_end() {
        // 5 is isolated and goes first; each peel leaves the next path vertex with degree 1
        let graph = GraphBuilder::with_vertices(6)
            .add_edge(0, 1)
            .add_edge(1, 2)
            .add_edge(2, 3)
            .add_edge(3, 4);
        let sets = graph.neighbor_sets();
        let order = DegeneracyOrder::compute(&AdjacencyIndex::from_neighbor_sets(&sets));

        assert_eq!(order.as_slice(), [5, 0, 1, 2, 3, 4]);
    }
}
