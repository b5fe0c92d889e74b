use nalgebra::Point2;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::instance::Instance;

/// An instance together with every instance lying within the neighbour distance of it.
///
/// Neighbour sets are the input of the clique engine. The neighbour relation is assumed to be
/// symmetric (`u` lists `v` if and only if `v` lists `u`); this is not verified, and asymmetric input
/// gives inconsistent clique results.
#[derive(Debug, Clone)]
pub struct NeighborSet<'a, Id> {
    /// The instance at the centre of the neighbourhood.
    pub center: &'a Instance<Id>,

    /// The neighbours of the centre, in no particular order.
    pub neighbors: Vec<&'a Instance<Id>>,
}

/// The neighbour distance must be a finite, non-negative number.
#[derive(Debug, thiserror::Error)]
#[error("neighbour distance must be finite and >= 0.0 (got {0})")]
pub struct InvalidDistance(f64);

/// A borrowed instance stored in the R*-tree.
#[derive(Debug)]
struct Located<'a, Id>(&'a Instance<Id>);

impl<Id> RTreeObject for Located<'_, Id> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.0.data.position().into())
    }
}

impl<Id> PointDistance for Located<'_, Id> {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.0.data.distance_squared_to(&Point2::from(*point))
    }
}

/// A spatial index over borrowed instances, answering fixed-radius neighbour queries.
#[derive(Debug)]
pub struct NeighbourIndex<'a, Id> {
    tree: RTree<Located<'a, Id>>,
}

impl<'a, Id> NeighbourIndex<'a, Id>
where
    Id: PartialEq,
{
    /// Bulk-load an index over `instances`.
    #[must_use]
    pub fn new(instances: &'a [Instance<Id>]) -> Self {
        let tree = RTree::bulk_load(instances.iter().map(Located).collect());
        Self { tree }
    }

    /// Find every other instance within `distance` (inclusive) of `query`.
    ///
    /// Instances of the same feature type count as neighbours; only the query itself (matched by
    /// id) is excluded.
    pub fn within<'q>(
        &'q self,
        query: &'q Instance<Id>,
        distance: f64,
    ) -> impl Iterator<Item = &'a Instance<Id>> + 'q {
        self.tree
            .locate_within_distance(query.data.position().into(), distance * distance)
            .map(|located| located.0)
            .filter(move |other| other.id != query.id)
    }
}

/// Build the neighbour graph of `instances` under a distance threshold.
///
/// Every instance receives a [`NeighborSet`], in input order, even if it has no neighbours. Two
/// instances are neighbours if their euclidean distance is at most `distance`.
///
/// # Errors
///
/// Returns an error if `distance` is negative, infinite, or NaN.
pub fn neighbor_sets<Id>(
    instances: &[Instance<Id>],
    distance: f64,
) -> Result<Vec<NeighborSet<'_, Id>>, InvalidDistance>
where
    Id: PartialEq,
{
    if !distance.is_finite() || distance < 0.0 {
        return Err(InvalidDistance(distance));
    }

    let index = NeighbourIndex::new(instances);
    let sets = instances
        .iter()
        .map(|center| NeighborSet {
            center,
            neighbors: index.within(center, distance).collect(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        instances = instances.len(),
        edges = sets.iter().map(|set| set.neighbors.len()).sum::<usize>() / 2,
        distance,
        "built neighbour graph"
    );

    Ok(sets)
}
