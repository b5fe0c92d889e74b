//! Merge-based set operations over sorted slices, and the (R, P, X) state of a clique search.

use std::cmp::Ordering;

/// Size of the intersection of two sorted slices.
pub(crate) fn count_common<Id: Ord>(a: &[Id], b: &[Id]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Sorted intersection of two sorted slices.
pub(crate) fn intersection<Id: Ord + Copy>(a: &[Id], b: &[Id]) -> Vec<Id> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

/// Sorted difference `a \ b` of two sorted slices.
pub(crate) fn difference<Id: Ord + Copy>(a: &[Id], b: &[Id]) -> Vec<Id> {
    let mut result = Vec::with_capacity(a.len());
    let mut j = 0;
    for &item in a {
        while j < b.len() && b[j] < item {
            j += 1;
        }
        if j >= b.len() || b[j] != item {
            result.push(item);
        }
    }
    result
}

/// The working state of one branch of a Bron–Kerbosch search.
///
/// - `clique` (R): the vertices committed to the current clique
/// - `candidates` (P): vertices adjacent to all of R which may still extend it
/// - `excluded` (X): vertices adjacent to all of R whose cliques have already been reported
///
/// `candidates` and `excluded` are sorted by id, and the three sets are pairwise disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchState<Id> {
    pub clique: Vec<Id>,
    pub candidates: Vec<Id>,
    pub excluded: Vec<Id>,
}

impl<Id> SearchState<Id>
where
    Id: Ord + Copy,
{
    /// A search over the whole of `candidates`, starting from an empty clique.
    pub fn root(candidates: Vec<Id>) -> Self {
        debug_assert!(candidates.is_sorted());
        Self {
            clique: Vec::new(),
            candidates,
            excluded: Vec::new(),
        }
    }

    /// A search for the cliques containing `vertex`.
    pub fn seeded(vertex: Id, candidates: Vec<Id>, excluded: Vec<Id>) -> Self {
        debug_assert!(candidates.is_sorted() && excluded.is_sorted());
        Self {
            clique: vec![vertex],
            candidates,
            excluded,
        }
    }

    /// Whether R is a maximal clique: nothing can extend it and nothing excluded could have.
    pub fn is_maximal(&self) -> bool {
        self.candidates.is_empty() && self.excluded.is_empty()
    }

    /// The child branch which commits `vertex` to the clique.
    ///
    /// Only vertices adjacent to `vertex` (given its sorted `neighbours`) survive in P and X.
    #[must_use]
    pub fn branch(&self, vertex: Id, neighbours: &[Id]) -> Self {
        let mut clique = Vec::with_capacity(self.clique.len() + 1);
        clique.extend_from_slice(&self.clique);
        clique.push(vertex);
        Self {
            clique,
            candidates: intersection(&self.candidates, neighbours),
            excluded: intersection(&self.excluded, neighbours),
        }
    }

    /// The sibling state once every clique containing `vertex` has been handled: `vertex` moves from
    /// P to X.
    #[must_use]
    pub fn exclude(self, vertex: Id) -> Self {
        let Self {
            clique,
            mut candidates,
            mut excluded,
        } = self;
        if let Ok(i) = candidates.binary_search(&vertex) {
            candidates.remove(i);
        }
        if let Err(i) = excluded.binary_search(&vertex) {
            excluded.insert(i, vertex);
        }
        Self {
            clique,
            candidates,
            excluded,
        }
    }
}
