//! Maximal clique enumeration.
//!
//! Two top-level drivers are available, selected with [`Strategy`]:
//!
//! - [`Strategy::Hybrid`] visits vertices in degeneracy order. For each vertex `v` it searches only
//!   the cliques whose earliest vertex is `v`: the candidates are the neighbours of `v` that come
//!   later in the order, and the neighbours that come earlier are excluded. Each of these
//!   subproblems is classified by its [`Structure`](crate::Structure) and handed either to recursive
//!   core decomposition (dense) or to pivoting Bron–Kerbosch (sparse).
//! - [`Strategy::PivotBaseline`] runs pivoting Bron–Kerbosch once over the whole graph.
//!
//! Both drivers report exactly the same set of maximal cliques.

use std::hash::Hash;

use crate::{AdjacencyIndex, DegeneracyOrder, DensityThreshold, Structure};

mod core_decomposition;
mod pivot;
pub(crate) mod state;

use state::SearchState;

/// Selects the top-level clique enumeration driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Degeneracy-ordered search, switching per vertex between core decomposition and pivoting.
    #[default]
    Hybrid,

    /// A single pivoting Bron–Kerbosch search over the whole graph.
    ///
    /// Kept as a reference implementation and benchmark baseline.
    PivotBaseline,
}

/// How many subproblems of a hybrid run went to each enumerator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Dispatch {
    pub dense: usize,
    pub sparse: usize,
}

/// Enumerate the maximal cliques of `graph` with the hybrid driver, passing each one to `report`.
pub(crate) fn hybrid<Id, F>(
    graph: &AdjacencyIndex<'_, Id>,
    threshold: DensityThreshold,
    report: &mut F,
) -> Dispatch
where
    Id: Copy + Ord + Hash,
    F: FnMut(&[Id]),
{
    let order = DegeneracyOrder::compute(graph);
    let mut dispatch = Dispatch::default();

    for (position, &vertex) in order.as_slice().iter().enumerate() {
        // neighbour lists are sorted, so both halves stay sorted
        let (later, earlier): (Vec<Id>, Vec<Id>) = graph
            .neighbours(vertex)
            .iter()
            .partition(|&&u| order.position(u).is_some_and(|p| p > position));

        let structure = Structure::analyze(&later, graph);
        let state = SearchState::seeded(vertex, later, earlier);

        if threshold.is_dense(structure) {
            dispatch.dense += 1;
            core_decomposition::enumerate(graph, state, report);
        } else {
            dispatch.sparse += 1;
            pivot::enumerate(graph, state, report);
        }
    }

    dispatch
}

/// Enumerate the maximal cliques of `graph` with a single pivoting search.
pub(crate) fn pivot_baseline<Id, F>(graph: &AdjacencyIndex<'_, Id>, report: &mut F)
where
    Id: Copy + Ord + Hash,
    F: FnMut(&[Id]),
{
    // the root search would report the empty clique
    if graph.is_empty() {
        return;
    }
    pivot::enumerate(graph, SearchState::root(graph.vertices().to_vec()), report);
}
