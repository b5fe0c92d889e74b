use std::hash::Hash;

use super::state::{SearchState, count_common, difference};
use crate::AdjacencyIndex;

/// Bron–Kerbosch with pivoting.
///
/// Reports R whenever P and X are both empty. Branches only on the candidates that are *not*
/// adjacent to the pivot: any maximal clique containing a pivot neighbour must also contain the pivot
/// or one of its non-neighbours, so those branches would be redundant.
pub(crate) fn enumerate<Id, F>(graph: &AdjacencyIndex<'_, Id>, state: SearchState<Id>, report: &mut F)
where
    Id: Copy + Ord + Hash,
    F: FnMut(&[Id]),
{
    if state.candidates.is_empty() {
        // with X non-empty, R could still be extended by an excluded vertex
        if state.excluded.is_empty() {
            report(&state.clique);
        }
        return;
    }

    let branches = select_pivot(graph, &state).map_or_else(
        || state.candidates.clone(),
        |pivot| difference(&state.candidates, graph.neighbours(pivot)),
    );

    let mut state = state;
    for vertex in branches {
        enumerate(graph, state.branch(vertex, graph.neighbours(vertex)), report);
        // prevents duplicate cliques in the sibling branches
        state = state.exclude(vertex);
    }
}

/// The vertex of P ∪ X with the most neighbours in P.
///
/// Scans P, then X; the first maximiser wins ties.
fn select_pivot<Id>(graph: &AdjacencyIndex<'_, Id>, state: &SearchState<Id>) -> Option<Id>
where
    Id: Copy + Ord + Hash,
{
    let mut best: Option<(Id, usize)> = None;
    for &vertex in state.candidates.iter().chain(&state.excluded) {
        let reach = count_common(&state.candidates, graph.neighbours(vertex));
        if best.is_none_or(|(_, most)| reach > most) {
            best = Some((vertex, reach));
        }
    }
    best.map(|(vertex, _)| vertex)
}
