use std::hash::Hash;

use super::state::{SearchState, count_common};
use crate::AdjacencyIndex;

/// Bron–Kerbosch by recursive core decomposition.
///
/// Repeatedly peels the candidate with the fewest neighbours among the candidates (branching on it
/// first), until the remaining candidates form a clique. That remainder is reported together with R
/// unless some excluded vertex is adjacent to all of it.
pub(crate) fn enumerate<Id, F>(graph: &AdjacencyIndex<'_, Id>, state: SearchState<Id>, report: &mut F)
where
    Id: Copy + Ord + Hash,
    F: FnMut(&[Id]),
{
    if state.is_maximal() {
        report(&state.clique);
        return;
    }

    let mut state = state;
    loop {
        let size = state.candidates.len();
        let mut is_clique = true;
        let mut worst: Option<(Id, usize)> = None;

        for &vertex in &state.candidates {
            let degree = count_common(&state.candidates, graph.neighbours(vertex));
            if degree + 1 < size {
                is_clique = false;
            }
            if worst.is_none_or(|(_, fewest)| degree < fewest) {
                worst = Some((vertex, degree));
            }
        }

        if is_clique {
            let blocked = state
                .excluded
                .iter()
                .any(|&x| count_common(&state.candidates, graph.neighbours(x)) == size);
            if !blocked {
                let mut clique = state.clique;
                clique.extend(state.candidates);
                report(&clique);
            }
            return;
        }

        // a non-clique candidate set has at least two members
        let Some((vertex, _)) = worst else {
            return;
        };
        enumerate(graph, state.branch(vertex, graph.neighbours(vertex)), report);
        state = state.exclude(vertex);

        if state.candidates.is_empty() {
            return;
        }
    }
}
