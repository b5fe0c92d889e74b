use std::cmp::Ordering;
use std::fmt;

use crate::{Colocation, ColocationMap};

/// Orders candidate colocations for the mining stage.
///
/// The ordering must be a strict weak ordering. [`CandidateQueue::pop`] returns the *greatest*
/// candidate first. Any `Fn(&Colocation, &Colocation) -> Ordering` closure is a priority.
pub trait ColocationPriority {
    /// Compare two colocations; the greater one is mined first.
    fn compare(&self, a: &Colocation, b: &Colocation) -> Ordering;
}

impl<F> ColocationPriority for F
where
    F: Fn(&Colocation, &Colocation) -> Ordering,
{
    fn compare(&self, a: &Colocation, b: &Colocation) -> Ordering {
        self(a, b)
    }
}

/// A priority queue of candidate colocations.
///
/// Candidates that compare equal under the priority pop in reverse insertion order, so the pop
/// sequence is fully determined by the insertion sequence.
pub struct CandidateQueue<P> {
    // ascending by priority, popped from the back
    items: Vec<Colocation>,
    priority: P,
}

impl<P> CandidateQueue<P>
where
    P: ColocationPriority,
{
    /// An empty queue ordered by `priority`.
    #[must_use]
    pub const fn new(priority: P) -> Self {
        Self {
            items: Vec::new(),
            priority,
        }
    }

    /// Add a candidate.
    pub fn push(&mut self, colocation: Colocation) {
        let index = self
            .items
            .partition_point(|item| self.priority.compare(item, &colocation) != Ordering::Greater);
        self.items.insert(index, colocation);
    }

    /// Remove and return the highest-priority candidate.
    pub fn pop(&mut self) -> Option<Colocation> {
        self.items.pop()
    }

    /// The highest-priority candidate, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Colocation> {
        self.items.last()
    }

    /// Pop every candidate, highest priority first.
    pub fn drain(&mut self) -> impl Iterator<Item = Colocation> + '_ {
        std::iter::from_fn(move || self.pop())
    }
}

impl<P> CandidateQueue<P> {
    /// Number of queued candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<P> Extend<Colocation> for CandidateQueue<P>
where
    P: ColocationPriority,
{
    fn extend<T: IntoIterator<Item = Colocation>>(&mut self, iter: T) {
        for colocation in iter {
            self.push(colocation);
        }
    }
}

impl<P> fmt::Debug for CandidateQueue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Queue every colocation of `map` exactly once, ordered by `priority`.
pub fn extract_candidates<Id, P>(map: &ColocationMap<Id>, priority: P) -> CandidateQueue<P>
where
    P: ColocationPriority,
{
    let mut queue = CandidateQueue::new(priority);
    queue.extend(map.colocations().cloned());
    queue
}
