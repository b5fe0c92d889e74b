use std::hash::Hash;

use crate::{AdjacencyIndex, cliques::state::count_common};

/// The kernel/shell split of a candidate set.
///
/// A *kernel* vertex is adjacent to every other candidate; every other candidate is in the *shell*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Structure {
    /// Number of candidates adjacent to all other candidates.
    pub kernel: usize,

    /// Number of candidates missing at least one other candidate.
    pub shell: usize,
}

impl Structure {
    /// Classify each of the sorted `candidates` by its degree inside the candidate set.
    #[must_use]
    pub fn analyze<Id>(candidates: &[Id], graph: &AdjacencyIndex<'_, Id>) -> Self
    where
        Id: Copy + Ord + Hash,
    {
        let full = candidates.len().saturating_sub(1);
        let kernel = candidates
            .iter()
            .filter(|&&u| count_common(candidates, graph.neighbours(u)) == full)
            .count();
        Self {
            kernel,
            shell: candidates.len() - kernel,
        }
    }
}

/// The coefficients of a [`DensityThreshold`] must be finite.
#[derive(Debug, thiserror::Error)]
#[error("density threshold coefficients must be finite (slope: {slope}, intercept: {intercept})")]
pub struct InvalidDensityThreshold {
    slope: f64,
    intercept: f64,
}

/// Decides which enumerator handles a candidate set, given its [`Structure`].
///
/// A subproblem counts as dense when `kernel >= slope * shell + intercept`. Dense subproblems are
/// handed to recursive core decomposition, which peels the few shell vertices until the remainder is
/// a clique; sparse ones go to pivoting Bron–Kerbosch.
///
/// The default rule, `kernel >= 2.8 * shell - 11`, is an empirical fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityThreshold {
    slope: f64,
    intercept: f64,
}

impl DensityThreshold {
    /// Slope of the default rule.
    pub const DEFAULT_SLOPE: f64 = 2.8;

    /// Intercept of the default rule.
    pub const DEFAULT_INTERCEPT: f64 = -11.0;

    /// Construct a threshold `kernel >= slope * shell + intercept`.
    ///
    /// # Errors
    ///
    /// Returns an error if either coefficient is infinite or NaN.
    pub fn new(slope: f64, intercept: f64) -> Result<Self, InvalidDensityThreshold> {
        if slope.is_finite() && intercept.is_finite() {
            Ok(Self { slope, intercept })
        } else {
            Err(InvalidDensityThreshold { slope, intercept })
        }
    }

    /// The slope applied to the shell size.
    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    /// The constant offset of the rule.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Whether a subproblem with this structure should use core decomposition.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
    pub fn is_dense(&self, structure: Structure) -> bool {
        structure.kernel as f64 >= self.slope * structure.shell as f64 + self.intercept
    }
}

impl Default for DensityThreshold {
    fn default() -> Self {
        Self {
            slope: Self::DEFAULT_SLOPE,
            intercept: Self::DEFAULT_INTERCEPT,
        }
    }
}
