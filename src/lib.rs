#![doc = include_str!("../README.md")]

mod instance;
pub use instance::{FeatureType, Instance, SpatialInstance, Unique};

mod neighbourhood;
pub use neighbourhood::{InvalidDistance, NeighborSet, NeighbourIndex, neighbor_sets};

mod adjacency;
pub use adjacency::AdjacencyIndex;

mod degeneracy;
pub use degeneracy::DegeneracyOrder;

mod structure;
pub use structure::{DensityThreshold, InvalidDensityThreshold, Structure};

mod cliques;
pub use cliques::Strategy;

mod colocation;
pub use colocation::{Colocation, ColocationMap, ParticipantsByFeature};

mod candidates;
pub use candidates::{CandidateQueue, ColocationPriority, extract_candidates};

mod statistics;
pub use statistics::{
    DISPERSION_FLOOR, FeatureCounts, calculate_dispersion, count_features, rare_intensity,
};

mod engine;
pub use engine::{ColocationEngine, ColocationEngineBuilder};

mod pipeline;
pub use pipeline::MiningSeed;

#[cfg(test)]
mod test_graph;
