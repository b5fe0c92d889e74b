//! Spatial instances tagged with a feature type.
//!
//! A [`SpatialInstance`] pairs a 2D position with the [`FeatureType`] of the object found there
//! (for example "school", "hospital", or a plant species). Instances are wrapped in [`Unique`] to give
//! them a caller-chosen, totally ordered identity. Every ordering decision the clique engine makes
//! (sorted candidate sets, tie-breaking in the degeneracy order) is taken from that identity, so
//! results never depend on where an instance happens to live in memory.

use std::fmt;

use nalgebra::Point2;

/// A wrapper type that assigns a unique identifier to its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unique<T, Id> {
    /// The wrapped payload.
    pub data: T,

    /// Unique identifier for the wrapped item.
    pub id: Id,
}

/// A spatial instance with a stable identity.
pub type Instance<Id> = Unique<SpatialInstance, Id>;

/// The category label of a spatial instance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureType(String);

impl FeatureType {
    /// Construct a feature type from its label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label of this feature type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeatureType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for FeatureType {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An object of a given feature type observed at a fixed location.
///
/// # Example
///
/// ```
/// use colocation_cliques::SpatialInstance;
///
/// let school = SpatialInstance::new("school", 10.0, 20.0);
///
/// assert_eq!(school.feature().as_str(), "school");
/// assert_eq!(school.position(), (10.0, 20.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialInstance {
    feature: FeatureType,
    position: Point2<f64>,
}

impl SpatialInstance {
    /// Construct a new instance of `feature` at `(x, y)`.
    #[must_use]
    pub fn new(feature: impl Into<FeatureType>, x: f64, y: f64) -> Self {
        Self {
            feature: feature.into(),
            position: Point2::new(x, y),
        }
    }

    /// The feature type of the instance.
    #[must_use]
    pub const fn feature(&self) -> &FeatureType {
        &self.feature
    }

    /// The position of the instance (x, y).
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.position.x, self.position.y)
    }

    /// The x ordinate of the instance.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// The y ordinate of the instance.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Squared euclidean distance between this instance and a point.
    #[must_use]
    pub(crate) fn distance_squared_to(&self, point: &Point2<f64>) -> f64 {
        nalgebra::distance_squared(&self.position, point)
    }
}
