use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::FeatureType;

/// The shape of a maximal clique: the feature types of its participants, sorted ascending.
///
/// A colocation keeps one entry per participant, so a clique of two schools and a hospital has the
/// key `[hospital, school, school]`. Two cliques share a key exactly when they have the same multiset
/// of feature types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Colocation(Vec<FeatureType>);

impl Colocation {
    /// Construct a colocation from feature types in any order.
    #[must_use]
    pub fn new(features: impl IntoIterator<Item = FeatureType>) -> Self {
        let mut features: Vec<_> = features.into_iter().collect();
        features.sort();
        Self(features)
    }

    /// The feature types, in ascending order, with repeats.
    #[must_use]
    pub fn features(&self) -> &[FeatureType] {
        &self.0
    }

    /// The number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the colocation has no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FeatureType> for Colocation {
    fn from_iter<T: IntoIterator<Item = FeatureType>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> FromIterator<&'a str> for Colocation {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(FeatureType::from))
    }
}

impl AsRef<[FeatureType]> for Colocation {
    fn as_ref(&self) -> &[FeatureType] {
        &self.0
    }
}

impl fmt::Display for Colocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, feature) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{feature}")?;
        }
        f.write_str("}")
    }
}

/// The instances taking part in a colocation, grouped by feature type.
pub type ParticipantsByFeature<Id> = BTreeMap<FeatureType, BTreeSet<Id>>;

/// Maximal cliques grouped by their [`Colocation`].
///
/// For every colocation, records which instances of each feature type took part in at least one
/// maximal clique of that shape. Recording is commutative, so the map does not depend on the order in
/// which cliques are discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColocationMap<Id> {
    entries: BTreeMap<Colocation, ParticipantsByFeature<Id>>,
}

impl<Id> Default for ColocationMap<Id> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<Id> ColocationMap<Id>
where
    Id: Ord,
{
    /// Record a maximal clique, given as its participants and their feature types.
    ///
    /// Cliques with fewer than two participants are not colocations and are ignored.
    pub fn record<I>(&mut self, participants: I)
    where
        I: IntoIterator<Item = (Id, FeatureType)>,
    {
        let participants: Vec<_> = participants.into_iter().collect();
        if participants.len() < 2 {
            return;
        }

        let key = Colocation::new(participants.iter().map(|(_, feature)| feature.clone()));
        let entry = self.entries.entry(key).or_default();
        for (id, feature) in participants {
            entry.entry(feature).or_default().insert(id);
        }
    }
}

impl<Id> ColocationMap<Id> {
    /// The participants of `colocation`, if any clique of that shape was found.
    #[must_use]
    pub fn get(&self, colocation: &Colocation) -> Option<&ParticipantsByFeature<Id>> {
        self.entries.get(colocation)
    }

    /// The instances of `feature` taking part in `colocation`.
    #[must_use]
    pub fn instances(&self, colocation: &Colocation, feature: &FeatureType) -> Option<&BTreeSet<Id>> {
        self.entries.get(colocation)?.get(feature)
    }

    /// Whether a clique of shape `colocation` was found.
    #[must_use]
    pub fn contains(&self, colocation: &Colocation) -> bool {
        self.entries.contains_key(colocation)
    }

    /// Every distinct colocation, in ascending order.
    pub fn colocations(&self) -> impl ExactSizeIterator<Item = &Colocation> {
        self.entries.keys()
    }

    /// Iterate over colocations and their participants, in ascending colocation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Colocation, &ParticipantsByFeature<Id>)> {
        self.entries.iter()
    }

    /// Number of distinct colocations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no colocation was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, Id> IntoIterator for &'a ColocationMap<Id> {
    type Item = (&'a Colocation, &'a ParticipantsByFeature<Id>);
    type IntoIter = std::collections::btree_map::Iter<'a, Colocation, ParticipantsByFeature<Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
