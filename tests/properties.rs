//! Checks every enumeration strategy against an exhaustive search on small random graphs.

use std::collections::BTreeSet;
use std::hash::Hash;

use colocation_cliques::{
    Colocation, ColocationEngine, DensityThreshold, Instance, NeighborSet, SpatialInstance,
    Strategy, Unique, neighbor_sets,
};
use rand::prelude::*;
use uuid::Uuid;

const FEATURES: [&str; 3] = ["A", "B", "C"];

/// An explicit graph over instances, with edges given by index.
struct RandomGraph<Id> {
    instances: Vec<Instance<Id>>,
    edges: BTreeSet<(usize, usize)>,
}

impl RandomGraph<u32> {
    fn generate(rng: &mut StdRng, vertices: usize, density: f64) -> Self {
        let instances = (0..vertices)
            .zip(0u32..)
            .map(|(_, id)| Unique {
                data: SpatialInstance::new(FEATURES[rng.random_range(0..FEATURES.len())], 0.0, 0.0),
                id,
            })
            .collect();

        let mut edges = BTreeSet::new();
        for u in 0..vertices {
            for v in (u + 1)..vertices {
                if rng.random_bool(density) {
                    edges.insert((u, v));
                }
            }
        }

        Self { instances, edges }
    }
}

impl<Id> RandomGraph<Id>
where
    Id: Copy + Ord,
{
    fn adjacent(&self, u: usize, v: usize) -> bool {
        self.edges.contains(&(u.min(v), u.max(v)))
    }

    fn neighbor_sets(&self) -> Vec<NeighborSet<'_, Id>> {
        (0..self.instances.len())
            .map(|u| NeighborSet {
                center: &self.instances[u],
                neighbors: (0..self.instances.len())
                    .filter(|&v| v != u && self.adjacent(u, v))
                    .map(|v| &self.instances[v])
                    .collect(),
            })
            .collect()
    }

    /// Every maximal clique, found by testing every subset of vertices.
    fn brute_force(&self) -> BTreeSet<Vec<Id>> {
        let n = self.instances.len();
        let is_clique = |members: &[usize]| {
            members
                .iter()
                .enumerate()
                .all(|(i, &u)| members[i + 1..].iter().all(|&v| self.adjacent(u, v)))
        };

        let mut cliques = BTreeSet::new();
        for mask in 1_u32..(1 << n) {
            let members: Vec<usize> = (0..n).filter(|&i| mask & (1 << i) != 0).collect();
            if !is_clique(&members) {
                continue;
            }
            let extendable = (0..n)
                .filter(|i| !members.contains(i))
                .any(|w| members.iter().all(|&u| self.adjacent(u, w)));
            if !extendable {
                let mut ids: Vec<Id> = members.iter().map(|&i| self.instances[i].id).collect();
                ids.sort_unstable();
                cliques.insert(ids);
            }
        }
        cliques
    }
}

fn engines() -> [ColocationEngine; 4] {
    [
        ColocationEngine::default(),
        ColocationEngine::builder()
            .strategy(Strategy::PivotBaseline)
            .build(),
        // every subproblem goes to core decomposition
        ColocationEngine::builder()
            .density_threshold(DensityThreshold::new(0.0, -1e9).unwrap())
            .build(),
        // every subproblem goes to the pivoting search
        ColocationEngine::builder()
            .density_threshold(DensityThreshold::new(0.0, 1e9).unwrap())
            .build(),
    ]
}

fn assert_complete<Id>(
    engine: &ColocationEngine,
    sets: &[NeighborSet<'_, Id>],
    expected: &BTreeSet<Vec<Id>>,
) where
    Id: Copy + Ord + Hash + std::fmt::Debug,
{
    let found = engine.maximal_cliques(sets);
    let unique: BTreeSet<Vec<Id>> = found.iter().cloned().collect();

    assert_eq!(unique.len(), found.len(), "{engine:?} reported a clique twice");
    assert_eq!(&unique, expected, "{engine:?} disagrees with exhaustive search");
}

#[test]
fn every_strategy_finds_exactly_the_maximal_cliques() {
    let mut rng = StdRng::seed_from_u64(0x00c0_10ca);

    for _ in 0..300 {
        let vertices = rng.random_range(1..=12);
        let density = rng.random_range(0.1..0.95);
        let graph = RandomGraph::generate(&mut rng, vertices, density);
        let sets = graph.neighbor_sets();
        let expected = graph.brute_force();

        for engine in engines() {
            assert_complete(&engine, &sets, &expected);
        }
    }
}

#[test]
fn complete_and_empty_graphs() {
    for vertices in 1..=8 {
        let mut graph = RandomGraph::generate(&mut StdRng::seed_from_u64(1), vertices, 0.0);
        let sets = graph.neighbor_sets();
        for engine in engines() {
            assert_eq!(engine.maximal_cliques(&sets).len(), vertices);
        }

        for u in 0..vertices {
            for v in (u + 1)..vertices {
                graph.edges.insert((u, v));
            }
        }
        let sets = graph.neighbor_sets();
        let everyone: Vec<u32> = graph.instances.iter().map(|instance| instance.id).collect();
        for engine in engines() {
            assert_eq!(engine.maximal_cliques(&sets), [everyone.clone()]);
        }
    }
}

#[test]
fn strategies_agree_on_colocations() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let vertices = rng.random_range(2..=30);
        let graph = RandomGraph::generate(&mut rng, vertices, 0.4);
        let sets = graph.neighbor_sets();

        let [reference, rest @ ..] = engines().map(|engine| engine.execute(&sets));
        for colocations in rest {
            assert_eq!(colocations, reference);
        }
    }
}

#[test]
fn enumeration_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = RandomGraph::generate(&mut rng, 40, 0.3);
    let sets = graph.neighbor_sets();

    for engine in engines() {
        assert_eq!(engine.maximal_cliques(&sets), engine.maximal_cliques(&sets));
    }
}

#[test]
fn uuid_identities() {
    // a unit square (pairwise at most √2 apart) with one instance hanging off a corner
    let positions = [
        ("A", 0.0, 0.0),
        ("B", 1.0, 0.0),
        ("A", 0.0, 1.0),
        ("C", 1.0, 1.0),
        ("B", 2.2, 0.0),
    ];
    let instances: Vec<_> = positions
        .into_iter()
        .map(|(feature, x, y)| Unique {
            data: SpatialInstance::new(feature, x, y),
            id: Uuid::new_v4(),
        })
        .collect();
    let sets = neighbor_sets(&instances, 1.5).unwrap();

    let square: Colocation = ["A", "A", "B", "C"].into_iter().collect();
    let pair: Colocation = ["B", "B"].into_iter().collect();

    for engine in engines() {
        assert_eq!(engine.maximal_cliques(&sets).len(), 2);

        let colocations = engine.execute(&sets);
        assert_eq!(colocations.colocations().collect::<Vec<_>>(), [&square, &pair]);
        assert_eq!(
            colocations.instances(&pair, &"B".into()),
            Some(&BTreeSet::from([instances[1].id, instances[4].id]))
        );
    }
}
