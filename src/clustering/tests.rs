use crate::Arbitrary;
use crate::Mass;
use crate::space::Vector;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Test fixture: weighted points scattered around a few well separated blobs.
/// Uses small fixed constants for fast testing.
const DIMS: usize = 2;
const BLOBS: [f64; 3] = [-10., 0., 10.];

#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    pub mass: Mass,
    pub point: Vec<f64>,
}

impl Draw {
    pub fn space() -> Vector {
        Vector::new(DIMS)
    }
    /// reproducible sequence of draws
    pub fn stream(seed: u64, n: usize) -> Vec<Self> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        (0..n).map(|_| Self::sample(rng)).collect()
    }
    fn sample<R: Rng>(rng: &mut R) -> Self {
        let blob = BLOBS[rng.random_range(0..BLOBS.len())];
        Self {
            mass: rng.random_range(0.5..2.0),
            point: (0..DIMS)
                .map(|_| blob + rng.random_range(-1.0..1.0))
                .collect(),
        }
    }
}

impl Arbitrary for Draw {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

/// Check every structural invariant of a cluster set, panicking on the first violation:
/// live count, cached variances, cached pair costs, and key index consistency.
#[cfg(test)]
pub(crate) fn audit<S, K, Y>(set: &super::ClusterSet<S, K, Y>)
where
    S: crate::space::Space,
    K: Ord + Clone + std::fmt::Debug,
    Y: super::Keyer<K>,
{
    use crate::space::Space;
    let ref space = set.space();
    let live = set.iter_live().count();
    assert_eq!(live, set.len(), "live count drifted");
    assert!(live <= set.capacity(), "over capacity");
    for (_, c) in set.iter_live() {
        let fresh = space.variance(c.mass(), c.moment1(), c.moment2());
        assert!(
            (c.variance() - fresh).abs() <= 1e-9 * (1. + fresh.abs()),
            "stale variance {} vs {}",
            c.variance(),
            fresh
        );
    }
    for pair in set.matrix().pairs() {
        let (a, b) = pair.slots();
        let ca = set.cluster(a).expect("slot in range");
        let cb = set.cluster(b).expect("slot in range");
        match (ca.is_empty(), cb.is_empty()) {
            (false, false) => {
                let fresh = ca.test_merge_with(*space, cb) - ca.variance() - cb.variance();
                assert!(pair.valid(), "live pair ({}, {}) invalid", a, b);
                assert!(
                    (pair.cost() - fresh).abs() <= 1e-9 * (1. + fresh.abs()),
                    "stale cost on ({}, {}): {} vs {}",
                    a,
                    b,
                    pair.cost(),
                    fresh
                );
            }
            _ => assert!(!pair.valid(), "dead pair ({}, {}) valid", a, b),
        }
    }
    for (key, slot) in set.keys() {
        let c = set.cluster(slot).expect("slot in range");
        assert!(!c.is_empty(), "key {:?} points at empty slot", key);
        assert_eq!(c.key(), Some(key), "key {:?} points at wrong slot", key);
    }
    for (slot, c) in set.iter_live() {
        if let Some(key) = c.key() {
            assert_eq!(set.slot(key), Some(slot), "key {:?} not indexed", key);
        }
    }
}
