use crate::Mass;
use crate::Variance;
use crate::space::Point;
use crate::space::Space;

/// Lifecycle of a cluster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Capacity available.
    Empty,
    /// Holds at least one point.
    Live,
}

/// A cluster of weighted points, summarized by its sufficient statistics.
///
/// The raw points are never retained. Mass `m0`, first moment `m1 = Σ(m·x)`
/// and second moment `m2 = Σ(m·x²)` are enough to compute variance, and the
/// variance of any hypothetical merge, in time independent of the point count.
///
/// `var` is cached and only ever written by [`Cluster::recompute`] or by
/// paths where its value is known exactly (singletons, copies).
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<P, K> {
    count: usize,
    m0: Mass,
    m1: P,
    m2: P,
    var: Variance,
    key: Option<K>,
}

impl<P, K> Cluster<P, K>
where
    P: Point,
{
    /// An empty cluster with moments at the origin of `space`.
    pub fn new<S>(space: &S) -> Self
    where
        S: Space<P = P>,
    {
        Self {
            count: 0,
            m0: 0.,
            m1: space.origin(),
            m2: space.origin(),
            var: 0.,
            key: None,
        }
    }

    /// number of points absorbed, including massless ones
    pub fn count(&self) -> usize {
        self.count
    }
    /// total mass absorbed
    pub fn mass(&self) -> Mass {
        self.m0
    }
    /// mass-weighted sum of squared deviations from the centroid
    pub fn variance(&self) -> Variance {
        self.var
    }
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }
    /// Σ(m·x)
    pub fn moment1(&self) -> &P {
        &self.m1
    }
    /// Σ(m·x²)
    pub fn moment2(&self) -> &P {
        &self.m2
    }
    pub fn state(&self) -> State {
        if self.count == 0 {
            State::Empty
        } else {
            State::Live
        }
    }
    pub fn is_empty(&self) -> bool {
        self.state() == State::Empty
    }
    /// mass-weighted mean, undefined for a massless cluster
    pub fn centroid(&self) -> Option<P> {
        if self.m0 == 0. {
            None
        } else {
            let mut centroid = self.m1.clone();
            centroid.scale(1. / self.m0);
            Some(centroid)
        }
    }

    /// Replace the key without touching statistics.
    pub fn set_key(&mut self, key: Option<K>) {
        self.key = key;
    }
    pub(crate) fn take_key(&mut self) -> Option<K> {
        self.key.take()
    }

    /// Reset to the empty state, dropping any key.
    pub fn clear(&mut self) {
        self.count = 0;
        self.m0 = 0.;
        self.m1.set_to_origin();
        self.m2.set_to_origin();
        self.var = 0.;
        self.key = None;
    }

    /// Become a cluster of exactly one point.
    pub fn set_to_point(&mut self, m: Mass, pt: &P) {
        if m == 0. {
            if self.count != 0 {
                self.m1.set_to_origin();
                self.m2.set_to_origin();
            }
        } else {
            self.m1.set_to_scaled(m, pt);
            self.m2.set_to_scaled_sqr(m, pt);
        }
        self.count = 1;
        self.m0 = m;
        self.var = 0.;
    }

    /// Absorb a point. A massless point is counted but leaves statistics alone.
    pub fn add_point<S>(&mut self, space: &S, m: Mass, pt: &P)
    where
        S: Space<P = P>,
    {
        if self.count == 0 {
            self.set_to_point(m, pt);
        } else {
            self.count += 1;
            if m != 0. {
                self.m0 += m;
                self.m1.add_scaled(m, pt);
                self.m2.add_scaled_sqr(m, pt);
                self.recompute(space);
            }
        }
    }

    /// Copy mass, moments and variance from `other`. Count and key are kept.
    /// `other` cannot alias `self`; slot-level self-copies are rejected by the engine.
    pub fn set_to_cluster(&mut self, other: &Self) {
        self.m0 = other.m0;
        self.m1.set_to(&other.m1);
        self.m2.set_to(&other.m2);
        self.var = other.var;
    }

    /// Absorb every point of `other`.
    pub fn add_cluster<S>(&mut self, space: &S, other: &Self)
    where
        S: Space<P = P>,
    {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            self.set_to_cluster(other);
            self.count = other.count;
        } else {
            self.count += other.count;
            self.m0 += other.m0;
            self.m1.add(&other.m1);
            self.m2.add(&other.m2);
            self.recompute(space);
        }
    }

    /// Increase in variance if the point were absorbed. Does not mutate.
    pub fn test_add_point<S>(&self, space: &S, m: Mass, pt: &P) -> Variance
    where
        S: Space<P = P>,
    {
        if self.m0 == 0. && m == 0. {
            0.
        } else {
            space.variance_with(self.m0, &self.m1, &self.m2, m, pt) - self.var
        }
    }

    /// Variance of the merged cluster. Unlike [`Cluster::test_add_point`]
    /// this is the total, not the increase.
    pub fn test_merge_with<S>(&self, space: &S, other: &Self) -> Variance
    where
        S: Space<P = P>,
    {
        if self.m0 == 0. && other.m0 == 0. {
            0.
        } else {
            space.variance_union(
                self.m0, &self.m1, &self.m2, other.m0, &other.m1, &other.m2,
            )
        }
    }

    fn recompute<S>(&mut self, space: &S)
    where
        S: Space<P = P>,
    {
        self.var = if self.m0 == 0. {
            0.
        } else {
            space.variance(self.m0, &self.m1, &self.m2)
        };
    }
}
