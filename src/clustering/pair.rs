use super::cluster::Cluster;
use crate::Variance;
use crate::space::Space;

/// Cached merge cost between two cluster slots.
///
/// The endpoints are fixed for the lifetime of the owning set; only the cost
/// changes. The pair does not watch its endpoints: whoever mutates a slot must
/// [`Pair::refresh`] every pair touching it before costs are compared again.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    a: usize,
    b: usize,
    cost: Variance,
    valid: bool,
}

impl Pair {
    /// A pair between two distinct slots, unordered. Starts invalid.
    pub fn new(a: usize, b: usize) -> Self {
        assert!(a != b, "pair endpoints must be distinct");
        Self {
            a: a.min(b),
            b: a.max(b),
            cost: Variance::INFINITY,
            valid: false,
        }
    }
    /// (lower slot, higher slot)
    pub fn slots(&self) -> (usize, usize) {
        (self.a, self.b)
    }
    /// increase in total variance if the endpoints were merged
    pub fn cost(&self) -> Variance {
        self.cost
    }
    /// both endpoints are live and the cost reflects them
    pub fn valid(&self) -> bool {
        self.valid
    }
    /// the endpoint that isn't `slot`
    pub fn other(&self, slot: usize) -> usize {
        if self.a == slot { self.b } else { self.a }
    }

    /// Recompute the cost from the endpoints' current statistics.
    /// `clusters` is the owning set's slot array.
    pub fn refresh<S, K>(&mut self, space: &S, clusters: &[Cluster<S::P, K>])
    where
        S: Space,
    {
        let ref a = clusters[self.a];
        let ref b = clusters[self.b];
        if a.is_empty() || b.is_empty() {
            self.cost = Variance::INFINITY;
            self.valid = false;
        } else {
            self.cost = a.test_merge_with(space, b) - a.variance() - b.variance();
            self.valid = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Scalar;

    fn slots(points: &[Option<f64>]) -> Vec<Cluster<f64, ()>> {
        points
            .iter()
            .map(|x| {
                let mut c = Cluster::new(&Scalar);
                if let Some(x) = x {
                    c.add_point(&Scalar, 1., x);
                }
                c
            })
            .collect()
    }

    #[test]
    fn endpoints_are_ordered() {
        assert_eq!(Pair::new(3, 1).slots(), (1, 3));
        assert_eq!(Pair::new(3, 1).other(3), 1);
    }

    #[test]
    fn cost_is_variance_increase() {
        let ref clusters = slots(&[Some(0.), Some(4.)]);
        let mut pair = Pair::new(0, 1);
        pair.refresh(&Scalar, clusters);
        assert!(pair.valid());
        assert_eq!(pair.cost(), 8.);
    }

    #[test]
    fn empty_endpoint_invalidates() {
        let ref clusters = slots(&[Some(0.), None]);
        let mut pair = Pair::new(0, 1);
        pair.refresh(&Scalar, clusters);
        assert!(!pair.valid());
        assert_eq!(pair.cost(), Variance::INFINITY);
    }
}
