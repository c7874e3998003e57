use super::cluster::Cluster;
use super::pair::Pair;
use crate::space::Space;

/// Dense cache of merge costs for every unordered pair of slots.
///
/// Pairs are stored once each in a flat upper-triangular array:
/// (0,1), (0,2), .., (0,n-1), (1,2), .., (n-2,n-1).
/// Memory and full scans are O(n²); refreshing one slot is O(n).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    pairs: Vec<Pair>,
}

impl Matrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            pairs: (0..n)
                .flat_map(|a| (a + 1..n).map(move |b| Pair::new(a, b)))
                .collect(),
        }
    }

    /// flat position of the pair {a, b}, in either order
    pub fn index(&self, a: usize, b: usize) -> usize {
        position(self.n, a, b)
    }

    pub fn pair(&self, a: usize, b: usize) -> &Pair {
        &self.pairs[self.index(a, b)]
    }

    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// flat positions of the n - 1 pairs involving `slot`
    pub fn touching(&self, slot: usize) -> impl Iterator<Item = usize> + use<> {
        spokes(self.n, slot)
    }

    /// Refresh every pair involving `slot` against the current slot statistics.
    pub fn refresh<S, K>(&mut self, slot: usize, space: &S, clusters: &[Cluster<S::P, K>])
    where
        S: Space,
    {
        for i in self.touching(slot) {
            self.pairs[i].refresh(space, clusters);
        }
    }

    /// Refresh all pairs. Used after wholesale changes like `clear`.
    pub fn refresh_all<S, K>(&mut self, space: &S, clusters: &[Cluster<S::P, K>])
    where
        S: Space,
    {
        self.pairs
            .iter_mut()
            .for_each(|pair| pair.refresh(space, clusters));
    }

    /// The valid pair with the smallest cost. Ties go to the earliest pair.
    pub fn cheapest(&self) -> Option<&Pair> {
        self.pairs
            .iter()
            .filter(|pair| pair.valid())
            .min_by(|p1, p2| p1.cost().total_cmp(&p2.cost()))
    }
}

fn position(n: usize, a: usize, b: usize) -> usize {
    assert!(a != b && a < n && b < n, "pair out of range");
    let (i, j) = (a.min(b), a.max(b));
    i * n - i * (i + 1) / 2 + (j - i - 1)
}

fn spokes(n: usize, slot: usize) -> impl Iterator<Item = usize> {
    (0..n)
        .filter(move |&other| other != slot)
        .map(move |other| position(n, slot, other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Scalar;

    #[test]
    fn triangular_layout() {
        let matrix = Matrix::new(5);
        assert_eq!(matrix.pairs().count(), 10);
        for (i, pair) in matrix.pairs().enumerate() {
            let (a, b) = pair.slots();
            assert_eq!(matrix.index(a, b), i);
            assert_eq!(matrix.index(b, a), i);
        }
    }

    #[test]
    fn touching_covers_every_other_slot() {
        let matrix = Matrix::new(6);
        let touching = matrix.touching(2).collect::<Vec<_>>();
        assert_eq!(touching.len(), 5);
        for i in touching {
            let (a, b) = matrix.pairs().nth(i).expect("in range").slots();
            assert!(a == 2 || b == 2);
        }
    }

    #[test]
    fn single_slot_has_no_pairs() {
        let matrix = Matrix::new(1);
        assert_eq!(matrix.pairs().count(), 0);
        assert_eq!(matrix.touching(0).count(), 0);
        assert!(matrix.cheapest().is_none());
    }

    #[test]
    fn cheapest_prefers_earliest_on_ties() {
        let clusters = [0., 1., 2.]
            .iter()
            .map(|x| {
                let mut c = Cluster::<f64, ()>::new(&Scalar);
                c.add_point(&Scalar, 1., x);
                c
            })
            .collect::<Vec<_>>();
        let mut matrix = Matrix::new(3);
        matrix.refresh_all(&Scalar, &clusters);
        // (0,1) and (1,2) both cost 0.5
        assert_eq!(matrix.cheapest().map(Pair::slots), Some((0, 1)));
    }

    #[test]
    fn refresh_updates_only_touching_pairs() {
        let mut clusters = [0., 1., 5.]
            .iter()
            .map(|x| {
                let mut c = Cluster::<f64, ()>::new(&Scalar);
                c.add_point(&Scalar, 1., x);
                c
            })
            .collect::<Vec<_>>();
        let mut matrix = Matrix::new(3);
        matrix.refresh_all(&Scalar, &clusters);
        clusters[0].clear();
        matrix.refresh(0, &Scalar, &clusters);
        assert!(!matrix.pair(0, 1).valid());
        assert!(!matrix.pair(0, 2).valid());
        assert_eq!(matrix.pair(1, 2).cost(), 8.);
        assert_eq!(matrix.cheapest().map(Pair::slots), Some((1, 2)));
    }
}
