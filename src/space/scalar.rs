use super::space::spread;
use super::space::Space;
use crate::Mass;
use crate::Variance;

/// One-dimensional real line. Points are bare `f64`s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scalar;

impl Space for Scalar {
    type P = f64;

    fn origin(&self) -> f64 {
        0.
    }
    fn dimensions(&self) -> usize {
        1
    }
    fn variance(&self, m0: Mass, m1: &f64, m2: &f64) -> Variance {
        spread(m0, *m1, *m2)
    }
    fn variance_with(&self, m0: Mass, m1: &f64, m2: &f64, m: Mass, pt: &f64) -> Variance {
        spread(m0 + m, m1 + m * pt, m2 + m * pt * pt)
    }
    fn variance_union(
        &self,
        m0a: Mass,
        m1a: &f64,
        m2a: &f64,
        m0b: Mass,
        m1b: &f64,
        m2b: &f64,
    ) -> Variance {
        spread(m0a + m0b, m1a + m1b, m2a + m2b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_points_spread() {
        // {0, 10} with unit masses: mean 5, squared deviations 25 + 25
        let (m0, m1, m2) = (1., 0., 0.);
        assert_eq!(Scalar.variance_with(m0, &m1, &m2, 1., &10.), 50.);
    }

    #[test]
    fn union_matches_with() {
        let (m0a, m1a, m2a) = (2., 2., 2.);
        let (m0b, m1b, m2b) = (1., 4., 16.);
        let union = Scalar.variance_union(m0a, &m1a, &m2a, m0b, &m1b, &m2b);
        let with = Scalar.variance_with(m0a, &m1a, &m2a, 1., &4.);
        assert_eq!(union, with);
    }

    #[test]
    fn massless_is_zero() {
        assert_eq!(Scalar.variance(0., &0., &0.), 0.);
        assert_eq!(Scalar.variance_with(0., &0., &0., 0., &3.), 0.);
        assert_eq!(Scalar.variance_union(0., &0., &0., 0., &0., &0.), 0.);
    }
}
