use super::point::Point;
use crate::Mass;
use crate::Variance;

/// A numeric strategy for clustering points of type `P`.
///
/// All variances are computed from sufficient statistics alone:
/// total mass `m0`, first moment `m1 = Σ(m·x)`, second moment `m2 = Σ(m·x²)`.
/// Variance here is the unnormalized, mass-weighted sum of squared deviations
/// from the mean, Σ_d (m2 − m1²/m0), so that merge costs are additive.
///
/// Implementations must return 0 (never NaN) when the total mass is 0.
pub trait Space {
    type P: Point;

    /// A fresh point at the origin, sized for this space.
    fn origin(&self) -> Self::P;
    fn dimensions(&self) -> usize;

    /// Whether `pt` has this space's dimension. Mismatched points
    /// must be rejected before they reach any moment arithmetic.
    fn admits(&self, pt: &Self::P) -> bool {
        pt.dimensions() == self.dimensions()
    }

    /// Variance of a single cluster.
    fn variance(&self, m0: Mass, m1: &Self::P, m2: &Self::P) -> Variance;

    /// Variance of a cluster as if a point `pt` of mass `m` were absorbed into it.
    fn variance_with(
        &self,
        m0: Mass,
        m1: &Self::P,
        m2: &Self::P,
        m: Mass,
        pt: &Self::P,
    ) -> Variance;

    /// Variance of the union of two clusters.
    fn variance_union(
        &self,
        m0a: Mass,
        m1a: &Self::P,
        m2a: &Self::P,
        m0b: Mass,
        m1b: &Self::P,
        m2b: &Self::P,
    ) -> Variance;
}

/// Σ(m2 − m1²/m0) for a single coordinate, clamped against cancellation.
pub(crate) fn spread(m0: Mass, m1: f64, m2: f64) -> Variance {
    if m0 == 0. {
        0.
    } else {
        (m2 - m1 * m1 / m0).max(0.)
    }
}
