use crate::Mass;

/// In-place moment arithmetic over a point representation.
///
/// Clusters never keep the points they absorb. They keep two running sums,
/// Σ(m·x) and Σ(m·x²), so every operation here writes into `self`
/// rather than allocating a new point. Squares are taken coordinate-wise.
pub trait Point: Clone + std::fmt::Debug + PartialEq {
    /// number of coordinates
    fn dimensions(&self) -> usize;
    /// x ← 0
    fn set_to_origin(&mut self);
    /// x ← p
    fn set_to(&mut self, p: &Self);
    /// x ← m·p
    fn set_to_scaled(&mut self, m: Mass, p: &Self);
    /// x ← m·p²
    fn set_to_scaled_sqr(&mut self, m: Mass, p: &Self);
    /// x ← x + p
    fn add(&mut self, p: &Self);
    /// x ← x + m·p
    fn add_scaled(&mut self, m: Mass, p: &Self);
    /// x ← x + m·p²
    fn add_scaled_sqr(&mut self, m: Mass, p: &Self);
    /// x ← m·x
    fn scale(&mut self, m: Mass);
}

impl Point for f64 {
    fn dimensions(&self) -> usize {
        1
    }
    fn set_to_origin(&mut self) {
        *self = 0.;
    }
    fn set_to(&mut self, p: &Self) {
        *self = *p;
    }
    fn set_to_scaled(&mut self, m: Mass, p: &Self) {
        *self = m * p;
    }
    fn set_to_scaled_sqr(&mut self, m: Mass, p: &Self) {
        *self = m * p * p;
    }
    fn add(&mut self, p: &Self) {
        *self += p;
    }
    fn add_scaled(&mut self, m: Mass, p: &Self) {
        *self += m * p;
    }
    fn add_scaled_sqr(&mut self, m: Mass, p: &Self) {
        *self += m * p * p;
    }
    fn scale(&mut self, m: Mass) {
        *self *= m;
    }
}

/// Coordinate-wise arithmetic. Both operands must share a dimension;
/// mismatches are a caller bug and trip a debug assertion.
impl Point for Vec<f64> {
    fn dimensions(&self) -> usize {
        self.len()
    }
    fn set_to_origin(&mut self) {
        self.iter_mut().for_each(|x| *x = 0.);
    }
    fn set_to(&mut self, p: &Self) {
        debug_assert_eq!(self.len(), p.len());
        self.copy_from_slice(p);
    }
    fn set_to_scaled(&mut self, m: Mass, p: &Self) {
        debug_assert_eq!(self.len(), p.len());
        self.iter_mut().zip(p).for_each(|(x, y)| *x = m * y);
    }
    fn set_to_scaled_sqr(&mut self, m: Mass, p: &Self) {
        debug_assert_eq!(self.len(), p.len());
        self.iter_mut().zip(p).for_each(|(x, y)| *x = m * y * y);
    }
    fn add(&mut self, p: &Self) {
        debug_assert_eq!(self.len(), p.len());
        self.iter_mut().zip(p).for_each(|(x, y)| *x += y);
    }
    fn add_scaled(&mut self, m: Mass, p: &Self) {
        debug_assert_eq!(self.len(), p.len());
        self.iter_mut().zip(p).for_each(|(x, y)| *x += m * y);
    }
    fn add_scaled_sqr(&mut self, m: Mass, p: &Self) {
        debug_assert_eq!(self.len(), p.len());
        self.iter_mut().zip(p).for_each(|(x, y)| *x += m * y * y);
    }
    fn scale(&mut self, m: Mass) {
        self.iter_mut().for_each(|x| *x *= m);
    }
}
