use super::space::spread;
use super::space::Space;
use crate::Mass;
use crate::Variance;

/// Euclidean space of fixed dimension. Points are `Vec<f64>` of length `dims`,
/// and variance is the sum of per-coordinate variances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    dims: usize,
}

impl Vector {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl From<usize> for Vector {
    fn from(dims: usize) -> Self {
        Self::new(dims)
    }
}

impl Space for Vector {
    type P = Vec<f64>;

    fn origin(&self) -> Vec<f64> {
        vec![0.; self.dims]
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn variance(&self, m0: Mass, m1: &Vec<f64>, m2: &Vec<f64>) -> Variance {
        m1.iter().zip(m2).map(|(x1, x2)| spread(m0, *x1, *x2)).sum()
    }
    fn variance_with(
        &self,
        m0: Mass,
        m1: &Vec<f64>,
        m2: &Vec<f64>,
        m: Mass,
        pt: &Vec<f64>,
    ) -> Variance {
        let m0 = m0 + m;
        m1.iter()
            .zip(m2)
            .zip(pt)
            .map(|((x1, x2), x)| spread(m0, x1 + m * x, x2 + m * x * x))
            .sum()
    }
    fn variance_union(
        &self,
        m0a: Mass,
        m1a: &Vec<f64>,
        m2a: &Vec<f64>,
        m0b: Mass,
        m1b: &Vec<f64>,
        m2b: &Vec<f64>,
    ) -> Variance {
        let m0 = m0a + m0b;
        m1a.iter()
            .zip(m2a)
            .zip(m1b.iter().zip(m2b))
            .map(|((a1, a2), (b1, b2))| spread(m0, a1 + b1, a2 + b2))
            .sum()
    }
}
