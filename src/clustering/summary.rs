use super::cluster::Cluster;
use crate::Mass;
use crate::Variance;
use crate::space::Point;
use serde::Deserialize;
use serde::Serialize;

/// Owned snapshot of one live cluster, detached from the set that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary<P, K> {
    pub slot: usize,
    pub count: usize,
    pub mass: Mass,
    pub variance: Variance,
    /// None for a cluster made only of massless points
    pub centroid: Option<P>,
    pub key: Option<K>,
}

impl<P, K> From<(usize, &Cluster<P, K>)> for Summary<P, K>
where
    P: Point,
    K: Clone,
{
    fn from((slot, cluster): (usize, &Cluster<P, K>)) -> Self {
        Self {
            slot,
            count: cluster.count(),
            mass: cluster.mass(),
            variance: cluster.variance(),
            centroid: cluster.centroid(),
            key: cluster.key().cloned(),
        }
    }
}
