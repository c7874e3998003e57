use super::cluster::Cluster;
use super::config::Config;
use super::config::Policy;
use super::error::Error;
use super::error::Result;
use super::keyer::Keyer;
use super::keyer::Retain;
use super::matrix::Matrix;
use super::pair::Pair;
use super::summary::Summary;
use crate::Mass;
use crate::Variance;
use crate::space::Point;
use crate::space::Space;
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Something entering the set: a weighted point or a prebuilt cluster.
/// Lets both ingestion paths share slot selection.
enum Arrival<'a, P, K> {
    Point(Mass, &'a P),
    Cluster(&'a Cluster<P, K>),
}

impl<'a, P, K> Arrival<'a, P, K>
where
    P: Point,
{
    /// increase in total variance if absorbed by `target`
    fn cost<S>(&self, space: &S, target: &Cluster<P, K>) -> Variance
    where
        S: Space<P = P>,
    {
        match self {
            Self::Point(m, pt) => target.test_add_point(space, *m, pt),
            Self::Cluster(c) => {
                target.test_merge_with(space, c) - target.variance() - c.variance()
            }
        }
    }
    /// occupy an empty slot
    fn place<S>(&self, space: &S, target: &mut Cluster<P, K>)
    where
        S: Space<P = P>,
    {
        debug_assert!(target.is_empty());
        match self {
            Self::Point(m, pt) => target.set_to_point(*m, pt),
            Self::Cluster(c) => target.add_cluster(space, c),
        }
    }
    /// grow a live slot
    fn absorb<S>(&self, space: &S, target: &mut Cluster<P, K>)
    where
        S: Space<P = P>,
    {
        match self {
            Self::Point(m, pt) => target.add_point(space, *m, pt),
            Self::Cluster(c) => target.add_cluster(space, c),
        }
    }
}

/// A fixed number of cluster slots over a stream of weighted points,
/// greedily keeping total variance low.
///
/// Slots are allocated once and reused in place. Every unordered pair of
/// slots has a [`Pair`] in the [`Matrix`], and every mutation of a slot
/// refreshes the `capacity - 1` pairs that touch it, so the cheapest merge
/// is always a single scan away.
///
/// Not internally synchronized. Share behind a `Mutex` if needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSet<S, K, Y = Retain>
where
    S: Space,
{
    config: Config,
    space: S,
    keyer: Y,
    slots: Vec<Cluster<S::P, K>>,
    live: usize,
    index: BTreeMap<K, usize>,
    matrix: Matrix,
}

impl<S, K> ClusterSet<S, K, Retain>
where
    S: Space,
    K: Ord + Clone,
{
    /// An empty set with the default policy and keyer.
    pub fn new(space: S, capacity: usize) -> Result<Self> {
        Self::with_config(space, Config::new(capacity))
    }
    pub fn with_config(space: S, config: Config) -> Result<Self> {
        Self::with_keyer(space, config, Retain)
    }
}

impl<S, K, Y> ClusterSet<S, K, Y>
where
    S: Space,
    K: Ord + Clone,
    Y: Keyer<K>,
{
    pub fn with_keyer(space: S, config: Config, keyer: Y) -> Result<Self> {
        if config.capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        let slots = (0..config.capacity)
            .map(|_| Cluster::new(&space))
            .collect();
        Ok(Self {
            matrix: Matrix::new(config.capacity),
            index: BTreeMap::new(),
            live: 0,
            slots,
            keyer,
            space,
            config,
        })
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn space(&self) -> &S {
        &self.space
    }
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
    /// number of live clusters
    pub fn len(&self) -> usize {
        self.live
    }
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
    pub fn total_mass(&self) -> Mass {
        self.iter_live().map(|(_, c)| c.mass()).sum()
    }
    pub fn total_variance(&self) -> Variance {
        self.iter_live().map(|(_, c)| c.variance()).sum()
    }

    /// the cluster in `slot`, live or not
    pub fn cluster(&self, slot: usize) -> Option<&Cluster<S::P, K>> {
        self.slots.get(slot)
    }
    /// the slot holding `key`
    pub fn slot<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.get(key).copied()
    }
    /// the live cluster holding `key`
    pub fn get<Q>(&self, key: &Q) -> Result<&Cluster<S::P, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.slot(key)
            .map(|slot| &self.slots[slot])
            .ok_or(Error::NotFound)
    }
    /// every indexed key with its slot, in key order
    pub fn keys(&self) -> impl Iterator<Item = (&K, usize)> {
        self.index.iter().map(|(k, slot)| (k, *slot))
    }
    /// live clusters in slot order
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &Cluster<S::P, K>)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
    }
    /// snapshots of every live cluster in slot order
    pub fn results(&self) -> Vec<Summary<S::P, K>> {
        self.iter_live().map(Summary::from).collect()
    }

    /// Add a point of mass `m`, optionally tagged with `key`.
    ///
    /// Fills the lowest empty slot if there is one. Otherwise the point goes
    /// wherever the configured [`Policy`] finds it cheapest. Massless points
    /// carry no statistics and are ignored. Returns the receiving slot.
    pub fn add_point(&mut self, m: Mass, pt: &S::P, key: Option<K>) -> Result<Option<usize>> {
        if !m.is_finite() || m < 0. {
            return Err(Error::InvalidMass(m));
        }
        self.conform(pt)?;
        self.admissible(key.as_ref())?;
        if m == 0. {
            log::trace!("{:<32}", "ignoring massless point");
            return Ok(None);
        }
        self.route(Arrival::Point(m, pt), key).map(Some)
    }

    /// Add an externally built cluster, as though all its points arrived at once.
    /// Its key, if any, goes through the keyer like a point's would.
    pub fn add_cluster(&mut self, mut cluster: Cluster<S::P, K>) -> Result<Option<usize>> {
        if !cluster.mass().is_finite() || cluster.mass() < 0. {
            return Err(Error::InvalidMass(cluster.mass()));
        }
        self.conform(cluster.moment1())?;
        self.conform(cluster.moment2())?;
        self.admissible(cluster.key())?;
        if cluster.is_empty() {
            return Ok(None);
        }
        let key = cluster.take_key();
        self.route(Arrival::Cluster(&cluster), key).map(Some)
    }

    /// Merge the pair of live clusters whose union raises total variance least.
    /// The heavier cluster absorbs the lighter (the lower slot on ties) and the
    /// other slot is emptied. Returns the absorbing slot.
    pub fn merge_cheapest_pair(&mut self) -> Result<usize> {
        self.collapse().map(|(into, _)| into)
    }

    /// Merge the cluster in slot `from` into the cluster in slot `into`.
    pub fn merge(&mut self, into: usize, from: usize) -> Result<()> {
        if into == from {
            return Err(Error::InvalidOperation("cannot merge a cluster with itself"));
        }
        let live = |slot: usize| self.slots.get(slot).is_some_and(|c| !c.is_empty());
        if !live(into) || !live(from) {
            return Err(Error::NotFound);
        }
        self.absorb(into, from);
        Ok(())
    }

    /// Empty the slot holding `key`.
    pub fn remove_by_key<Q>(&mut self, key: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = self.index.remove(key).ok_or(Error::NotFound)?;
        log::debug!("{:<32}{:<8}", "removing cluster", slot);
        self.slots[slot].clear();
        self.live -= 1;
        self.matrix.refresh(slot, &self.space, &self.slots);
        Ok(())
    }

    /// Repeatedly merge the cheapest pair while more than `min_clusters`
    /// remain. With `max_variance`, stop before the merge that would bring
    /// total variance to or above it.
    pub fn reduce(
        &mut self,
        max_variance: Option<Variance>,
        min_clusters: usize,
    ) -> Vec<Summary<S::P, K>> {
        let mut total = self.total_variance();
        while self.live > min_clusters {
            let Some(cost) = self.matrix.cheapest().map(Pair::cost) else {
                break;
            };
            if max_variance.is_some_and(|max| total + cost >= max) {
                break;
            }
            match self.collapse() {
                Ok(_) => total += cost,
                Err(_) => break,
            }
        }
        log::debug!("{:<32}{:<8}{:.6}", "reduced clusters", self.live, total);
        self.results()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(Cluster::clear);
        self.index.clear();
        self.live = 0;
        self.matrix.refresh_all(&self.space, &self.slots);
    }

    /// incoming points must match the space's dimension
    fn conform(&self, pt: &S::P) -> Result<()> {
        match self.space.admits(pt) {
            true => Ok(()),
            false => Err(Error::InvalidPoint {
                expected: self.space.dimensions(),
                found: pt.dimensions(),
            }),
        }
    }

    /// incoming keys must not already belong to a live cluster
    fn admissible(&self, key: Option<&K>) -> Result<()> {
        match key {
            Some(key) if self.index.contains_key(key) => Err(Error::DuplicateKey),
            _ => Ok(()),
        }
    }

    fn vacancy(&self) -> Option<usize> {
        self.slots.iter().position(Cluster::is_empty)
    }

    /// live slot with the least variance increase, lowest slot on ties
    fn nearest(&self, arrival: &Arrival<'_, S::P, K>) -> (usize, Variance) {
        self.iter_live()
            .map(|(slot, c)| (slot, arrival.cost(&self.space, c)))
            .min_by(|(_, c1), (_, c2)| c1.total_cmp(c2))
            .expect("full set has live clusters")
    }

    fn route(&mut self, arrival: Arrival<'_, S::P, K>, key: Option<K>) -> Result<usize> {
        let slot = match self.vacancy() {
            Some(slot) => {
                log::trace!("{:<32}{:<8}", "filling empty slot", slot);
                arrival.place(&self.space, &mut self.slots[slot]);
                self.live += 1;
                slot
            }
            None => {
                let (nearest, growth) = self.nearest(&arrival);
                let cheapest = self.matrix.cheapest().map(Pair::cost);
                match (self.config.policy, cheapest) {
                    (Policy::Merge, Some(cost)) if cost < growth => {
                        let (_, freed) = self.collapse()?;
                        log::trace!("{:<32}{:<8}", "filling merged slot", freed);
                        arrival.place(&self.space, &mut self.slots[freed]);
                        self.live += 1;
                        freed
                    }
                    _ => {
                        log::trace!("{:<32}{:<8}{:.6}", "growing cluster", nearest, growth);
                        arrival.absorb(&self.space, &mut self.slots[nearest]);
                        nearest
                    }
                }
            }
        };
        self.rekey(slot, key);
        self.matrix.refresh(slot, &self.space, &self.slots);
        Ok(slot)
    }

    /// merge the cheapest pair, returning (absorbing slot, emptied slot)
    fn collapse(&mut self) -> Result<(usize, usize)> {
        if self.live < 2 {
            return Err(Error::NoPairsAvailable);
        }
        let (a, b) = self
            .matrix
            .cheapest()
            .map(Pair::slots)
            .ok_or(Error::NoPairsAvailable)?;
        let (into, from) = if self.slots[b].mass() > self.slots[a].mass() {
            (b, a)
        } else {
            (a, b)
        };
        self.absorb(into, from);
        Ok((into, from))
    }

    /// fold slot `from` into slot `into`, empty `from`, merge keys
    fn absorb(&mut self, into: usize, from: usize) {
        debug_assert!(into != from);
        log::debug!(
            "{:<32}{:<8}{:<8}{:.6}",
            "merging clusters",
            into,
            from,
            self.matrix.pair(into, from).cost()
        );
        let (target, source) = both(&mut self.slots, into, from);
        let kept = target.take_key();
        let lost = source.take_key();
        target.add_cluster(&self.space, source);
        source.clear();
        kept.iter().chain(lost.iter()).for_each(|k| {
            self.index.remove(k);
        });
        let key = self.keyer.merge(kept, lost);
        if let Some(ref k) = key {
            self.index.insert(k.clone(), into);
        }
        self.slots[into].set_key(key);
        self.live -= 1;
        self.matrix.refresh(into, &self.space, &self.slots);
        self.matrix.refresh(from, &self.space, &self.slots);
    }

    /// let the keyer combine the slot's key with an incoming one
    fn rekey(&mut self, slot: usize, incoming: Option<K>) {
        let current = self.slots[slot].take_key();
        if let Some(ref k) = current {
            self.index.remove(k);
        }
        let key = self.keyer.add(current, incoming);
        if let Some(ref k) = key {
            self.index.insert(k.clone(), slot);
        }
        self.slots[slot].set_key(key);
    }
}

/// two distinct elements of a slice, mutably
fn both<T>(slice: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert!(a != b);
    if a < b {
        let (lo, hi) = slice.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = slice.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
