/// Decides which key a cluster carries as points arrive and clusters merge.
///
/// The engine keeps its key index consistent with whatever is returned here,
/// so a keyer never needs to know about slots.
pub trait Keyer<K> {
    /// Key of a cluster after absorbing a point (or cluster) tagged `incoming`.
    fn add(&self, current: Option<K>, incoming: Option<K>) -> Option<K>;
    /// Key of the surviving cluster after `absorbed` is merged into `absorber`.
    fn merge(&self, absorber: Option<K>, absorbed: Option<K>) -> Option<K>;
}

/// The first key a cluster receives sticks; later keys are dropped.
/// On merge the absorbing cluster's key wins, falling back to the absorbed one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Retain;

impl<K> Keyer<K> for Retain {
    fn add(&self, current: Option<K>, incoming: Option<K>) -> Option<K> {
        current.or(incoming)
    }
    fn merge(&self, absorber: Option<K>, absorbed: Option<K>) -> Option<K> {
        absorber.or(absorbed)
    }
}

/// The most recently added key replaces the current one.
/// Merges behave as [`Retain`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overwrite;

impl<K> Keyer<K> for Overwrite {
    fn add(&self, current: Option<K>, incoming: Option<K>) -> Option<K> {
        incoming.or(current)
    }
    fn merge(&self, absorber: Option<K>, absorbed: Option<K>) -> Option<K> {
        absorber.or(absorbed)
    }
}
