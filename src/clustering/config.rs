use serde::Deserialize;
use serde::Serialize;

/// What to do with a new point once every slot is live.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Always absorb into the cluster whose variance grows least.
    #[default]
    Grow,
    /// Merge the cheapest pair instead, and give the point the freed slot,
    /// whenever that merge costs strictly less than the cheapest absorption.
    Merge,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grow => write!(f, "grow"),
            Self::Merge => write!(f, "merge"),
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grow" => Ok(Self::Grow),
            "merge" => Ok(Self::Merge),
            _ => Err(format!("unknown policy: {}", s)),
        }
    }
}

/// Construction parameters for a [`ClusterSet`](super::ClusterSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub capacity: usize,
    pub policy: Policy,
}

impl Config {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }
    pub fn policy(self, policy: Policy) -> Self {
        Self { policy, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: crate::DEFAULT_CAPACITY,
            policy: crate::DEFAULT_POLICY,
        }
    }
}
