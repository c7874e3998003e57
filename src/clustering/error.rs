/// Errors that can occur during clustering operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A cluster was asked to merge with, or copy, itself.
    InvalidOperation(&'static str),
    /// No live cluster holds the requested key or slot.
    NotFound,
    /// A merge was requested with fewer than two live clusters.
    NoPairsAvailable,
    /// Point mass was negative, NaN, or infinite.
    InvalidMass(f64),
    /// The key is already held by another live cluster.
    DuplicateKey,
    /// A cluster set must have at least one slot.
    InvalidCapacity,
    /// Point or moments have the wrong number of coordinates for the space.
    InvalidPoint { expected: usize, found: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperation(s) => write!(f, "invalid operation: {}", s),
            Self::NotFound => write!(f, "cluster not found"),
            Self::NoPairsAvailable => write!(f, "fewer than two live clusters to merge"),
            Self::InvalidMass(m) => write!(f, "invalid point mass: {}", m),
            Self::DuplicateKey => write!(f, "key already assigned to a live cluster"),
            Self::InvalidCapacity => write!(f, "capacity must be positive"),
            Self::InvalidPoint { expected, found } => {
                write!(f, "expected {} coordinates, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
