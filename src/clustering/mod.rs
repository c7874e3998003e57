pub mod cluster;
pub use cluster::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod keyer;
pub use keyer::*;

pub mod matrix;
pub use matrix::*;

pub mod pair;
pub use pair::*;

pub mod set;
pub use set::*;

pub mod summary;
pub use summary::*;

pub mod tests;
pub use tests::*;
