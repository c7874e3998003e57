pub mod point;
pub use point::*;

pub mod space;
pub use space::*;

pub mod scalar;
pub use scalar::*;

pub mod vector;
pub use vector::*;
