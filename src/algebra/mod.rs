//! Bounds-checked vector and upper triangular matrix containers.
//!
//! Both containers have value semantics: cloning copies all storage, and
//! equality compares sizes and elements.  Every fallible operation returns a
//! [`ContainerError`] and leaves its operands unmodified on failure.

mod display;
mod error_types;
mod limits;
mod math_traits;
mod matrix;
mod ops;
mod scalars;
mod vector;

pub use error_types::*;
pub use limits::{ContainerLimits, ContainerLimitsBuilder, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use math_traits::*;
pub use matrix::*;
pub use scalars::*;
pub use vector::*;

#[cfg(test)]
mod tests;
