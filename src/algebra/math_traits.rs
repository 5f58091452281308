use super::{ContainerError, ScalarT};

// All container arithmetic goes through these core traits,
// implemented generically for elements of type ScalarT.

/// Elementwise operations between a container and a single
/// value of [`ScalarT`](crate::algebra::ScalarT)
///
/// These never return an error.
///
/// # Panics
/// With integer element types, a result outside the range of the type
/// panics in debug builds and wraps in release builds, exactly as the
/// primitive `+`, `-` and `*` do.

pub trait ScalarMath: Sized {
    type T: ScalarT;

    /// Elementwise translation.  Produces `self[i] + c`
    fn add_scalar(&self, c: Self::T) -> Self;

    /// Elementwise translation.  Produces `self[i] - c`
    fn subtract_scalar(&self, c: Self::T) -> Self;

    /// Elementwise scaling.  Produces `self[i] * c`
    fn multiply_scalar(&self, c: Self::T) -> Self;
}

/// Elementwise operations between two containers of the same shape.
///
/// Every operation checks sizes before computing anything and
/// returns [`SizeMismatch`](ContainerError::SizeMismatch) otherwise.

pub trait ContainerMath: Sized {
    /// Elementwise sum `self + y`
    fn add(&self, y: &Self) -> Result<Self, ContainerError>;

    /// Elementwise difference `self - y`
    fn subtract(&self, y: &Self) -> Result<Self, ContainerError>;

    /// Value equality.  Same as `==`
    fn equals(&self, y: &Self) -> bool;

    /// Copy the size and values of `src` into `self`
    fn assign(&mut self, src: &Self) -> &mut Self;
}
