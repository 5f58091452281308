use num_traits::{Num, NumAssign};
use std::fmt::{Debug, Display};

/// Core trait for the element type stored in containers.
///
/// All arithmetic in [`TVector`](crate::algebra::TVector) and
/// [`TMatrix`](crate::algebra::TMatrix) is carried out on values implementing
/// `ScalarT`.  The trait is implemented automatically for every type meeting
/// its bounds, which covers the native integer and floating point types.
/// `T::default()` provides the initial value of freshly allocated elements,
/// i.e. zero for all numeric types.
///
/// `ScalarT` relies on [`num_traits`](num_traits) for its arithmetic bounds.
pub trait ScalarT:
    'static + Copy + Default + Debug + Display + PartialEq + Num + NumAssign
{
}

impl<T> ScalarT for T where
    T: 'static + Copy + Default + Debug + Display + PartialEq + Num + NumAssign
{
}
