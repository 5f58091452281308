use thiserror::Error;

/// Error type returned by container construction, access and arithmetic.
///
/// A failed operation never modifies its operands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Requested size is non-positive or exceeds the permitted maximum
    #[error("Invalid size {size} (must be in 1..={max})")]
    InvalidSize { size: isize, max: usize },
    /// Requested start index is negative
    #[error("Invalid start index {0} (must be non-negative)")]
    InvalidStartIndex(isize),
    /// Index falls outside the valid range `start..end`
    #[error("Index {index} out of range {start}..{end}")]
    IndexOutOfRange {
        index: isize,
        start: usize,
        end: usize,
    },
    /// Binary operation on containers of different size
    #[error("Size mismatch ({left} vs {right})")]
    SizeMismatch { left: usize, right: usize },
    /// Row handed to a matrix does not have the triangular shape,
    /// i.e. length `size - row` starting at index `row`
    #[error("Row {row} has size {size} from index {start} (expected size {expected_size} from index {row})")]
    BadRowShape {
        row: usize,
        size: usize,
        start: usize,
        expected_size: usize,
    },
    /// Container limits failed validation
    #[error("Bad limits: {0}")]
    InvalidLimits(&'static str),
}
