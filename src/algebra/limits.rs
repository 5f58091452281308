use super::ContainerError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of elements allowed in a [`TVector`](crate::algebra::TVector)
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest dimension allowed for a [`TMatrix`](crate::algebra::TMatrix)
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Upper bounds on container sizes, enforced at construction.
///
/// Limits are checked by [`validate`](ContainerLimits::validate) whenever
/// they are built, deserialized or passed to a `new_with_limits`
/// constructor, so limits written as a struct literal are checked too.
///
/// Build a custom set of limits with [`ContainerLimitsBuilder`]:
/// ```
/// # use utmatrix::algebra::*;
/// let limits = ContainerLimitsBuilder::default()
///     .max_matrix_size(16)
///     .build()
///     .unwrap();
/// assert!(TMatrix::<i32>::new_with_limits(17, &limits).is_err());
/// ```

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate", error = "ContainerError"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLimits"))]
pub struct ContainerLimits {
    ///maximum number of vector elements
    #[builder(default = "MAX_VECTOR_SIZE")]
    pub max_vector_size: usize,

    ///maximum matrix dimension
    #[builder(default = "MAX_MATRIX_SIZE")]
    pub max_matrix_size: usize,
}

impl Default for ContainerLimits {
    fn default() -> ContainerLimits {
        ContainerLimits {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

impl ContainerLimitsBuilder {
    fn validate(&self) -> Result<(), ContainerError> {
        validate_limits(
            self.max_vector_size.unwrap_or(MAX_VECTOR_SIZE),
            self.max_matrix_size.unwrap_or(MAX_MATRIX_SIZE),
        )
    }
}

fn validate_limits(max_vector_size: usize, max_matrix_size: usize) -> Result<(), ContainerError> {
    if max_vector_size == 0 {
        return Err(ContainerError::InvalidLimits("max_vector_size"));
    }
    if max_matrix_size == 0 {
        return Err(ContainerError::InvalidLimits("max_matrix_size"));
    }
    // row 0 of a matrix is a full length vector
    if max_matrix_size > max_vector_size {
        return Err(ContainerError::InvalidLimits(
            "max_matrix_size exceeds max_vector_size",
        ));
    }
    Ok(())
}

// derive_builder requires a conversion from its own uninitialized
// field error, which can't occur since every field has a default
impl From<derive_builder::UninitializedFieldError> for ContainerError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        ContainerError::InvalidLimits(e.field_name())
    }
}

impl ContainerLimits {
    /// Checks that both maxima are positive and that
    /// `max_matrix_size <= max_vector_size`.
    pub fn validate(&self) -> Result<(), ContainerError> {
        validate_limits(self.max_vector_size, self.max_matrix_size)
    }

    /// Checks `0 < size <= max_vector_size`.
    pub fn check_vector_size(&self, size: isize) -> Result<usize, ContainerError> {
        check_size(size, self.max_vector_size)
    }

    /// Checks `0 < size <= max_matrix_size`.
    pub fn check_matrix_size(&self, size: isize) -> Result<usize, ContainerError> {
        check_size(size, self.max_matrix_size)
    }
}

// deserialization fills in missing fields with defaults, then validates

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default)]
struct RawLimits {
    max_vector_size: usize,
    max_matrix_size: usize,
}

#[cfg(feature = "serde")]
impl Default for RawLimits {
    fn default() -> Self {
        RawLimits {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawLimits> for ContainerLimits {
    type Error = ContainerError;
    fn try_from(raw: RawLimits) -> Result<Self, ContainerError> {
        let limits = ContainerLimits {
            max_vector_size: raw.max_vector_size,
            max_matrix_size: raw.max_matrix_size,
        };
        limits.validate()?;
        Ok(limits)
    }
}

fn check_size(size: isize, max: usize) -> Result<usize, ContainerError> {
    match usize::try_from(size) {
        Ok(n) if n > 0 && n <= max => Ok(n),
        _ => Err(ContainerError::InvalidSize { size, max }),
    }
}

// Start indices are unbounded above, but must be non-negative.
pub(crate) fn check_start_index(start_index: isize) -> Result<usize, ContainerError> {
    usize::try_from(start_index).map_err(|_| ContainerError::InvalidStartIndex(start_index))
}

// -------------
// testing

#[test]
fn test_default_limits() {
    let limits = ContainerLimits::default();
    assert_eq!(limits.max_vector_size, MAX_VECTOR_SIZE);
    assert_eq!(limits.max_matrix_size, MAX_MATRIX_SIZE);
    assert_eq!(ContainerLimitsBuilder::default().build(), Ok(limits));
}

#[test]
fn test_check_size() {
    let limits = ContainerLimitsBuilder::default()
        .max_vector_size(10)
        .max_matrix_size(4)
        .build()
        .unwrap();

    assert_eq!(limits.check_vector_size(1), Ok(1));
    assert_eq!(limits.check_vector_size(10), Ok(10));
    assert!(limits.check_vector_size(11).is_err());
    assert!(limits.check_vector_size(0).is_err());
    assert_eq!(
        limits.check_vector_size(-5),
        Err(ContainerError::InvalidSize { size: -5, max: 10 })
    );

    assert_eq!(limits.check_matrix_size(4), Ok(4));
    assert!(limits.check_matrix_size(5).is_err());
}

#[test]
fn test_check_start_index() {
    assert_eq!(check_start_index(0), Ok(0));
    assert_eq!(check_start_index(7), Ok(7));
    assert_eq!(
        check_start_index(-2),
        Err(ContainerError::InvalidStartIndex(-2))
    );
}

#[test]
fn test_bad_limits_rejected() {
    let result = ContainerLimitsBuilder::default().max_vector_size(0).build();
    assert_eq!(
        result,
        Err(ContainerError::InvalidLimits("max_vector_size"))
    );

    let result = ContainerLimitsBuilder::default()
        .max_vector_size(8)
        .max_matrix_size(9)
        .build();
    assert!(matches!(result, Err(ContainerError::InvalidLimits(_))));
}

#[test]
fn test_literal_limits_validated() {
    let limits = ContainerLimits {
        max_vector_size: 2,
        max_matrix_size: 4,
    };
    assert!(matches!(
        limits.validate(),
        Err(ContainerError::InvalidLimits(_))
    ));
    assert!(ContainerLimits::default().validate().is_ok());
}
