use super::limits::check_start_index;
use super::{ContainerError, ContainerLimits, ContainerMath, ScalarMath, ScalarT};
use itertools::zip_eq;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Bounds-checked dynamic vector with a logical start index.
///
/// Valid indices run over `start_index()..end_index()`.  Any access
/// outside that range is an [`IndexOutOfRange`](ContainerError::IndexOutOfRange)
/// error, for reads and writes alike.
///
/// Equality compares sizes and elements only.  Two vectors holding the
/// same values at different start indices are equal.
///
/// ```
/// # use utmatrix::algebra::*;
/// let mut v = TVector::<i32>::new(3, 0).unwrap();
/// v[0] = 1;
/// let w = &v + 5;
/// assert_eq!(w.as_slice(), &[6, 5, 5]);
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawVector<T>",
        into = "RawVector<T>",
        bound = "T: ScalarT + Serialize + DeserializeOwned"
    )
)]
pub struct TVector<T> {
    start_index: usize,
    data: Vec<T>,
}

impl<T> TVector<T>
where
    T: ScalarT,
{
    /// Allocates `size` default valued elements, indexed from `start_index`.
    ///
    /// Fails with [`InvalidSize`](ContainerError::InvalidSize) unless
    /// `0 < size <= MAX_VECTOR_SIZE`, and with
    /// [`InvalidStartIndex`](ContainerError::InvalidStartIndex) if
    /// `start_index < 0`.
    pub fn new(size: isize, start_index: isize) -> Result<Self, ContainerError> {
        Self::new_with_limits(size, start_index, &ContainerLimits::default())
    }

    /// Same as `new(size, 0)`
    pub fn with_size(size: isize) -> Result<Self, ContainerError> {
        Self::new(size, 0)
    }

    /// As [`new`](Self::new), with a user supplied maximum size.
    /// Fails with [`InvalidLimits`](ContainerError::InvalidLimits) if
    /// `limits` does not pass [`ContainerLimits::validate`].
    pub fn new_with_limits(
        size: isize,
        start_index: isize,
        limits: &ContainerLimits,
    ) -> Result<Self, ContainerError> {
        limits.validate()?;
        let size = limits.check_vector_size(size)?;
        let start_index = check_start_index(start_index)?;
        log::trace!("allocating vector of size {size} from index {start_index}");
        Ok(Self {
            start_index,
            data: vec![T::default(); size],
        })
    }

    /// Takes ownership of `data` as the vector contents.  Size checks
    /// are the same as for [`new`](Self::new).
    pub fn from_vec(data: Vec<T>, start_index: isize) -> Result<Self, ContainerError> {
        let limits = ContainerLimits::default();
        // lengths beyond isize::MAX can't come from a real allocation
        let size = isize::try_from(data.len()).unwrap_or(isize::MAX);
        limits.check_vector_size(size)?;
        let start_index = check_start_index(start_index)?;
        Ok(Self { start_index, data })
    }
}

impl<T> TVector<T> {
    /// number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }
    /// lowest valid index
    pub fn start_index(&self) -> usize {
        self.start_index
    }
    /// one past the highest valid index
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    // position in storage of logical index i
    #[inline]
    fn offset(&self, i: isize) -> Result<usize, ContainerError> {
        let (start, end) = (self.start_index, self.end_index());
        match usize::try_from(i) {
            Ok(k) if k >= start && k < end => Ok(k - start),
            _ => Err(ContainerError::IndexOutOfRange {
                index: i,
                start,
                end,
            }),
        }
    }

    /// Checked read access at logical index `i`
    pub fn get(&self, i: isize) -> Result<&T, ContainerError> {
        let k = self.offset(i)?;
        Ok(&self.data[k])
    }

    /// Checked write access at logical index `i`
    pub fn get_mut(&mut self, i: isize) -> Result<&mut T, ContainerError> {
        let k = self.offset(i)?;
        Ok(&mut self.data[k])
    }

    /// Checked assignment `self[i] = value`.  The vector is
    /// unchanged on failure.
    pub fn set(&mut self, i: isize, value: T) -> Result<(), ContainerError> {
        *self.get_mut(i)? = value;
        Ok(())
    }

    fn check_same_size(&self, y: &Self) -> Result<(), ContainerError> {
        if self.size() != y.size() {
            return Err(ContainerError::SizeMismatch {
                left: self.size(),
                right: y.size(),
            });
        }
        Ok(())
    }
}

impl<T> TVector<T>
where
    T: ScalarT,
{
    /// Apply an elementwise operation, producing a new vector
    /// with the same size and start index.
    pub fn mapv(&self, op: impl Fn(T) -> T) -> Self {
        Self {
            start_index: self.start_index,
            data: self.data.iter().map(|&x| op(x)).collect(),
        }
    }

    /// Apply a pairwise operation to equal sized vectors.
    pub fn zip_with(&self, y: &Self, op: impl Fn(T, T) -> T) -> Result<Self, ContainerError> {
        self.check_same_size(y)?;
        let data = zip_eq(&self.data, &y.data).map(|(&a, &b)| op(a, b)).collect();
        Ok(Self {
            start_index: self.start_index,
            data,
        })
    }

    /// Dot product.  Fails if sizes differ.
    ///
    /// # Panics
    /// Integer element types panic on overflow in debug builds, as for
    /// the primitive `+` and `*`.
    pub fn dot(&self, y: &Self) -> Result<T, ContainerError> {
        self.check_same_size(y)?;
        Ok(zip_eq(&self.data, &y.data).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

impl<T> Clone for TVector<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            start_index: self.start_index,
            data: self.data.clone(),
        }
    }

    // reuses the existing allocation when sizes agree
    fn clone_from(&mut self, src: &Self) {
        self.start_index = src.start_index;
        self.data.clone_from(&src.data);
    }
}

// start index is not part of equality
impl<T> PartialEq for TVector<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T> ScalarMath for TVector<T>
where
    T: ScalarT,
{
    type T = T;

    fn add_scalar(&self, c: T) -> Self {
        self.mapv(|x| x + c)
    }

    fn subtract_scalar(&self, c: T) -> Self {
        self.mapv(|x| x - c)
    }

    fn multiply_scalar(&self, c: T) -> Self {
        self.mapv(|x| x * c)
    }
}

impl<T> ContainerMath for TVector<T>
where
    T: ScalarT,
{
    fn add(&self, y: &Self) -> Result<Self, ContainerError> {
        self.zip_with(y, |a, b| a + b)
    }

    fn subtract(&self, y: &Self) -> Result<Self, ContainerError> {
        self.zip_with(y, |a, b| a - b)
    }

    fn equals(&self, y: &Self) -> bool {
        self == y
    }

    fn assign(&mut self, src: &Self) -> &mut Self {
        if self.size() != src.size() {
            log::debug!(
                "reallocating vector from size {} to {}",
                self.size(),
                src.size()
            );
        }
        self.clone_from(src);
        self
    }
}

impl<T> Index<isize> for TVector<T> {
    type Output = T;

    /// # Panics
    /// Panics if `i` is outside `start_index()..end_index()`.
    fn index(&self, i: isize) -> &T {
        match self.get(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<isize> for TVector<T> {
    fn index_mut(&mut self, i: isize) -> &mut T {
        match self.get_mut(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a TVector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ------------------------------------------------
// serialization goes through a plain data mirror so that
// deserialized vectors are validated like constructed ones

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawVector<T> {
    start_index: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: ScalarT> TryFrom<RawVector<T>> for TVector<T> {
    type Error = ContainerError;
    fn try_from(raw: RawVector<T>) -> Result<Self, ContainerError> {
        let start_index = isize::try_from(raw.start_index)
            .map_err(|_| ContainerError::InvalidStartIndex(isize::MAX))?;
        TVector::from_vec(raw.data, start_index)
    }
}

#[cfg(feature = "serde")]
impl<T> From<TVector<T>> for RawVector<T> {
    fn from(v: TVector<T>) -> Self {
        RawVector {
            start_index: v.start_index,
            data: v.data,
        }
    }
}
