use super::{ContainerError, ContainerLimits, ContainerMath, ScalarT, TVector};
use itertools::zip_eq;
use std::ops::{Deref, Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Upper triangular square matrix, stored as a sequence of shrinking rows.
///
/// Row `i` is a [`TRow`] of length `size - i` with start index `i`,
/// holding the entries `i..size` of that row.  Element access is two-step,
/// `m[i][j]`, and is valid only for `j >= i`.  Reaching below the diagonal
/// is an [`IndexOutOfRange`](ContainerError::IndexOutOfRange) error on the
/// row, not a read of an implicit zero.
///
/// ```
/// # use utmatrix::algebra::*;
/// let mut m = TMatrix::<i32>::new(3).unwrap();
/// m[1][2] = 3;
/// assert_eq!(m.get(1, 2), Ok(&3));
/// assert!(m.get(2, 1).is_err());
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<TVector<T>>",
        into = "Vec<TVector<T>>",
        bound = "T: ScalarT + Serialize + DeserializeOwned"
    )
)]
pub struct TMatrix<T> {
    rows: Vec<TRow<T>>,
}

/// One row of a [`TMatrix`].
///
/// Reads go through `Deref` to the row's [`TVector`].  Writes are limited
/// to single entries, via `row[j] = x`, [`get_mut`](TRow::get_mut),
/// [`set`](TRow::set) or [`iter_mut`](TRow::iter_mut), so a row keeps the
/// length and start index it was allocated with.  Rows can only be
/// created by their matrix, so there is nothing to replace a row with:
///
/// ```compile_fail
/// # use utmatrix::algebra::*;
/// let mut m = TMatrix::<i32>::new(3).unwrap();
/// m[1] = TVector::from_vec(vec![1, 2, 3], 0).unwrap();
/// ```
///
/// ```compile_fail
/// # use utmatrix::algebra::*;
/// let mut m = TMatrix::<i32>::new(3).unwrap();
/// let v = TVector::from_vec(vec![1, 2, 3], 0).unwrap();
/// m.row_mut(1).unwrap().assign(&v);
/// ```
#[derive(Debug, PartialEq)]
pub struct TRow<T>(TVector<T>);

impl<T> TRow<T> {
    /// Checked write access at column `j`
    pub fn get_mut(&mut self, j: isize) -> Result<&mut T, ContainerError> {
        self.0.get_mut(j)
    }

    /// Checked assignment `self[j] = value`
    pub fn set(&mut self, j: isize, value: T) -> Result<(), ContainerError> {
        self.0.set(j, value)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }
}

impl<T> Deref for TRow<T> {
    type Target = TVector<T>;
    fn deref(&self) -> &TVector<T> {
        &self.0
    }
}

impl<T> Index<isize> for TRow<T> {
    type Output = T;

    /// # Panics
    /// Panics if `j` is outside the row, including below the diagonal.
    fn index(&self, j: isize) -> &T {
        &self.0[j]
    }
}

impl<T> IndexMut<isize> for TRow<T> {
    fn index_mut(&mut self, j: isize) -> &mut T {
        &mut self.0[j]
    }
}

impl<T> TMatrix<T>
where
    T: ScalarT,
{
    /// Allocates a `size x size` upper triangular matrix of default values.
    ///
    /// Fails with [`InvalidSize`](ContainerError::InvalidSize) unless
    /// `0 < size <= MAX_MATRIX_SIZE`.
    pub fn new(size: isize) -> Result<Self, ContainerError> {
        Self::new_with_limits(size, &ContainerLimits::default())
    }

    /// As [`new`](Self::new), with a user supplied maximum size.
    /// Fails with [`InvalidLimits`](ContainerError::InvalidLimits) if
    /// `limits` does not pass [`ContainerLimits::validate`].
    pub fn new_with_limits(size: isize, limits: &ContainerLimits) -> Result<Self, ContainerError> {
        limits.validate()?;
        let n = limits.check_matrix_size(size)?;
        log::trace!("allocating {n}x{n} triangular matrix");

        // row lengths n, n-1, ..., 1 and start indices 0, 1, ..., n-1
        let rows = (0..size)
            .map(|i| TVector::new_with_limits(size - i, i, limits).map(TRow))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// Assembles a matrix from its rows.  Row `i` must have length
    /// `rows.len() - i` and start index `i`, otherwise this fails with
    /// [`BadRowShape`](ContainerError::BadRowShape).
    pub fn from_rows(rows: Vec<TVector<T>>) -> Result<Self, ContainerError> {
        let limits = ContainerLimits::default();
        let size = isize::try_from(rows.len()).unwrap_or(isize::MAX);
        let n = limits.check_matrix_size(size)?;

        for (i, row) in rows.iter().enumerate() {
            if row.size() != n - i || row.start_index() != i {
                return Err(ContainerError::BadRowShape {
                    row: i,
                    size: row.size(),
                    start: row.start_index(),
                    expected_size: n - i,
                });
            }
        }
        Ok(Self {
            rows: rows.into_iter().map(TRow).collect(),
        })
    }
}

impl<T> TMatrix<T> {
    /// matrix dimension, i.e. the number of rows
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &TVector<T>> {
        self.rows.iter().map(|row| &row.0)
    }

    fn row_offset(&self, i: isize) -> Result<usize, ContainerError> {
        match usize::try_from(i) {
            Ok(k) if k < self.size() => Ok(k),
            _ => Err(ContainerError::IndexOutOfRange {
                index: i,
                start: 0,
                end: self.size(),
            }),
        }
    }

    /// Checked access to row `i`
    pub fn row(&self, i: isize) -> Result<&TVector<T>, ContainerError> {
        let k = self.row_offset(i)?;
        Ok(&self.rows[k].0)
    }

    /// Checked write access to the entries of row `i`
    pub fn row_mut(&mut self, i: isize) -> Result<&mut TRow<T>, ContainerError> {
        let k = self.row_offset(i)?;
        Ok(&mut self.rows[k])
    }

    /// Checked read of entry `(i, j)`, with `j >= i`
    pub fn get(&self, i: isize, j: isize) -> Result<&T, ContainerError> {
        self.row(i)?.get(j)
    }

    /// Checked write access to entry `(i, j)`, with `j >= i`
    pub fn get_mut(&mut self, i: isize, j: isize) -> Result<&mut T, ContainerError> {
        self.row_mut(i)?.get_mut(j)
    }

    pub fn set(&mut self, i: isize, j: isize, value: T) -> Result<(), ContainerError> {
        self.row_mut(i)?.set(j, value)
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

impl<T> TMatrix<T>
where
    T: ScalarT,
{
    // rows of equal sized matrices share sizes and start indices,
    // and each result row keeps the start index of its left operand
    fn zip_rows(
        &self,
        y: &Self,
        op: impl Fn(&TVector<T>, &TVector<T>) -> Result<TVector<T>, ContainerError>,
    ) -> Result<Self, ContainerError> {
        self.check_same_size(y)?;
        let rows = zip_eq(&self.rows, &y.rows)
            .map(|(a, b)| op(&a.0, &b.0).map(TRow))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }
}

impl<T> Clone for TMatrix<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.iter().map(|row| TRow(row.0.clone())).collect(),
        }
    }

    // keeps row allocations whose sizes already agree
    fn clone_from(&mut self, src: &Self) {
        self.rows.truncate(src.size());
        for (dst, row) in self.rows.iter_mut().zip(&src.rows) {
            dst.0.clone_from(&row.0);
        }
        let n = self.size();
        self.rows
            .extend(src.rows[n..].iter().map(|row| TRow(row.0.clone())));
    }
}

impl<T> PartialEq for TMatrix<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T> ContainerMath for TMatrix<T>
where
    T: ScalarT,
{
    fn add(&self, y: &Self) -> Result<Self, ContainerError> {
        self.zip_rows(y, |a, b| a.add(b))
    }

    fn subtract(&self, y: &Self) -> Result<Self, ContainerError> {
        self.zip_rows(y, |a, b| a.subtract(b))
    }

    fn equals(&self, y: &Self) -> bool {
        self == y
    }

    fn assign(&mut self, src: &Self) -> &mut Self {
        if self.size() != src.size() {
            log::debug!(
                "reallocating matrix from size {} to {}",
                self.size(),
                src.size()
            );
        }
        self.clone_from(src);
        self
    }
}

impl<T> Index<isize> for TMatrix<T> {
    type Output = TRow<T>;

    /// # Panics
    /// Panics if `i` is not a valid row index.
    fn index(&self, i: isize) -> &TRow<T> {
        match self.row_offset(i) {
            Ok(k) => &self.rows[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<isize> for TMatrix<T> {
    fn index_mut(&mut self, i: isize) -> &mut TRow<T> {
        match self.row_mut(i) {
            Ok(row) => row,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: ScalarT> TryFrom<Vec<TVector<T>>> for TMatrix<T> {
    type Error = ContainerError;
    fn try_from(rows: Vec<TVector<T>>) -> Result<Self, ContainerError> {
        TMatrix::from_rows(rows)
    }
}

#[cfg(feature = "serde")]
impl<T> From<TMatrix<T>> for Vec<TVector<T>> {
    fn from(m: TMatrix<T>) -> Self {
        m.rows.into_iter().map(|row| row.0).collect()
    }
}
