// Operator forms of the named container methods.  Operators between
// two containers can fail on a size mismatch, so they produce a Result.

use super::{ContainerError, ContainerMath, ScalarMath, ScalarT, TMatrix, TVector};
use std::ops::{Add, Mul, Sub};

// vector (op) scalar.  Integer overflow behaves as in ScalarMath.

impl<T: ScalarT> Add<T> for &TVector<T> {
    type Output = TVector<T>;
    fn add(self, c: T) -> TVector<T> {
        self.add_scalar(c)
    }
}

impl<T: ScalarT> Sub<T> for &TVector<T> {
    type Output = TVector<T>;
    fn sub(self, c: T) -> TVector<T> {
        self.subtract_scalar(c)
    }
}

impl<T: ScalarT> Mul<T> for &TVector<T> {
    type Output = TVector<T>;
    fn mul(self, c: T) -> TVector<T> {
        self.multiply_scalar(c)
    }
}

// vector (op) vector

impl<T: ScalarT> Add for &TVector<T> {
    type Output = Result<TVector<T>, ContainerError>;
    fn add(self, y: Self) -> Self::Output {
        ContainerMath::add(self, y)
    }
}

impl<T: ScalarT> Sub for &TVector<T> {
    type Output = Result<TVector<T>, ContainerError>;
    fn sub(self, y: Self) -> Self::Output {
        ContainerMath::subtract(self, y)
    }
}

/// Dot product
impl<T: ScalarT> Mul for &TVector<T> {
    type Output = Result<T, ContainerError>;
    fn mul(self, y: Self) -> Self::Output {
        self.dot(y)
    }
}

// matrix (op) matrix

impl<T: ScalarT> Add for &TMatrix<T> {
    type Output = Result<TMatrix<T>, ContainerError>;
    fn add(self, y: Self) -> Self::Output {
        ContainerMath::add(self, y)
    }
}

impl<T: ScalarT> Sub for &TMatrix<T> {
    type Output = Result<TMatrix<T>, ContainerError>;
    fn sub(self, y: Self) -> Self::Output {
        ContainerMath::subtract(self, y)
    }
}
