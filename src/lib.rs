//! __utmatrix__ provides two generic numeric containers:
//!
//! * [`TVector`](algebra::TVector), a bounds-checked dynamic vector whose
//!   valid indices start at a configurable offset, and
//! * [`TMatrix`](algebra::TMatrix), an upper triangular square matrix stored
//!   as a sequence of shrinking row vectors.
//!
//! Both support scalar and elementwise arithmetic, deep copy, assignment and
//! value equality.  Construction, indexing and arithmetic report failures
//! through [`ContainerError`](algebra::ContainerError).
//!
//! ```
//! use utmatrix::algebra::*;
//!
//! let mut m1 = TMatrix::<i32>::new(2).unwrap();
//! m1[0][0] = 1;
//! m1[0][1] = -2;
//! m1[1][1] = 2;
//!
//! let mut m2 = TMatrix::<i32>::new(2).unwrap();
//! m2[0][0] = 5;
//! m2[0][1] = -2;
//! m2[1][1] = 2;
//!
//! let d = (&m1 - &m2).unwrap();
//! assert_eq!(d[0][0], -4);
//! assert_eq!(d[0][1], 0);
//! assert_eq!(d[1][1], 0);
//! ```
//!
//! # Features
//!
//! * `serde` (default): (de)serialization of containers and
//!   [`ContainerLimits`](algebra::ContainerLimits).  Deserialized containers
//!   are validated in the same way as constructed ones.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
