use crate::algebra::*;

fn test_matrix_3x3(entries: &[(isize, isize, i32)]) -> TMatrix<i32> {
    let mut m = TMatrix::new(3).unwrap();
    for &(i, j, x) in entries {
        m.set(i, j, x).unwrap();
    }
    m
}

#[test]
fn test_new() {
    assert!(TMatrix::<i32>::new(5).is_ok());
    assert!(TMatrix::<f64>::new(1).is_ok());
}

#[test]
fn test_new_bad_size() {
    let too_large = MAX_MATRIX_SIZE as isize + 1;
    assert_eq!(
        TMatrix::<i32>::new(too_large),
        Err(ContainerError::InvalidSize {
            size: too_large,
            max: MAX_MATRIX_SIZE
        })
    );
    assert!(TMatrix::<i32>::new(-5).is_err());
    assert!(TMatrix::<i32>::new(0).is_err());
}

#[test]
fn test_row_shapes() {
    let m = TMatrix::<i32>::new(5).unwrap();
    assert_eq!(m.size(), 5);
    for (i, row) in m.rows().enumerate() {
        assert_eq!(row.size(), 5 - i);
        assert_eq!(row.start_index(), i);
        assert_eq!(row.end_index(), 5);
        assert!(row.iter().all(|&x| x == 0));
    }
}

#[test]
fn test_new_with_limits() {
    let limits = ContainerLimitsBuilder::default()
        .max_matrix_size(4)
        .build()
        .unwrap();
    assert!(TMatrix::<i32>::new_with_limits(4, &limits).is_ok());
    assert!(TMatrix::<i32>::new_with_limits(5, &limits).is_err());
}

#[test]
fn test_set_and_get() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    m[1][2] = 3;
    assert_eq!(m[1][2], 3);
    assert_eq!(m.get(1, 2), Ok(&3));

    m.set(4, 4, -1).unwrap();
    *m.get_mut(0, 4).unwrap() = 8;
    assert_eq!(m.row(4).unwrap().as_slice(), &[-1]);
    assert_eq!(m.row(0).unwrap().as_slice(), &[0, 0, 0, 0, 8]);
}

#[test]
fn test_bad_index() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    assert!(matches!(
        m.set(1, -2, 3),
        Err(ContainerError::IndexOutOfRange { index: -2, .. })
    ));
    assert!(m.set(1, 50, 3).is_err());
    assert!(m.set(5, 5, 3).is_err());
    assert!(m.set(-1, 0, 3).is_err());
    assert!(m.row(5).is_err());
    assert_eq!(m, TMatrix::new(5).unwrap());
}

#[test]
fn test_below_diagonal_is_out_of_range() {
    let m = TMatrix::<i32>::new(4).unwrap();
    assert_eq!(
        m.get(2, 1),
        Err(ContainerError::IndexOutOfRange {
            index: 1,
            start: 2,
            end: 4
        })
    );
    assert!(m.get(3, 0).is_err());
    assert!(m.get(3, 3).is_ok());
}

#[test]
#[should_panic]
fn test_index_negative_panics() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    m[1][-2] = 3;
}

#[test]
#[should_panic]
fn test_index_too_large_panics() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    m[1][50] = 3;
}

#[test]
#[should_panic]
fn test_index_below_diagonal_panics() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    m[2][1] = 3;
}

#[test]
fn test_from_rows() {
    let rows = vec![
        TVector::from_vec(vec![1, 2, 3], 0).unwrap(),
        TVector::from_vec(vec![4, 5], 1).unwrap(),
        TVector::from_vec(vec![6], 2).unwrap(),
    ];
    let m = TMatrix::from_rows(rows).unwrap();
    let expected = test_matrix_3x3(&[
        (0, 0, 1),
        (0, 1, 2),
        (0, 2, 3),
        (1, 1, 4),
        (1, 2, 5),
        (2, 2, 6),
    ]);
    assert_eq!(m, expected);
}

#[test]
fn test_from_rows_bad_shape() {
    // wrong row length
    let rows = vec![
        TVector::from_vec(vec![1, 2], 0).unwrap(),
        TVector::from_vec(vec![4, 5], 1).unwrap(),
    ];
    assert_eq!(
        TMatrix::from_rows(rows),
        Err(ContainerError::BadRowShape {
            row: 1,
            size: 2,
            start: 1,
            expected_size: 1
        })
    );

    // wrong start index
    let rows = vec![
        TVector::from_vec(vec![1, 2], 0).unwrap(),
        TVector::from_vec(vec![3], 0).unwrap(),
    ];
    assert_eq!(
        TMatrix::from_rows(rows),
        Err(ContainerError::BadRowShape {
            row: 1,
            size: 1,
            start: 0,
            expected_size: 1
        })
    );

    assert!(TMatrix::<i32>::from_rows(vec![]).is_err());
}

#[test]
fn test_clone() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    let mut expected = TMatrix::<i32>::new(5).unwrap();
    m[1][2] = 3;
    expected[1][2] = 3;
    let m1 = m.clone();
    assert_eq!(expected, m1);
}

#[test]
fn test_clone_has_own_memory() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    m[1][2] = 3;
    let mut m1 = m.clone();
    m1[1][2] = 5;
    assert_ne!(m[1][2], m1[1][2]);
    assert_ne!(m, m1);
}

#[test]
#[allow(clippy::self_assignment)]
fn test_assign_to_itself() {
    let mut m = TMatrix::<i32>::new(5).unwrap();
    let mut expected = TMatrix::<i32>::new(5).unwrap();
    m[2][3] = 1;
    expected[2][3] = 1;

    m = m;
    assert_eq!(m, expected);

    let same = m.clone();
    m.assign(&same);
    assert_eq!(m, expected);
}

#[test]
fn test_assign_equal_size() {
    let mut m1 = TMatrix::<i32>::new(5).unwrap();
    let mut m2 = TMatrix::<i32>::new(5).unwrap();
    m1[1][1] = 5;
    m2.assign(&m1);
    assert_eq!(m2, m1);
}

#[test]
fn test_assign_changes_size() {
    let mut m1 = TMatrix::<i32>::new(5).unwrap();
    let mut m2 = TMatrix::<i32>::new(10).unwrap();
    let mut expected = TMatrix::<i32>::new(5).unwrap();
    m1[1][1] = 5;
    expected[1][1] = 5;

    m2.assign(&m1);
    assert_eq!(m2.size(), 5);
    assert_eq!(m2, expected);
    for (i, row) in m2.rows().enumerate() {
        assert_eq!(row.size(), 5 - i);
        assert_eq!(row.start_index(), i);
    }

    // and back up again
    let big = TMatrix::<i32>::new(10).unwrap();
    m2.assign(&big);
    assert_eq!(m2, big);
    assert_eq!(m2.row(9).unwrap().start_index(), 9);
}

#[test]
fn test_equality() {
    let mut m1 = TMatrix::<i32>::new(5).unwrap();
    let mut m2 = TMatrix::<i32>::new(5).unwrap();
    m1[1][1] = 5;
    m2[1][1] = 5;
    assert!(m1 == m2);
    assert!(m1.equals(&m2));
    assert!(m1 == m1);

    let mut m3 = TMatrix::<i32>::new(10).unwrap();
    m3[1][1] = 5;
    assert!(!(m1 == m3));
    assert!(m1 != m3);
}

#[test]
fn test_add() {
    let m1 = test_matrix_3x3(&[(0, 0, 3), (0, 2, 2), (1, 1, 5), (1, 2, -3), (2, 2, -10)]);
    let m2 = test_matrix_3x3(&[(0, 1, 3), (0, 2, 2), (1, 1, -2), (1, 2, 3), (2, 2, 1)]);
    let expected = test_matrix_3x3(&[(0, 0, 3), (0, 1, 3), (0, 2, 4), (1, 1, 3), (2, 2, -9)]);

    assert_eq!(&m1 + &m2, Ok(expected.clone()));
    assert_eq!(m2.add(&m1), Ok(expected));
}

#[test]
fn test_add_size_mismatch() {
    let mut m1 = TMatrix::<i32>::new(3).unwrap();
    let mut m2 = TMatrix::<i32>::new(100).unwrap();
    m1[0][0] = 3;
    m2[1][1] = 4;
    assert_eq!(
        &m1 + &m2,
        Err(ContainerError::SizeMismatch {
            left: 3,
            right: 100
        })
    );
}

#[test]
fn test_subtract() {
    let mut m1 = TMatrix::<i32>::new(2).unwrap();
    m1[0][0] = 1;
    m1[0][1] = -2;
    m1[1][1] = 2;
    let mut m2 = TMatrix::<i32>::new(2).unwrap();
    m2[0][0] = 5;
    m2[0][1] = -2;
    m2[1][1] = 2;
    let mut expected = TMatrix::<i32>::new(2).unwrap();
    expected[0][0] = -4;

    assert_eq!(&m1 - &m2, Ok(expected));
}

#[test]
fn test_subtract_size_mismatch() {
    let m1 = TMatrix::<i32>::new(10).unwrap();
    let m2 = TMatrix::<i32>::new(3).unwrap();
    assert!((&m1 - &m2).is_err());
    assert!(m1.subtract(&m2).is_err());
}

#[test]
fn test_add_preserves_shape() {
    let m1 = TMatrix::<f64>::new(4).unwrap();
    let m2 = TMatrix::<f64>::new(4).unwrap();
    let sum = (&m1 + &m2).unwrap();
    for (i, row) in sum.rows().enumerate() {
        assert_eq!(row.size(), 4 - i);
        assert_eq!(row.start_index(), i);
    }
}

#[test]
fn test_row_writes_keep_shape() {
    let mut m1 = TMatrix::<i32>::new(3).unwrap();
    let mut m2 = TMatrix::<i32>::new(3).unwrap();

    // entry writes through every mutable path
    m1[1][1] = 1;
    m1.row_mut(1).unwrap()[2] = 2;
    m1.row_mut(2).unwrap().set(2, 3).unwrap();
    m2.row_mut(0).unwrap().iter_mut().for_each(|x| *x = 4);

    // below the diagonal is unreachable from the row as well
    let row = m1.row_mut(1).unwrap();
    assert_eq!(
        row.set(0, 9),
        Err(ContainerError::IndexOutOfRange {
            index: 0,
            start: 1,
            end: 3
        })
    );
    assert!(row.get_mut(0).is_err());

    for m in [&m1, &m2, &(&m1 + &m2).unwrap(), &(&m1 - &m2).unwrap()] {
        for (i, row) in m.rows().enumerate() {
            assert_eq!(row.size(), 3 - i);
            assert_eq!(row.start_index(), i);
        }
        assert!(m.get(1, 0).is_err());
        assert!(m.get(2, 1).is_err());
    }
    let sum = (&m1 + &m2).unwrap();
    assert_eq!(sum.row(0).unwrap().as_slice(), &[4, 4, 4]);
    assert_eq!(sum.row(1).unwrap().as_slice(), &[1, 2]);
    assert_eq!(sum.row(2).unwrap().as_slice(), &[3]);
}

#[test]
fn test_row_reads_deref_to_vector() {
    let mut m = TMatrix::<i32>::new(4).unwrap();
    m[2][3] = 7;
    assert_eq!(m[2].size(), 2);
    assert_eq!(m[2].start_index(), 2);
    assert_eq!(m[2].get(3), Ok(&7));
    assert_eq!(&*m[2], m.row(2).unwrap());
}

#[test]
fn test_new_with_unchecked_limits() {
    let limits = ContainerLimits {
        max_vector_size: 2,
        max_matrix_size: 4,
    };
    assert!(matches!(
        TMatrix::<i32>::new_with_limits(4, &limits),
        Err(ContainerError::InvalidLimits(_))
    ));
}
