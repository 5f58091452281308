use super::{TMatrix, TVector};
use std::fmt;

impl<T> fmt::Display for TVector<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for x in self.iter() {
            write!(f, " {x}")?;
        }
        write!(f, " ]")
    }
}

// Prints the full square layout, with ⋅ below the diagonal:
//
// [ 1 2 3 ]
// [ ⋅ 4 5 ]
// [ ⋅ ⋅ 6 ]
impl<T> fmt::Display for TMatrix<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.size();
        for (i, row) in self.rows().enumerate() {
            write!(f, "[")?;
            for _ in 0..i {
                write!(f, " ⋅")?;
            }
            for x in row.iter() {
                write!(f, " {x}")?;
            }
            write!(f, " ]")?;
            if i + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
