//! Cofactor machinery: minors, cofactors, the adjugate and the recursive
//! Laplace determinant.
//!
//! Expansion is O(n!) in the matrix order and only meant for small matrices.
//! Integer-valued inputs give integer-valued determinants. See `math::lu` for
//! the O(n^3) path.

use log::{trace, warn};
use num_traits::Float;

use crate::config::KernelConfig;
use crate::error::Result;
use crate::math::matrix::Matrix;

#[inline]
fn sign<T: Float>(row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 {
        T::one()
    } else {
        -T::one()
    }
}

/// Copy of `m` without row `row` and column `col`. Indices must be in bounds.
fn strip<T: Float>(m: &Matrix<T>, row: usize, col: usize) -> Matrix<T> {
    let (nrows, ncols) = m.shape();
    let mut data = Vec::with_capacity((nrows - 1) * (ncols - 1));
    for (r, values) in m.rows().enumerate() {
        if r == row {
            continue;
        }
        data.extend(
            values
                .iter()
                .enumerate()
                .filter(|&(c, _)| c != col)
                .map(|(_, &v)| v),
        );
    }
    Matrix::from_parts(nrows - 1, ncols - 1, data)
}

pub(crate) fn warn_if_large(n: usize) {
    if n > KernelConfig::LARGE_COFACTOR_ORDER {
        warn!(
            "cofactor expansion on a {}x{} matrix is O(n!); consider DeterminantMethod::Lu",
            n, n
        );
    }
}

/// Determinant of a square matrix by expansion along the first row.
///
/// The 0x0 matrix has determinant 1 (empty product), which makes the
/// cofactor of a 1x1 matrix come out as 1.
pub(crate) fn laplace_determinant<T: Float>(m: &Matrix<T>) -> T {
    let n = m.nrows();
    debug_assert!(m.is_square());
    match n {
        0 => T::one(),
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        _ => {
            trace!("expanding {}x{} determinant along row 0", n, n);
            // every term is summed, so a NaN or inf minor under a zero entry still propagates
            (0..n).fold(T::zero(), |acc, j| {
                acc + sign::<T>(0, j) * m[(0, j)] * laplace_determinant(&strip(m, 0, j))
            })
        }
    }
}

impl<T: Float> Matrix<T> {
    /// Sub-matrix obtained by deleting row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T>> {
        self.check_cell(row, col)?;
        Ok(strip(self, row, col))
    }

    /// `(-1)^(row + col)` times the determinant of `minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        self.check_square()?;
        let minor = self.minor(row, col)?;
        Ok(sign::<T>(row, col) * laplace_determinant(&minor))
    }

    pub fn cofactor_matrix(&self) -> Result<Matrix<T>> {
        self.check_square()?;
        let n = self.nrows();
        warn_if_large(n);
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(sign::<T>(i, j) * laplace_determinant(&strip(self, i, j)));
            }
        }
        Ok(Matrix::from_parts(n, n, data))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        Ok(self.cofactor_matrix()?.transpose())
    }
}
