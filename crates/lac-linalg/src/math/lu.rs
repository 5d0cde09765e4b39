//! LU decomposition with partial pivoting.
//!
//! Backs `DeterminantMethod::Lu`: same error contract as the cofactor path,
//! O(n^3) instead of O(n!).

use log::trace;
use num_traits::Float;

use crate::error::{LinAlgError, Result};
use crate::math::matrix::Matrix;

/// `P A = L U` packed into one row-major buffer; `L` has an implicit unit
/// diagonal.
pub(crate) struct LuDecomposition<T> {
    lu: Vec<T>,
    n: usize,
    perm: Vec<usize>,
    /// `+1` or `-1` depending on the parity of the row swaps.
    parity: T,
    /// Set when some pivot fell within the tolerance of zero.
    singular: bool,
}

impl<T: Float> LuDecomposition<T> {
    /// Factor a square matrix. Pivots with `|p| <= tol` mark it singular.
    pub(crate) fn new(m: &Matrix<T>, tol: T) -> Self {
        debug_assert!(m.is_square());
        let n = m.nrows();
        let mut lu = m.as_slice().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut parity = T::one();
        let mut singular = false;

        for k in 0..n {
            let pivot_row = (k..n)
                .max_by(|&a, &b| {
                    lu[a * n + k]
                        .abs()
                        .partial_cmp(&lu[b * n + k].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(k);

            if pivot_row != k {
                for c in 0..n {
                    lu.swap(k * n + c, pivot_row * n + c);
                }
                perm.swap(k, pivot_row);
                parity = -parity;
            }

            let pivot = lu[k * n + k];
            trace!("lu step {}: pivot row {} value {:?}", k, pivot_row, pivot.to_f64());
            if pivot.abs() <= tol {
                singular = true;
                if pivot.is_zero() {
                    continue;
                }
            }

            for r in (k + 1)..n {
                let factor = lu[r * n + k] / pivot;
                lu[r * n + k] = factor;
                for c in (k + 1)..n {
                    lu[r * n + c] = lu[r * n + c] - factor * lu[k * n + c];
                }
            }
        }

        Self {
            lu,
            n,
            perm,
            parity,
            singular,
        }
    }

    pub(crate) fn determinant(&self) -> T {
        (0..self.n).fold(self.parity, |acc, i| acc * self.lu[i * self.n + i])
    }

    /// Solve `A x = b` by forward then back substitution.
    fn solve(&self, b: &[T]) -> Vec<T> {
        let n = self.n;
        let mut x: Vec<T> = self.perm.iter().map(|&p| b[p]).collect();
        for i in 0..n {
            for j in 0..i {
                x[i] = x[i] - self.lu[i * n + j] * x[j];
            }
        }
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                x[i] = x[i] - self.lu[i * n + j] * x[j];
            }
            x[i] = x[i] / self.lu[i * n + i];
        }
        x
    }

    /// Inverse, solving one unit column at a time.
    pub(crate) fn inverse(&self) -> Result<Matrix<T>> {
        if self.singular {
            return Err(LinAlgError::Singular);
        }
        let n = self.n;
        let mut data = vec![T::zero(); n * n];
        let mut unit = vec![T::zero(); n];
        for col in 0..n {
            unit[col] = T::one();
            for (row, value) in self.solve(&unit).into_iter().enumerate() {
                data[row * n + col] = value;
            }
            unit[col] = T::zero();
        }
        Ok(Matrix::from_parts(n, n, data))
    }
}
