//! Matrices built from dimensions alone.

use num_traits::{One, Zero};

use crate::math::Matrix;

/// `n x n` identity matrix.
pub fn identity_matrix<T>(n: usize) -> Matrix<T>
where
    T: Clone + Zero + One,
{
    Matrix::identity(n)
}

pub fn zeros_matrix<T>(rows: usize, cols: usize) -> Matrix<T>
where
    T: Clone + Zero,
{
    Matrix::zeros(rows, cols)
}

pub fn ones_matrix<T>(rows: usize, cols: usize) -> Matrix<T>
where
    T: Clone + One,
{
    Matrix::ones(rows, cols)
}
