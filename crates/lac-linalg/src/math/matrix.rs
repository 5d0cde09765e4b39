use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use log::debug;
use num_traits::{Float, NumCast, One, Zero};

use crate::config::{DeterminantMethod, KernelConfig};
use crate::error::{LinAlgError, Result};
use crate::math::cofactor::{laplace_determinant, warn_if_large};
use crate::math::lu::LuDecomposition;
use crate::math::vector::Vector;

/// Rectangular grid of scalars stored row-major.
///
/// The shape is fixed at construction. `set_row` and `set_cell` are the only
/// operations that modify a matrix; everything else returns a new value.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Right-hand operand of [`Matrix::multiply`].
#[derive(Clone, Copy, Debug)]
pub enum Multiplicand<'a, T = f64> {
    Scalar(T),
    Vector(&'a Vector<T>),
    Matrix(&'a Matrix<T>),
}

/// Result of [`Matrix::multiply`]: a vector for matrix-vector products,
/// a matrix otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum Product<T = f64> {
    Vector(Vector<T>),
    Matrix(Matrix<T>),
}

impl<T> Product<T> {
    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Product::Matrix(m) => Some(m),
            Product::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Vector<T>> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Matrix(_) => None,
        }
    }
}

impl<'a, T> From<&'a Vector<T>> for Multiplicand<'a, T> {
    fn from(value: &'a Vector<T>) -> Self {
        Multiplicand::Vector(value)
    }
}

impl<'a, T> From<&'a Matrix<T>> for Multiplicand<'a, T> {
    fn from(value: &'a Matrix<T>) -> Self {
        Multiplicand::Matrix(value)
    }
}

impl<T> Matrix<T> {
    /// Build from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = rows.checked_mul(cols).ok_or_else(|| {
            LinAlgError::dims(
                format!("shape ({}, {}) within usize", rows, cols),
                format!("{} elements", data.len()),
            )
        })?;
        if data.len() != len {
            return Err(LinAlgError::dims(
                format!("{} elements for shape ({}, {})", len, rows, cols),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from a list of rows. All rows must have the same length.
    ///
    /// An empty list gives a 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(LinAlgError::InvalidShape {
                    row: idx,
                    expected: ncols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row_slice(r))
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinAlgError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(LinAlgError::IndexOutOfRange {
                index: col,
                len: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(LinAlgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T>
    where
        T: Copy,
    {
        self.check_cell(row, col)?;
        Ok(self[(row, col)])
    }

    pub fn get_row(&self, row: usize) -> Result<Vector<T>>
    where
        T: Clone,
    {
        self.check_row(row)?;
        Ok(Vector::from_vec(self.row_slice(row).to_vec()))
    }

    pub fn get_column(&self, col: usize) -> Result<Vector<T>>
    where
        T: Clone,
    {
        self.check_col(col)?;
        Ok((0..self.rows).map(|r| self[(r, col)].clone()).collect())
    }

    /// Replace a whole row. The new row must have `ncols()` components.
    pub fn set_row(&mut self, row: usize, values: &Vector<T>) -> Result<()>
    where
        T: Clone,
    {
        self.check_row(row)?;
        if values.len() != self.cols {
            return Err(LinAlgError::dims(
                format!("row of length {}", self.cols),
                format!("length {}", values.len()),
            ));
        }
        let start = self.offset(row, 0);
        self.data[start..start + self.cols].clone_from_slice(values.as_slice());
        Ok(())
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_cell(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self[(r, c)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::from_parts(rows, cols, vec![T::zero(); rows * cols])
    }
}

impl<T> Matrix<T>
where
    T: Clone + One,
{
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix::from_parts(rows, cols, vec![T::one(); rows * cols])
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T: Float> Matrix<T> {
    fn check_same_shape(&self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinAlgError::dims(
                format!("shape {:?}", self.shape()),
                format!("shape {:?}", other.shape()),
            ));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(self.rows, self.cols, data))
    }

    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn scale(&self, k: T) -> Matrix<T> {
        self.mapv(|&x| x * k)
    }

    pub fn divide(&self, k: T) -> Result<Matrix<T>> {
        if k.is_zero() {
            return Err(LinAlgError::DivisionByZero);
        }
        Ok(self.mapv(|&x| x / k))
    }

    /// Matrix-vector product. Requires `ncols() == v.len()`.
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if self.cols != v.len() {
            return Err(LinAlgError::dims(
                format!("vector of length {}", self.cols),
                format!("length {}", v.len()),
            ));
        }
        Ok(self
            .rows()
            .map(|row| {
                row.iter()
                    .zip(v.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    /// Matrix product. Requires `self.ncols() == other.nrows()`.
    pub fn mul_matrix(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(LinAlgError::dims(
                format!("matrix with {} rows", self.cols),
                format!("{} rows", other.rows),
            ));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            let row = self.row_slice(i);
            for j in 0..other.cols {
                let cell = row
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (k, &a)| acc + a * other[(k, j)]);
                data.push(cell);
            }
        }
        Ok(Matrix::from_parts(self.rows, other.cols, data))
    }

    /// Multiply by a scalar, a vector or a matrix.
    ///
    /// The operand kind is fixed by the [`Multiplicand`] variant, so the
    /// only runtime failure is a `DimensionMismatch`.
    pub fn multiply<'a, M>(&self, rhs: M) -> Result<Product<T>>
    where
        M: Into<Multiplicand<'a, T>>,
        T: 'a,
    {
        match rhs.into() {
            Multiplicand::Scalar(k) => Ok(Product::Matrix(self.scale(k))),
            Multiplicand::Vector(v) => self.mul_vector(v).map(Product::Vector),
            Multiplicand::Matrix(m) => self.mul_matrix(m).map(Product::Matrix),
        }
    }

    /// Exact elementwise equality; matrices of different shape are unequal.
    pub fn equals(&self, other: &Matrix<T>) -> bool {
        self == other
    }

    pub fn not_equals(&self, other: &Matrix<T>) -> bool {
        !self.equals(other)
    }

    pub fn approx_eq(&self, other: &Matrix<T>, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }

    pub fn trace(&self) -> Result<T> {
        self.check_square()?;
        Ok((0..self.rows).fold(T::zero(), |acc, i| acc + self[(i, i)]))
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.equals(&self.transpose())
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| {
                (0..self.cols).all(|j| i == j || self[(i, j)].is_zero())
            })
    }

    /// Determinant by Laplace expansion along the first row.
    pub fn determinant(&self) -> Result<T> {
        self.check_square()?;
        warn_if_large(self.rows);
        Ok(laplace_determinant(self))
    }

    pub fn determinant_with(&self, config: &KernelConfig) -> Result<T> {
        self.check_square()?;
        config.validate()?;
        debug!(
            "determinant of {}x{} matrix via {:?}",
            self.rows, self.cols, config.method
        );
        match config.method {
            DeterminantMethod::Cofactor => self.determinant(),
            DeterminantMethod::Lu => {
                Ok(LuDecomposition::new(self, tolerance_as(config)?).determinant())
            }
        }
    }

    /// Inverse as `adjugate / determinant`.
    ///
    /// Fails with `Singular` when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(LinAlgError::Singular);
        }
        Ok(self.adjugate()?.mapv(|&x| x / det))
    }

    pub fn inverse_with(&self, config: &KernelConfig) -> Result<Matrix<T>> {
        self.check_square()?;
        config.validate()?;
        debug!(
            "inverse of {}x{} matrix via {:?}",
            self.rows, self.cols, config.method
        );
        match config.method {
            DeterminantMethod::Cofactor => self.inverse(),
            DeterminantMethod::Lu => LuDecomposition::new(self, tolerance_as(config)?).inverse(),
        }
    }
}

fn tolerance_as<T: Float>(config: &KernelConfig) -> Result<T> {
    <T as NumCast>::from(config.tolerance).ok_or_else(|| {
        LinAlgError::InvalidArgument(format!(
            "tolerance {} is not representable in the scalar type",
            config.tolerance
        ))
    })
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// # Panics
/// If the shapes differ. Use [`Matrix::add`] for a checked sum.
impl<'a, 'b, T: Float> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        assert_eq!(self.shape(), rhs.shape(), "Matrix addition requires equal shapes");
        let data = self.data.iter().zip(rhs.data.iter()).map(|(&a, &b)| a + b).collect();
        Matrix::from_parts(self.rows, self.cols, data)
    }
}

/// # Panics
/// If the shapes differ. Use [`Matrix::subtract`] for a checked difference.
impl<'a, 'b, T: Float> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        assert_eq!(self.shape(), rhs.shape(), "Matrix subtraction requires equal shapes");
        let data = self.data.iter().zip(rhs.data.iter()).map(|(&a, &b)| a - b).collect();
        Matrix::from_parts(self.rows, self.cols, data)
    }
}

/// # Panics
/// If `self.ncols() != rhs.nrows()`. Use [`Matrix::mul_matrix`] for a checked product.
impl<'a, 'b, T: Float> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        assert_eq!(
            self.cols, rhs.rows,
            "Matrix product requires lhs columns to equal rhs rows"
        );
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                out[(i, j)] = (0..self.cols).fold(T::zero(), |acc, k| acc + self[(i, k)] * rhs[(k, j)]);
            }
        }
        out
    }
}

/// # Panics
/// If `self.ncols() != rhs.len()`. Use [`Matrix::mul_vector`] for a checked product.
impl<'a, 'b, T: Float> Mul<&'b Vector<T>> for &'a Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &'b Vector<T>) -> Self::Output {
        assert_eq!(
            self.cols,
            rhs.len(),
            "Matrix-vector product requires vector length to equal matrix columns"
        );
        self.rows()
            .map(|row| row.iter().zip(rhs.iter()).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
            .collect()
    }
}

impl<'a, T: Float> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {$(
        impl<'a> From<$t> for Multiplicand<'a, $t> {
            fn from(value: $t) -> Self {
                Multiplicand::Scalar(value)
            }
        }

        impl<'a> Mul<&'a Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, rhs: &'a Matrix<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_operand!(f32, f64);

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.rows().enumerate() {
            write!(f, "[")?;
            for (jdx, value) in row.iter().enumerate() {
                write!(f, "{}", value)?;
                if jdx + 1 != row.len() {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if idx + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
