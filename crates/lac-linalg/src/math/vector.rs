use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use std::slice::Iter;

use num_traits::{Float, One, Zero};

use crate::error::{LinAlgError, Result};

/// Fixed-length ordered sequence of scalars.
///
/// The dimension is set at construction and never changes; components can
/// still be overwritten through `set` or `IndexMut`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Dimension of the vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(LinAlgError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Copy,
    {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Overwrite one component in place.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(len: usize, value: T) -> Self {
        Vector::from_vec(vec![value; len])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_elem(len, T::zero())
    }
}

impl<T> Vector<T>
where
    T: Clone + One,
{
    pub fn ones(len: usize) -> Self {
        Vector::from_elem(len, T::one())
    }
}

impl<T: Float> Vector<T> {
    fn check_same_len(&self, other: &Vector<T>) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinAlgError::dims(
                format!("length {}", self.len()),
                format!("length {}", other.len()),
            ));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector<T>, f: F) -> Result<Vector<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn scale(&self, k: T) -> Vector<T> {
        self.mapv(|&x| x * k)
    }

    pub fn divide(&self, k: T) -> Result<Vector<T>> {
        if k.is_zero() {
            return Err(LinAlgError::DivisionByZero);
        }
        Ok(self.mapv(|&x| x / k))
    }

    /// Exact componentwise equality. Vectors of different dimension are unequal.
    pub fn equals(&self, other: &Vector<T>) -> bool {
        self == other
    }

    pub fn not_equals(&self, other: &Vector<T>) -> bool {
        !self.equals(other)
    }

    /// Componentwise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Vector<T>, tol: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> T {
        self.iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// The vector scaled to magnitude 1.
    ///
    /// Fails with `DomainError` for the zero vector (and for the empty vector,
    /// whose magnitude is 0).
    pub fn unit_vector(&self) -> Result<Vector<T>> {
        let mag = self.magnitude();
        if mag.is_zero() {
            return Err(LinAlgError::DomainError("cannot normalize a zero-magnitude vector"));
        }
        Ok(self.scale(T::one() / mag))
    }

    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_same_len(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product; both operands must be 3-dimensional.
    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>> {
        if self.len() != 3 || other.len() != 3 {
            return Err(LinAlgError::dims(
                "two vectors of length 3",
                format!("lengths {} and {}", self.len(), other.len()),
            ));
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Angle in radians between `self` and `other`, in `[0, pi]`.
    pub fn angle_with(&self, other: &Vector<T>) -> Result<T> {
        let dot = self.dot(other)?;
        let (m1, m2) = (self.magnitude(), other.magnitude());
        if m1.is_zero() || m2.is_zero() {
            return Err(LinAlgError::DomainError(
                "angle is undefined for a zero-magnitude vector",
            ));
        }
        let ratio = dot / (m1 * m2);
        // Float::max/min would replace NaN with the bound
        if ratio.is_nan() {
            return Err(LinAlgError::DomainError(
                "angle is undefined for non-finite components",
            ));
        }
        // rounding can push the ratio just outside acos's domain
        let cos = ratio.max(-T::one()).min(T::one());
        Ok(cos.acos())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

/// # Panics
/// If the vectors differ in dimension. Use [`Vector::add`] for a checked sum.
impl<'a, 'b, T: Float> Add<&'b Vector<T>> for &'a Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &'b Vector<T>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector addition requires equal length vectors"
        );
        self.iter().zip(rhs.iter()).map(|(&a, &b)| a + b).collect()
    }
}

/// # Panics
/// If the vectors differ in dimension. Use [`Vector::subtract`] for a checked difference.
impl<'a, 'b, T: Float> Sub<&'b Vector<T>> for &'a Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &'b Vector<T>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector subtraction requires equal length vectors"
        );
        self.iter().zip(rhs.iter()).map(|(&a, &b)| a - b).collect()
    }
}

impl<'a, T: Float> Mul<T> for &'a Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Float> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: Vector<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }

        impl<'a> Mul<&'a Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: &'a Vector<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Float> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.mapv(|&x| -x)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_clamps_rounding_past_one() {
        // parallel vectors whose cosine ratio rounds slightly above 1
        let v = Vector::from_vec(vec![0.1f64, 0.2, 0.3]);
        let w = v.scale(3.0);
        let angle = v.angle_with(&w).unwrap();
        assert!(!angle.is_nan());
        assert!(angle.abs() < 1e-7);
    }

    #[test]
    fn angle_with_nan_component_is_not_clamped() {
        let v = Vector::from_vec(vec![f64::NAN, 1.0]);
        let w = Vector::from_vec(vec![1.0, 0.0]);
        assert!(matches!(v.angle_with(&w), Err(LinAlgError::DomainError(_))));
        assert!(matches!(w.angle_with(&v), Err(LinAlgError::DomainError(_))));
    }

    #[test]
    fn check_index_reports_length() {
        let v = Vector::from_vec(vec![1.0f64, 2.0]);
        assert_eq!(
            v.check_index(2),
            Err(LinAlgError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}
