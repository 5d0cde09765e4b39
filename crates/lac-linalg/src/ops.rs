//! Free-function versions of the `Vector` and `Matrix` methods.
//!
//! Each function is a thin wrapper; errors are those of the method it calls.

use num_traits::Float;

use crate::error::Result;
use crate::math::{Matrix, Vector};

pub fn dot_product<T: Float>(v1: &Vector<T>, v2: &Vector<T>) -> Result<T> {
    v1.dot(v2)
}

pub fn magnitude<T: Float>(v: &Vector<T>) -> T {
    v.magnitude()
}

pub fn normalize<T: Float>(v: &Vector<T>) -> Result<Vector<T>> {
    v.unit_vector()
}

pub fn cross_product<T: Float>(v1: &Vector<T>, v2: &Vector<T>) -> Result<Vector<T>> {
    v1.cross(v2)
}

/// Angle in radians.
pub fn angle_between<T: Float>(v1: &Vector<T>, v2: &Vector<T>) -> Result<T> {
    v1.angle_with(v2)
}

pub fn scale<T: Float>(matrix: &Matrix<T>, scalar: T) -> Matrix<T> {
    matrix.scale(scalar)
}

pub fn add<T: Float>(m1: &Matrix<T>, m2: &Matrix<T>) -> Result<Matrix<T>> {
    m1.add(m2)
}

pub fn subtract<T: Float>(m1: &Matrix<T>, m2: &Matrix<T>) -> Result<Matrix<T>> {
    m1.subtract(m2)
}

pub fn vector_multiply<T: Float>(matrix: &Matrix<T>, vector: &Vector<T>) -> Result<Vector<T>> {
    matrix.mul_vector(vector)
}

pub fn matrix_multiply<T: Float>(m1: &Matrix<T>, m2: &Matrix<T>) -> Result<Matrix<T>> {
    m1.mul_matrix(m2)
}

pub fn transpose<T: Clone>(matrix: &Matrix<T>) -> Matrix<T> {
    matrix.transpose()
}

pub fn determinant<T: Float>(matrix: &Matrix<T>) -> Result<T> {
    matrix.determinant()
}

pub fn inverse<T: Float>(matrix: &Matrix<T>) -> Result<Matrix<T>> {
    matrix.inverse()
}
