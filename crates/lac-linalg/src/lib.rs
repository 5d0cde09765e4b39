//! lac-linalg: a small dense linear-algebra kernel.
//!
//! This crate provides a `Vector` and a `Matrix` type with arithmetic,
//! geometric and structural operations, recursive (cofactor) determinants and
//! adjugate-based inverses, plus a free-function façade and matrix factories.
//!
//! All operations are pure except `Vector::set`, `Matrix::set_row` and
//! `Matrix::set_cell`. Failures are reported through [`LinAlgError`]; the
//! `log` facade is used for diagnostics only.
//!
//! ```
//! use lac_linalg::{Matrix, Vector};
//!
//! let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -2.0);
//!
//! let v = Vector::from_vec(vec![1.0, 0.0, 0.0]);
//! let w = Vector::from_vec(vec![0.0, 1.0, 0.0]);
//! assert_eq!(v.cross(&w).unwrap().to_vec(), vec![0.0, 0.0, 1.0]);
//! ```
pub mod config;
pub mod error;
pub mod factory;
pub mod math;
pub mod ops;

pub use config::{DeterminantMethod, KernelConfig};
pub use error::{LinAlgError, Result};
pub use factory::{identity_matrix, ones_matrix, zeros_matrix};
pub use math::{Matrix, Multiplicand, Product, Vector};
pub use ops::{
    add, angle_between, cross_product, determinant, dot_product, inverse, magnitude,
    matrix_multiply, normalize, scale, subtract, transpose, vector_multiply,
};
