//! Dense `Vector` and `Matrix` types and the algorithms behind them.
//!
//! Both types own a flat `Vec` of scalars and are generic over
//! `num_traits::Float`, defaulting to `f64`. Determinants and inverses live in
//! `cofactor` (Laplace expansion, adjugate) and `lu` (partial pivoting).
pub mod cofactor;
pub mod lu;
pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, Multiplicand, Product};
pub use vector::Vector;
