use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LinAlgError, Result};

/// Central configuration for the numerically sensitive matrix operations.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct KernelConfig {
    /// Absolute tolerance used by `approx_eq` and by the LU pivot test.
    pub tolerance: f64,

    #[serde(default)]
    pub method: DeterminantMethod,
}

/// Strategy used for determinants and inverses.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeterminantMethod {
    /// Laplace expansion along the first row, inverse through the adjugate.
    /// Runs in O(n!) and is only meant for small matrices.
    #[default]
    Cofactor,
    /// LU decomposition with partial pivoting, O(n^3).
    Lu,
}

impl FromStr for DeterminantMethod {
    type Err = LinAlgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cofactor" | "laplace" => Ok(DeterminantMethod::Cofactor),
            "lu" => Ok(DeterminantMethod::Lu),
            _ => Err(LinAlgError::InvalidArgument(format!(
                "Unknown determinant method: {}. Expected one of `cofactor`, `laplace` or `lu`",
                s
            ))),
        }
    }
}

impl KernelConfig {
    /// Minimum matrix order above which cofactor expansion logs a warning.
    pub const LARGE_COFACTOR_ORDER: usize = 8;

    pub fn new(tolerance: f64, method: DeterminantMethod) -> Self {
        Self { tolerance, method }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(LinAlgError::InvalidArgument(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            method: DeterminantMethod::Cofactor,
        }
    }
}
