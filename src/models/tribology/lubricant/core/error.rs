use thiserror::Error;

use crate::support::astm_d2270::LookupError;

/// Errors that may occur when evaluating a lubricant model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LubricantError {
    /// Too few calibration points to derive the Walter coefficients.
    #[error("at least {required} calibration points are required, found {available}")]
    InsufficientData { required: usize, available: usize },

    /// The 100 °C viscosity falls outside the ASTM D2270 table.
    #[error("viscosity index lookup failed")]
    Lookup(#[from] LookupError),
}
