//! Crate-level utilities shared by models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not yet stable.

pub mod astm_d2270;
pub mod constraint;
pub mod interpolate;
pub mod units;
