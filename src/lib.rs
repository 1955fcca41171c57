//! # Viscosity Models
//!
//! Lubricant viscosity-temperature models and the ASTM D2270 viscosity index.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, such as [`models::tribology::lubricant::Lubricant`].
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Logging
//!
//! Models report cache hits, derived calibration points, and table
//! interpolation through the [`log`] facade. Install any logger to see them.

pub mod models;
pub mod support;
