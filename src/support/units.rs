//! Extensions to [`uom`].
//!
//! Lubricant data sheets report kinematic viscosity in centistokes, which
//! [`uom`] files under its diffusion coefficient quantity (both are
//! `length² / time`). [`KinematicViscosity`] gives that dimension its
//! tribology name:
//!
//! ```
//! use uom::si::diffusion_coefficient::{centistokes, square_meter_per_second};
//! use viscosity_models::support::units::KinematicViscosity;
//!
//! let nu = KinematicViscosity::new::<centistokes>(32.0);
//! assert!((nu.get::<square_meter_per_second>() - 32.0e-6).abs() < 1e-15);
//! ```
//!
//! ## Absolute temperature
//!
//! The Ubbelohde-Walter relation works on absolute temperature, but model
//! keys are whole degrees Celsius. [`celsius_to_kelvin`] applies the
//! offset with plain `f64` arithmetic so derived viscosities do not pick up
//! unit-conversion rounding.

use uom::si::f64::DiffusionCoefficient;

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = DiffusionCoefficient;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Converts a Celsius temperature to Kelvin.
#[must_use]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}
