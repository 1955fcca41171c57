//! Computational core of the lubricant model.
//!
//! The calibration store is plain data. Everything that derives a value from
//! it is a read over the store's current contents, and the only write is the
//! explicit memoization step in [`viscosity_or_derive`].

mod calibration;
mod config;
mod error;
mod viscosity_index;
mod walter;

#[cfg(test)]
pub(super) mod test_support;

pub use calibration::{CalibrationPoint, CalibrationStore};
pub use config::{DEFAULT_VTC_FALLBACK, LubricantConfig};
pub use error::LubricantError;
pub use walter::{REFERENCE_HIGH, REFERENCE_LOW, WalterCoefficients};

pub(super) use viscosity_index::resolve as resolve_viscosity_index;
pub(super) use walter::{a, m, vtc};

use log::{debug, trace};

/// Returns the viscosity at `temperature`, deriving and storing it on a miss.
///
/// A hit returns the stored value untouched. A miss derives the Walter
/// coefficients from the store's current extreme points, evaluates the
/// relation, and records the result so later calls hit.
///
/// # Errors
///
/// Returns [`LubricantError::InsufficientData`] on a miss with fewer than two
/// known points. The store is left unchanged in that case.
pub(super) fn viscosity_or_derive(
    store: &mut CalibrationStore,
    config: &LubricantConfig,
    temperature: i16,
) -> Result<f64, LubricantError> {
    if let Some(viscosity) = store.get(temperature) {
        trace!("viscosity at {temperature} °C is known: {viscosity} cSt");
        return Ok(viscosity);
    }

    let coefficients = WalterCoefficients::from_store(store, config)?;
    let viscosity = coefficients.viscosity_at(temperature);
    debug!(
        "derived {viscosity} cSt at {temperature} °C (vtc={}, m={}, a={})",
        coefficients.vtc, coefficients.m, coefficients.a
    );

    store.set(temperature, viscosity);
    Ok(viscosity)
}
