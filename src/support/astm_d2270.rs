//! ASTM D2270 reference values for the viscosity index.
//!
//! The viscosity index of an oil compares its viscosity at 40 °C with two
//! reference oils that share its viscosity at 100 °C: one with VI = 0 (`L`)
//! and one with VI = 100 (`H`). The standard tabulates `L` and `H` for
//! 100 °C viscosities from 2 cSt to 70 cSt in non-uniform steps
//! (0.1 cSt up to 20, 0.2 cSt up to 30, then 0.5 cSt).
//!
//! [`lookup`] returns a tabulated row on an exact match and otherwise
//! interpolates linearly between the bracketing rows.
//!
//! ```
//! use viscosity_models::support::astm_d2270;
//!
//! let lh = astm_d2270::lookup(8.0).unwrap();
//! assert_eq!((lh.visc100, lh.l, lh.h), (8.0, 100.0, 59.6));
//! ```

mod table;

use log::debug;
use thiserror::Error;

use crate::support::interpolate;

/// Smallest 100 °C viscosity (cSt) for which a viscosity index is defined.
pub const MIN_VISC100: f64 = 2.0;

/// Largest 100 °C viscosity (cSt) covered by the table.
pub const MAX_VISC100: f64 = 70.0;

/// `L` and `H` constants at a kinematic viscosity at 100 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LhConstants {
    /// Kinematic viscosity at 100 °C, cSt.
    pub visc100: f64,

    /// Viscosity at 40 °C of the VI = 0 reference oil, cSt.
    pub l: f64,

    /// Viscosity at 40 °C of the VI = 100 reference oil, cSt.
    pub h: f64,
}

impl LhConstants {
    const fn new(visc100: f64, l: f64, h: f64) -> Self {
        Self { visc100, l, h }
    }
}

/// Errors that may occur when looking up `L` and `H`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LookupError {
    /// The viscosity index is undefined below 2 cSt at 100 °C.
    #[error("L and H are not defined below 2 cSt at 100 °C: {visc100}")]
    BelowRange { visc100: f64 },

    /// The table ends at 70 cSt at 100 °C.
    #[error("L and H are not tabulated above 70 cSt at 100 °C: {visc100}")]
    AboveRange { visc100: f64 },

    /// No pair of table rows brackets the query.
    #[error("no table rows bracket {visc100} cSt at 100 °C")]
    NoInterpolationRange { visc100: f64 },
}

/// Returns every row of the reference table in ascending `visc100` order.
#[must_use]
pub fn rows() -> &'static [LhConstants] {
    &table::ROWS
}

/// Looks up `L` and `H` for a kinematic viscosity at 100 °C, in cSt.
///
/// # Errors
///
/// Returns [`LookupError::BelowRange`] below 2 cSt,
/// [`LookupError::AboveRange`] above 70 cSt, and
/// [`LookupError::NoInterpolationRange`] if no rows bracket the value
/// (for example, `NaN`).
pub fn lookup(visc100: f64) -> Result<LhConstants, LookupError> {
    if visc100 < MIN_VISC100 {
        return Err(LookupError::BelowRange { visc100 });
    }
    if visc100 > MAX_VISC100 {
        return Err(LookupError::AboveRange { visc100 });
    }

    let rows = rows();
    let split = rows.partition_point(|row| row.visc100 < visc100);

    let above = match rows.get(split) {
        Some(row) if row.visc100 == visc100 => return Ok(*row),
        Some(row) if row.visc100 > visc100 => row,
        _ => return Err(LookupError::NoInterpolationRange { visc100 }),
    };
    let Some(below) = split.checked_sub(1).map(|i| &rows[i]) else {
        return Err(LookupError::NoInterpolationRange { visc100 });
    };

    let l = interpolate::linear(visc100, (below.visc100, below.l), (above.visc100, above.l));
    let h = interpolate::linear(visc100, (below.visc100, below.h), (above.visc100, above.h));
    debug!(
        "interpolated L={l}, H={h} at {visc100} cSt between rows {} and {}",
        below.visc100, above.visc100
    );

    Ok(LhConstants { visc100, l, h })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn table_is_sorted_and_complete() {
        let rows = rows();
        assert_eq!(rows.len(), 311);
        assert_eq!(rows[0].visc100, MIN_VISC100);
        assert_eq!(rows[rows.len() - 1].visc100, MAX_VISC100);
        let ascending = rows.windows(2).all(|w| w[0].visc100 < w[1].visc100);
        assert!(ascending);
    }

    #[test]
    fn exact_row() {
        assert_eq!(lookup(8.0), Ok(LhConstants::new(8.0, 100.0, 59.6)));
    }

    #[test]
    fn table_bounds_are_exact_rows() {
        assert_eq!(lookup(2.0), Ok(LhConstants::new(2.0, 7.994, 6.394)));
        assert_eq!(lookup(70.0), Ok(LhConstants::new(70.0, 4905.0, 1558.0)));
    }

    #[test]
    fn interpolates_halfway_between_rows() {
        let lh = lookup(2.05).unwrap();
        assert_eq!(lh.visc100, 2.05);
        assert_relative_eq!(lh.l, 8.317, epsilon = 1e-9);
        assert_relative_eq!(lh.h, 6.644, epsilon = 1e-9);
        assert!(7.994 < lh.l && lh.l < 8.640);
        assert!(6.394 < lh.h && lh.h < 6.894);
    }

    #[test]
    fn interpolates_across_wider_steps() {
        // 0.2 cSt step between 20 and 30.
        let lh = lookup(20.1).unwrap();
        assert_relative_eq!(lh.l, 497.35, epsilon = 1e-9);
        assert_relative_eq!(lh.h, 231.25, epsilon = 1e-9);

        // 0.5 cSt step above 30.
        let lh = lookup(45.25).unwrap();
        assert_relative_eq!(lh.l, 2174.5, epsilon = 1e-9);
        assert_relative_eq!(lh.h, 787.7, epsilon = 1e-9);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(lookup(1.5), Err(LookupError::BelowRange { visc100: 1.5 }));
        assert_eq!(lookup(0.0), Err(LookupError::BelowRange { visc100: 0.0 }));
        assert_eq!(lookup(75.0), Err(LookupError::AboveRange { visc100: 75.0 }));
    }

    #[test]
    fn nan_has_no_interpolation_range() {
        assert!(matches!(
            lookup(f64::NAN),
            Err(LookupError::NoInterpolationRange { visc100 }) if visc100.is_nan()
        ));
    }
}
