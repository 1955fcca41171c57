//! ASTM D2270 viscosity index formulas.
//!
//! The index is first computed with the procedure for VI up to 100. If that
//! gives a value above 100, the procedure for higher indices is used
//! instead. Both results are truncated toward zero.

use log::debug;

use crate::support::astm_d2270::LhConstants;

/// Constant in the VI > 100 procedure.
const HIGH_VI_DIVISOR: f64 = 0.00715;

/// Viscosity index by the procedure for VI ≤ 100.
pub(crate) fn up_to_100(visc40: f64, lh: &LhConstants) -> i32 {
    (((lh.l - visc40) / (lh.l - lh.h)) * 100.0) as i32
}

/// Viscosity index by the procedure for VI > 100.
pub(crate) fn above_100(visc40: f64, lh: &LhConstants) -> i32 {
    let n = (lh.h.log10() - visc40.log10()) / lh.visc100.log10();
    ((10.0_f64.powf(n) - 1.0) / HIGH_VI_DIVISOR + 100.0) as i32
}

/// Selects the procedure and returns the viscosity index.
pub(crate) fn resolve(visc40: f64, lh: &LhConstants) -> i32 {
    let vi = up_to_100(visc40, lh);
    if vi > 100 {
        debug!("VI {vi} exceeds 100, switching to the high-VI procedure");
        return above_100(visc40, lh);
    }
    vi
}
