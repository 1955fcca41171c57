//! Ubbelohde-Walter viscosity-temperature relation.
//!
//! The relation is linear in `log log (ν + VTC)` against `log T`, with `T` in
//! Kelvin. Two known points fix the slope `m` and intercept `a`; any other
//! temperature then follows from the closed form in
//! [`WalterCoefficients::viscosity_at`].

use std::f64::consts::E;

use log::debug;

use crate::support::units::celsius_to_kelvin;

use super::{CalibrationPoint, CalibrationStore, LubricantConfig, LubricantError};

/// Temperature, °C, of the lower canonical reference viscosity.
pub const REFERENCE_LOW: i16 = 40;

/// Temperature, °C, of the upper canonical reference viscosity.
pub const REFERENCE_HIGH: i16 = 100;

/// Number of points needed to anchor the relation.
const MIN_POINTS: usize = 2;

/// Variable-temperature constant.
///
/// Computed from the 40 °C and 100 °C viscosities when both are known,
/// otherwise the configured fallback.
pub(crate) fn vtc(store: &CalibrationStore, config: &LubricantConfig) -> f64 {
    match (store.get(REFERENCE_LOW), store.get(REFERENCE_HIGH)) {
        (Some(visc40), Some(visc100)) => (visc40 - visc100) / visc40,
        _ => {
            debug!(
                "VTC needs viscosities at {REFERENCE_LOW} and {REFERENCE_HIGH} °C, using {}",
                config.vtc_fallback()
            );
            config.vtc_fallback()
        }
    }
}

/// Returns the extreme calibration points, or `InsufficientData`.
fn anchors(
    store: &CalibrationStore,
) -> Result<(CalibrationPoint, CalibrationPoint), LubricantError> {
    store.extremes().ok_or(LubricantError::InsufficientData {
        required: MIN_POINTS,
        available: store.len(),
    })
}

/// Slope of the relation between two points.
fn slope(lowest: CalibrationPoint, highest: CalibrationPoint, vtc: f64) -> f64 {
    let t_low = celsius_to_kelvin(f64::from(lowest.temperature));
    let t_high = celsius_to_kelvin(f64::from(highest.temperature));

    ((lowest.viscosity + vtc).ln().ln() - (highest.viscosity + vtc).ln().ln())
        / (t_high.ln() - t_low.ln())
}

/// Intercept of the relation through `lowest`.
fn intercept(lowest: CalibrationPoint, vtc: f64, m: f64) -> f64 {
    let t_low = celsius_to_kelvin(f64::from(lowest.temperature));
    (lowest.viscosity + vtc).log10().log10() + m * t_low.log10()
}

/// Coefficients of the Ubbelohde-Walter relation for one lubricant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalterCoefficients {
    /// Variable-temperature constant.
    pub vtc: f64,

    /// Slope, `m`.
    pub m: f64,

    /// Intercept, `a`.
    pub a: f64,
}

impl WalterCoefficients {
    /// Derives the coefficients from the store's current extreme points.
    ///
    /// # Errors
    ///
    /// Returns [`LubricantError::InsufficientData`] if fewer than two points are known.
    pub(crate) fn from_store(
        store: &CalibrationStore,
        config: &LubricantConfig,
    ) -> Result<Self, LubricantError> {
        let (lowest, highest) = anchors(store)?;
        let vtc = vtc(store, config);
        let m = slope(lowest, highest, vtc);
        let a = intercept(lowest, vtc, m);
        Ok(Self { vtc, m, a })
    }

    /// Evaluates the relation at `temperature`, °C, returning viscosity in cSt.
    #[must_use]
    pub fn viscosity_at(&self, temperature: i16) -> f64 {
        let t_abs = celsius_to_kelvin(f64::from(temperature));
        let ln_10 = 10.0_f64.ln();
        let c = self.a * 100.0;
        let d = self.m * 25.0;

        // Keep this exponent structure as is; regression VI values key off it.
        E.powf(ln_10 * E.powf((c * ln_10) / 100.0 - (d * t_abs.ln()) / 25.0)) - self.vtc
    }
}

/// Slope `m` from the store's current extreme points.
pub(crate) fn m(store: &CalibrationStore, config: &LubricantConfig) -> Result<f64, LubricantError> {
    let (lowest, highest) = anchors(store)?;
    Ok(slope(lowest, highest, vtc(store, config)))
}

/// Intercept `a` from the store's current extreme points.
pub(crate) fn a(store: &CalibrationStore, config: &LubricantConfig) -> Result<f64, LubricantError> {
    let (lowest, highest) = anchors(store)?;
    let vtc = vtc(store, config);
    Ok(intercept(lowest, vtc, slope(lowest, highest, vtc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn naphthenic() -> CalibrationStore {
        let mut store = CalibrationStore::new();
        store.set(REFERENCE_LOW, 30.0);
        store.set(REFERENCE_HIGH, 4.24);
        store
    }

    #[test]
    fn vtc_from_reference_points() {
        let config = LubricantConfig::default();
        assert_relative_eq!(vtc(&naphthenic(), &config), 0.858_666_666_666_666_6);
    }

    #[test]
    fn vtc_falls_back_without_both_reference_points() {
        let config = LubricantConfig::default();
        let mut store = CalibrationStore::new();
        assert_eq!(vtc(&store, &config), 0.8);

        store.set(REFERENCE_LOW, 30.0);
        assert_eq!(vtc(&store, &config), 0.8);

        store.set(60, 13.0);
        assert_eq!(vtc(&store, &config), 0.8);

        let config = config.with_vtc_fallback(0.6).unwrap();
        assert_eq!(vtc(&store, &config), 0.6);
    }

    #[test]
    fn coefficients() {
        let config = LubricantConfig::default();
        let coefficients = WalterCoefficients::from_store(&naphthenic(), &config).unwrap();

        assert_relative_eq!(coefficients.m, 4.246_689_872_842_634, epsilon = 1e-9);
        assert_relative_eq!(coefficients.a, 10.771_691_199_041_385, epsilon = 1e-9);
        assert_eq!(coefficients.m, m(&naphthenic(), &config).unwrap());
        assert_eq!(coefficients.a, a(&naphthenic(), &config).unwrap());
    }

    #[test]
    fn reproduces_anchor_points() {
        let store = naphthenic();
        let coefficients =
            WalterCoefficients::from_store(&store, &LubricantConfig::default()).unwrap();

        assert_relative_eq!(coefficients.viscosity_at(40), 30.0, max_relative = 1e-9);
        assert_relative_eq!(coefficients.viscosity_at(100), 4.24, max_relative = 1e-9);
        assert_relative_eq!(
            coefficients.viscosity_at(60),
            13.106_436_594_316_93,
            max_relative = 1e-9
        );
    }

    #[test]
    fn insufficient_data() {
        let config = LubricantConfig::default();
        let mut store = CalibrationStore::new();
        assert_eq!(
            m(&store, &config),
            Err(LubricantError::InsufficientData {
                required: 2,
                available: 0
            })
        );

        store.set(REFERENCE_LOW, 30.0);
        assert_eq!(
            a(&store, &config),
            Err(LubricantError::InsufficientData {
                required: 2,
                available: 1
            })
        );
        assert!(WalterCoefficients::from_store(&store, &config).is_err());
    }

    #[test]
    fn non_canonical_anchors_use_fallback_vtc() {
        let mut store = CalibrationStore::new();
        store.set(20, 100.0);
        store.set(80, 10.0);

        let coefficients =
            WalterCoefficients::from_store(&store, &LubricantConfig::default()).unwrap();
        assert_eq!(coefficients.vtc, 0.8);
        assert_relative_eq!(coefficients.m, 3.555_147_724_660_318, epsilon = 1e-9);
        assert_relative_eq!(coefficients.a, 9.072_649_830_571_557, epsilon = 1e-9);
        assert_relative_eq!(
            coefficients.viscosity_at(40),
            37.611_396_829_962_82,
            max_relative = 1e-9
        );
    }
}
