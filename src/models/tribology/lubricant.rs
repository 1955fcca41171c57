//! Viscosity-temperature model and viscosity index of a lubricant.
//!
//! A [`Lubricant`] holds the viscosities known for one oil. Asking for a
//! viscosity at any other temperature fits the Ubbelohde-Walter relation
//! through the lowest- and highest-temperature points known so far, and
//! the result is remembered as a new calibration point. The viscosity index
//! follows ASTM D2270 from the 40 °C and 100 °C viscosities.
//!
//! ```
//! use viscosity_models::models::tribology::lubricant::Lubricant;
//!
//! let mut oil = Lubricant::named_with_viscosities("Paraffinic spindle oil", 30.0, 5.23);
//! assert_eq!(oil.viscosity(40).unwrap(), 30.0);
//! assert!(oil.viscosity(60).unwrap() > oil.viscosity(100).unwrap());
//! assert_eq!(oil.viscosity_index().unwrap(), 104);
//! ```
//!
//! # Caching
//!
//! Derived viscosities and the viscosity index are cached and never
//! recomputed. Overwriting a calibration point with
//! [`Lubricant::set_viscosity`] does not invalidate either; call
//! [`Lubricant::clear_viscosity_index`] to force the index to be
//! recomputed.

mod core;

pub use self::core::{
    CalibrationPoint, CalibrationStore, DEFAULT_VTC_FALLBACK, LubricantConfig, LubricantError,
    REFERENCE_HIGH, REFERENCE_LOW, WalterCoefficients,
};

use uom::si::{diffusion_coefficient::centistokes, f64::MassDensity};

use crate::support::{
    astm_d2270::{self, LhConstants},
    units::KinematicViscosity,
};

/// Label given to lubricants created without one.
pub const UNNAMED: &str = "Unnamed Lubricant";

/// Viscosity-temperature model of a single lubricant.
#[derive(Debug, Clone, PartialEq)]
pub struct Lubricant {
    label: String,
    density: Option<MassDensity>,
    calibration: CalibrationStore,
    viscosity_index: Option<i32>,
    config: LubricantConfig,
}

impl Default for Lubricant {
    fn default() -> Self {
        Self::new()
    }
}

impl Lubricant {
    /// Creates an unnamed lubricant with no known viscosities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: UNNAMED.to_owned(),
            density: None,
            calibration: CalibrationStore::new(),
            viscosity_index: None,
            config: LubricantConfig::default(),
        }
    }

    /// Creates a labeled lubricant with no known viscosities.
    #[must_use]
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::new()
        }
    }

    /// Creates an unnamed lubricant from its 40 °C and 100 °C viscosities, cSt.
    #[must_use]
    pub fn from_viscosities(visc40: f64, visc100: f64) -> Self {
        let mut lubricant = Self::new();
        lubricant.set_viscosity(REFERENCE_LOW, visc40);
        lubricant.set_viscosity(REFERENCE_HIGH, visc100);
        lubricant
    }

    /// Creates a labeled lubricant from its 40 °C and 100 °C viscosities, cSt.
    #[must_use]
    pub fn named_with_viscosities(label: impl Into<String>, visc40: f64, visc100: f64) -> Self {
        let mut lubricant = Self::from_viscosities(visc40, visc100);
        lubricant.label = label.into();
        lubricant
    }

    /// Replaces the model configuration.
    #[must_use]
    pub fn with_config(mut self, config: LubricantConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the density.
    #[must_use]
    pub fn with_density(mut self, density: MassDensity) -> Self {
        self.density = Some(density);
        self
    }

    /// Display name of the lubricant.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the display name.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Density, if set. It plays no part in the viscosity model.
    #[must_use]
    pub fn density(&self) -> Option<MassDensity> {
        self.density
    }

    /// Sets the density.
    pub fn set_density(&mut self, density: MassDensity) {
        self.density = Some(density);
    }

    /// Configuration used when deriving viscosities.
    #[must_use]
    pub fn config(&self) -> &LubricantConfig {
        &self.config
    }

    /// Known and derived viscosities, in ascending temperature order.
    #[must_use]
    pub fn calibration_points(&self) -> &CalibrationStore {
        &self.calibration
    }

    /// Returns the kinematic viscosity at `temperature`, °C, in cSt.
    ///
    /// Known points are returned as stored. Otherwise the value is derived
    /// from the current lowest- and highest-temperature points and stored
    /// as a new calibration point.
    ///
    /// # Errors
    ///
    /// Returns [`LubricantError::InsufficientData`] if the viscosity must be
    /// derived and fewer than two calibration points are known.
    pub fn viscosity(&mut self, temperature: i16) -> Result<f64, LubricantError> {
        self::core::viscosity_or_derive(&mut self.calibration, &self.config, temperature)
    }

    /// Like [`Lubricant::viscosity`], as a [`uom`] quantity.
    ///
    /// # Errors
    ///
    /// See [`Lubricant::viscosity`].
    pub fn kinematic_viscosity(
        &mut self,
        temperature: i16,
    ) -> Result<KinematicViscosity, LubricantError> {
        self.viscosity(temperature)
            .map(KinematicViscosity::new::<centistokes>)
    }

    /// Records a known viscosity, cSt, at `temperature`, °C.
    ///
    /// Overwrites any existing point. A cached viscosity index is kept.
    pub fn set_viscosity(&mut self, temperature: i16, viscosity: f64) {
        self.calibration.set(temperature, viscosity);
    }

    /// Variable-temperature constant.
    ///
    /// Falls back to the configured default (0.8) unless both the 40 °C and
    /// 100 °C viscosities are known.
    #[must_use]
    pub fn vtc(&self) -> f64 {
        self::core::vtc(&self.calibration, &self.config)
    }

    /// Slope `m` of the Ubbelohde-Walter relation.
    ///
    /// # Errors
    ///
    /// Returns [`LubricantError::InsufficientData`] with fewer than two calibration points.
    pub fn m(&self) -> Result<f64, LubricantError> {
        self::core::m(&self.calibration, &self.config)
    }

    /// Intercept `a` of the Ubbelohde-Walter relation.
    ///
    /// # Errors
    ///
    /// Returns [`LubricantError::InsufficientData`] with fewer than two calibration points.
    pub fn a(&self) -> Result<f64, LubricantError> {
        self::core::a(&self.calibration, &self.config)
    }

    /// All three Walter coefficients at once.
    ///
    /// # Errors
    ///
    /// Returns [`LubricantError::InsufficientData`] with fewer than two calibration points.
    pub fn walter_coefficients(&self) -> Result<WalterCoefficients, LubricantError> {
        WalterCoefficients::from_store(&self.calibration, &self.config)
    }

    /// ASTM D2270 `L` and `H` for this lubricant's 100 °C viscosity.
    ///
    /// # Errors
    ///
    /// Returns [`LubricantError::InsufficientData`] if the 100 °C viscosity
    /// cannot be derived, or [`LubricantError::Lookup`] if it lies outside
    /// the table.
    pub fn lh_constants(&mut self) -> Result<LhConstants, LubricantError> {
        let visc100 = self.viscosity(REFERENCE_HIGH)?;
        Ok(astm_d2270::lookup(visc100)?)
    }

    /// Viscosity index per ASTM D2270.
    ///
    /// A cached or manually set index is returned without computation.
    /// Otherwise the 40 °C viscosity and then the 100 °C viscosity are
    /// obtained (derived if needed), and the result is cached.
    ///
    /// # Errors
    ///
    /// Returns [`LubricantError::InsufficientData`] if either reference
    /// viscosity cannot be derived, or [`LubricantError::Lookup`] if the
    /// 100 °C viscosity lies outside 2 to 70 cSt.
    pub fn viscosity_index(&mut self) -> Result<i32, LubricantError> {
        if let Some(vi) = self.viscosity_index {
            return Ok(vi);
        }

        let visc40 = self.viscosity(REFERENCE_LOW)?;
        let lh = self.lh_constants()?;
        let vi = self::core::resolve_viscosity_index(visc40, &lh);
        self.set_viscosity_index(vi);
        Ok(vi)
    }

    /// Overrides the viscosity index.
    ///
    /// Zero means "not computed": setting 0 clears the cache, so the next
    /// [`Lubricant::viscosity_index`] call computes it.
    pub fn set_viscosity_index(&mut self, vi: i32) {
        self.viscosity_index = (vi != 0).then_some(vi);
    }

    /// Cached viscosity index, if one has been computed or set.
    #[must_use]
    pub fn cached_viscosity_index(&self) -> Option<i32> {
        self.viscosity_index
    }

    /// Forgets any cached viscosity index.
    pub fn clear_viscosity_index(&mut self) {
        self.viscosity_index = None;
    }
}
