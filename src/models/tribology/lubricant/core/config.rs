use crate::support::constraint::{Constraint, ConstraintError, NonNegative};

/// VTC assumed when the 40 °C or 100 °C viscosity is unknown.
pub const DEFAULT_VTC_FALLBACK: f64 = 0.8;

/// Tunable constants for a [`Lubricant`](crate::models::tribology::lubricant::Lubricant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LubricantConfig {
    vtc_fallback: f64,
}

impl Default for LubricantConfig {
    fn default() -> Self {
        Self {
            vtc_fallback: DEFAULT_VTC_FALLBACK,
        }
    }
}

impl LubricantConfig {
    /// Returns a configuration with a different VTC fallback.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `vtc_fallback` is negative or `NaN`.
    pub fn with_vtc_fallback(mut self, vtc_fallback: f64) -> Result<Self, ConstraintError> {
        NonNegative::check(&vtc_fallback)?;
        self.vtc_fallback = vtc_fallback;
        Ok(self)
    }

    /// VTC used when either canonical reference viscosity is missing.
    #[must_use]
    pub fn vtc_fallback(&self) -> f64 {
        self.vtc_fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fallback() {
        assert_eq!(LubricantConfig::default().vtc_fallback(), 0.8);
    }

    #[test]
    fn rejects_invalid_fallback() {
        let config = LubricantConfig::default();
        assert_eq!(
            config.with_vtc_fallback(-0.5),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            config.with_vtc_fallback(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(config.with_vtc_fallback(0.7).unwrap().vtc_fallback(), 0.7);
    }
}
