//! Two-point linear interpolation.

use num_traits::Float;

/// Linearly interpolates `y` at `x` between `(x0, y0)` and `(x1, y1)`.
///
/// The slope is formed first and then scaled by the offset from `x0`,
/// so results are reproducible for tabulated data regardless of how far
/// `x` sits from either end. Points outside `[x0, x1]` are extrapolated.
///
/// # Example
///
/// ```
/// use viscosity_models::support::interpolate::linear;
///
/// let y = linear(2.5_f64, (2.0, 10.0), (3.0, 20.0));
/// assert!((y - 15.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn linear<T: Float>(x: T, (x0, y0): (T, T), (x1, y1): (T, T)) -> T {
    let per_unit = (y1 - y0) / (x1 - x0);
    y0 + (x - x0) * per_unit
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_reproduced() {
        assert_relative_eq!(linear(4.0, (4.0, 25.32), (4.1, 26.50)), 25.32);
        assert_relative_eq!(
            linear(4.1, (4.0, 25.32), (4.1, 26.50)),
            26.50,
            epsilon = 1e-12
        );
    }

    #[test]
    fn decreasing_segment() {
        assert_relative_eq!(linear(1.0_f32, (0.0, 10.0), (2.0, 6.0)), 8.0);
    }

    #[test]
    fn extrapolates_outside_segment() {
        assert_relative_eq!(linear(3.0, (0.0, 0.0), (1.0, 2.0)), 6.0);
    }
}
