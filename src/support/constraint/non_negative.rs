use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use viscosity_models::support::constraint::{Constraint, ConstraintError, NonNegative};
///
/// assert!(NonNegative::check(&0.8).is_ok());
/// assert!(NonNegative::check(&0.0).is_ok());
/// assert_eq!(NonNegative::check(&-0.1), Err(ConstraintError::Negative));
/// assert_eq!(NonNegative::check(&f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert!(NonNegative::check(&0).is_ok());
        assert!(NonNegative::check(&3_i16).is_ok());
        assert_eq!(NonNegative::check(&-1), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(NonNegative::check(&0.8).is_ok());
        assert!(NonNegative::check(&0.0_f32).is_ok());
        assert_eq!(NonNegative::check(&-2.0), Err(ConstraintError::Negative));
        assert_eq!(
            NonNegative::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
