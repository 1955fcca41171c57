//! Numeric constraints for validating model inputs.
//!
//! A constraint is a zero-sized marker type implementing [`Constraint<T>`].
//! Models check their constants once, when they are configured, so a bad
//! value is reported up front instead of silently poisoning every derived
//! viscosity.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//!
//! # Extending
//!
//! Custom invariants are defined by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod non_negative;

use thiserror::Error;

pub use non_negative::NonNegative;

/// A trait for enforcing numeric invariants.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a number")]
    NotANumber,
}
