//! Validation system
//!
//! Validators collect every violated rule into a list of messages rather than
//! failing on the first one; [`ensure_valid`] turns a non-empty list into a
//! single aggregate failure.

pub mod validators;

pub use validators::{CarCriterionValidator, CarValidator, CarsValidator};

use crate::core::error::{CatalogError, ValidationError};

/// Contract for aggregate validators.
///
/// `validate` returns the list of violated rules; an empty list means the
/// value is valid.
pub trait Validator<T> {
    fn validate(&self, value: &T) -> Vec<String>;
}

/// Runs `validator` over `value` and fails with an aggregate
/// [`ValidationError`] if any rule is violated. The error message is every
/// violation joined by newlines.
pub fn ensure_valid<T>(value: &T, validator: &dyn Validator<T>) -> Result<(), CatalogError> {
    let errors = validator.validate(value);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Validation(ValidationError::new(errors)))
    }
}
