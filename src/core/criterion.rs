//! Declarative filter specification for car queries

use crate::core::error::CatalogError;
use crate::core::validation::{Validator, ensure_valid};
use rust_decimal::Decimal;

/// Unvalidated criterion input as it arrives from a caller.
///
/// Optional fields model input that may be missing altogether; the draft only
/// becomes a [`CarCriterion`] once a validator has accepted it.
#[derive(Debug, Clone, Default)]
pub struct CarCriterionDraft {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub min_speed: i64,
    pub max_speed: i64,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub components: Vec<String>,
}

/// An immutable, validated filter specification.
///
/// A car matches a criterion iff its model and brand match the criterion's
/// patterns, its speed and price fall within the inclusive ranges, and its
/// component set is a superset of the criterion's components. Construction
/// goes through [`CarCriterion::new`], which runs the validator and aggregates
/// every violated rule into a single failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarCriterion {
    brand: String,
    model: String,
    min_speed: i64,
    max_speed: i64,
    min_price: Decimal,
    max_price: Decimal,
    components: Vec<String>,
}

impl CarCriterion {
    /// Validates `draft` and builds the criterion. On failure the error
    /// message carries ALL violated rules joined by newlines, not just the
    /// first one.
    pub fn new(
        draft: CarCriterionDraft,
        validator: &dyn Validator<CarCriterionDraft>,
    ) -> Result<Self, CatalogError> {
        ensure_valid(&draft, validator)?;

        Ok(Self {
            brand: draft.brand.unwrap_or_default(),
            model: draft.model.unwrap_or_default(),
            min_speed: draft.min_speed,
            max_speed: draft.max_speed,
            min_price: draft.min_price.unwrap_or(Decimal::ZERO),
            max_price: draft.max_price.unwrap_or(Decimal::ZERO),
            components: draft.components,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn min_speed(&self) -> i64 {
        self.min_speed
    }

    pub fn max_speed(&self) -> i64 {
        self.max_speed
    }

    pub fn min_price(&self) -> Decimal {
        self.min_price
    }

    pub fn max_price(&self) -> Decimal {
        self.max_price
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }
}
