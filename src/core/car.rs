//! The `Car` record and its matching predicates

use crate::core::criterion::CarCriterion;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// The fixed color palette for catalog records.
///
/// Serialized in the catalog wire format as SCREAMING_SNAKE_CASE strings
/// (e.g. `"BLACK"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Gray,
    Black,
    Silver,
    Blue,
    Red,
    Green,
    Brown,
    Orange,
    Yellow,
    Gold,
    Purple,
}

/// An immutable car record.
///
/// A `Car` is a read-only snapshot loaded from its data source. All fields are
/// set at construction and never mutated; "modified" views such as
/// [`Car::with_sorted_components`] produce new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub price: Decimal,
    pub speed: i64,
    pub color: Color,
    pub components: Vec<String>,
}

/// Compiles `pattern` anchored to the whole string and matches `value`.
///
/// An invalid pattern simply fails to match.
fn matches_anchored(value: &str, pattern: &str) -> bool {
    Regex::new(&format!("^(?:{pattern})$"))
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: Decimal,
        speed: i64,
        color: Color,
        components: Vec<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price,
            speed,
            color,
            components,
        }
    }

    /// True iff `min_speed <= speed <= max_speed` (inclusive both ends).
    pub fn has_speed_between(&self, min_speed: i64, max_speed: i64) -> bool {
        self.speed >= min_speed && self.speed <= max_speed
    }

    /// True iff `min_price <= price <= max_price` (inclusive, exact decimal
    /// comparison).
    pub fn has_price_between(&self, min_price: Decimal, max_price: Decimal) -> bool {
        self.price >= min_price && self.price <= max_price
    }

    /// True iff the brand fully matches `pattern`, uppercased and anchored to
    /// the whole string. Catalog brands are stored uppercase, so uppercasing
    /// the pattern makes the match case-insensitive for literal input.
    pub fn has_brand_pattern(&self, pattern: &str) -> bool {
        matches_anchored(&self.brand, &pattern.to_uppercase())
    }

    /// True iff the model fully matches `pattern`, uppercased and anchored to
    /// the whole string.
    pub fn has_model_pattern(&self, pattern: &str) -> bool {
        matches_anchored(&self.model, &pattern.to_uppercase())
    }

    /// True iff at least one component matches `pattern`.
    ///
    /// The ARGUMENT is the pattern here, matched anchored against each literal
    /// component string. This direction is intentional: `has_component("CB.*")`
    /// finds a car carrying `"CB RADIO"`. Do not replace with literal equality.
    pub fn has_component(&self, pattern: &str) -> bool {
        Regex::new(&format!("^(?:{pattern})$"))
            .map(|re| self.components.iter().any(|c| re.is_match(c)))
            .unwrap_or(false)
    }

    /// True iff the car's component set (duplicates collapsed) is a superset
    /// of `components`.
    pub fn has_components(&self, components: &[String]) -> bool {
        let owned: HashSet<&str> = self.components.iter().map(String::as_str).collect();
        components.iter().all(|c| owned.contains(c.as_str()))
    }

    /// Absolute difference between the car's price and `price`. Used for
    /// nearest-price ranking.
    pub fn difference_from_price(&self, price: Decimal) -> Decimal {
        (self.price - price).abs()
    }

    /// True iff model pattern, brand pattern, speed interval, price interval,
    /// and required components all match.
    pub fn matches_criterion(&self, criterion: &CarCriterion) -> bool {
        self.has_model_pattern(criterion.model())
            && self.has_brand_pattern(criterion.brand())
            && self.has_speed_between(criterion.min_speed(), criterion.max_speed())
            && self.has_price_between(criterion.min_price(), criterion.max_price())
            && self.has_components(criterion.components())
    }

    /// Returns a new `Car` with components reordered by `comparator`. The
    /// original record is untouched.
    pub fn with_sorted_components<F>(&self, comparator: F) -> Car
    where
        F: Fn(&str, &str) -> Ordering,
    {
        let mut components = self.components.clone();
        components.sort_by(|a, b| comparator(a, b));
        Car {
            components,
            ..self.clone()
        }
    }
}
