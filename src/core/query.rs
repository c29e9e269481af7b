//! Declarative query parameters: sort direction and the closed field sets
//!
//! The source of catalog queries is external input (query strings, request
//! payloads), so sortable and groupable fields are a closed enumeration
//! validated at the boundary instead of free-form field names resolved by
//! reflection.

use crate::core::car::{Car, Color};
use crate::core::error::CatalogError;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction applied to a natural ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderDirection {
    /// Compare two values under this direction
    pub fn compare<T: Ord>(&self, a: &T, b: &T) -> Ordering {
        match self {
            OrderDirection::Ascending => a.cmp(b),
            OrderDirection::Descending => b.cmp(a),
        }
    }
}

impl FromStr for OrderDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(OrderDirection::Ascending),
            "desc" | "descending" => Ok(OrderDirection::Descending),
            other => Err(CatalogError::invalid_argument(format!(
                "Unknown order direction: {other}"
            ))),
        }
    }
}

/// The fields records can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Brand,
    Model,
    Price,
    Speed,
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brand" => Ok(SortField::Brand),
            "model" => Ok(SortField::Model),
            "price" => Ok(SortField::Price),
            "speed" => Ok(SortField::Speed),
            other => Err(CatalogError::invalid_argument(format!(
                "Unknown sort field: {other}"
            ))),
        }
    }
}

/// A complete sort request: field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: OrderDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: OrderDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two records under this spec
    pub fn compare(&self, a: &Car, b: &Car) -> Ordering {
        match self.field {
            SortField::Brand => self.direction.compare(&a.brand, &b.brand),
            SortField::Model => self.direction.compare(&a.model, &b.model),
            SortField::Price => self.direction.compare(&a.price, &b.price),
            SortField::Speed => self.direction.compare(&a.speed, &b.speed),
        }
    }
}

/// The fields records can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Brand,
    Model,
    Color,
}

impl GroupField {
    /// Extract this field's grouping key from a record
    pub fn key_of(&self, car: &Car) -> GroupKey {
        match self {
            GroupField::Brand => GroupKey::Text(car.brand.clone()),
            GroupField::Model => GroupKey::Text(car.model.clone()),
            GroupField::Color => GroupKey::Color(car.color),
        }
    }
}

impl FromStr for GroupField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brand" => Ok(GroupField::Brand),
            "model" => Ok(GroupField::Model),
            "color" => Ok(GroupField::Color),
            other => Err(CatalogError::invalid_argument(format!(
                "Unknown group field: {other}"
            ))),
        }
    }
}

/// A value a record set can be partitioned on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Text(String),
    Color(Color),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Text(s) => write!(f, "{}", s),
            GroupKey::Color(c) => write!(f, "{:?}", c),
        }
    }
}

/// The numeric fields statistics can be computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Price,
    Speed,
}

impl StatField {
    /// Extract this field's value from a record as a decimal
    pub fn value_of(&self, car: &Car) -> Decimal {
        match self {
            StatField::Price => car.price,
            StatField::Speed => Decimal::from(car.speed),
        }
    }
}

impl FromStr for StatField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "price" => Ok(StatField::Price),
            "speed" => Ok(StatField::Speed),
            other => Err(CatalogError::invalid_argument(format!(
                "Unknown statistic field: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(brand: &str, model: &str, price: i64, speed: i64) -> Car {
        Car::new(
            brand,
            model,
            Decimal::from(price),
            speed,
            Color::Black,
            vec!["ABS".to_string()],
        )
    }

    #[test]
    fn test_order_direction_compare() {
        assert_eq!(OrderDirection::Ascending.compare(&1, &2), Ordering::Less);
        assert_eq!(OrderDirection::Descending.compare(&1, &2), Ordering::Greater);
        assert_eq!(OrderDirection::Ascending.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_order_direction_from_str() {
        assert_eq!("asc".parse::<OrderDirection>().unwrap(), OrderDirection::Ascending);
        assert_eq!(
            "DESCENDING".parse::<OrderDirection>().unwrap(),
            OrderDirection::Descending
        );
        assert!("sideways".parse::<OrderDirection>().is_err());
    }

    #[test]
    fn test_sort_field_rejects_unknown_name() {
        assert_eq!("price".parse::<SortField>().unwrap(), SortField::Price);
        let err = "horsepower".parse::<SortField>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_sort_spec_orders_by_price() {
        let cheap = car("FIAT", "PANDA", 120_000, 170);
        let pricey = car("AUDI", "A1", 300_000, 280);
        let spec = SortSpec::new(SortField::Price, OrderDirection::Ascending);
        assert_eq!(spec.compare(&cheap, &pricey), Ordering::Less);
        let spec = SortSpec::new(SortField::Price, OrderDirection::Descending);
        assert_eq!(spec.compare(&cheap, &pricey), Ordering::Greater);
    }

    #[test]
    fn test_group_field_key_extraction() {
        let record = car("BMW", "X3", 250_000, 250);
        assert_eq!(
            GroupField::Brand.key_of(&record),
            GroupKey::Text("BMW".to_string())
        );
        assert_eq!(GroupField::Color.key_of(&record), GroupKey::Color(Color::Black));
        assert!("vin".parse::<GroupField>().is_err());
    }

    #[test]
    fn test_stat_field_values() {
        let record = car("BMW", "X3", 250_000, 250);
        assert_eq!(StatField::Price.value_of(&record), Decimal::from(250_000));
        assert_eq!(StatField::Speed.value_of(&record), Decimal::from(250));
    }
}
