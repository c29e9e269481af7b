//! Concrete validators for catalog records and criteria

use crate::core::car::Car;
use crate::core::criterion::CarCriterionDraft;
use crate::core::validation::Validator;
use regex::Regex;
use rust_decimal::Decimal;

/// Aggregate validator for [`CarCriterionDraft`].
///
/// Checks every rule and reports all violations together; criterion
/// construction is a multi-error validation, not a fail-fast one.
pub struct CarCriterionValidator;

impl Validator<CarCriterionDraft> for CarCriterionValidator {
    fn validate(&self, draft: &CarCriterionDraft) -> Vec<String> {
        let mut errors = Vec::new();

        match &draft.brand {
            None => errors.push("Brand is missing".to_string()),
            Some(brand) if brand.is_empty() => errors.push("Brand is empty".to_string()),
            Some(_) => {}
        }

        match &draft.model {
            None => errors.push("Model is missing".to_string()),
            Some(model) if model.is_empty() => errors.push("Model is empty".to_string()),
            Some(_) => {}
        }

        if draft.min_speed > draft.max_speed {
            errors.push("Min speed greater than max speed".to_string());
        }

        if draft.min_speed < 0 {
            errors.push("Min speed less than 0".to_string());
        }

        match (draft.min_price, draft.max_price) {
            (None, _) | (_, None) => {
                errors.push("Min price or max price is missing".to_string());
            }
            (Some(min), Some(max)) if min > max => {
                errors.push("Min price is greater than max price".to_string());
            }
            (Some(min), _) if min < Decimal::ZERO => {
                errors.push("Min price is less than 0".to_string());
            }
            _ => {}
        }

        if draft.components.is_empty() {
            errors.push("Components is empty".to_string());
        }

        errors
    }
}

/// Per-record validator applied to loaded catalog data.
///
/// Brand, model, and every component must match the configured pattern; speed
/// and price must not fall below the configured minimum. Reports at most one
/// pattern violation and one minimum violation per car.
pub struct CarValidator {
    pattern: Regex,
    min_value: i64,
}

impl CarValidator {
    pub fn new(pattern: &str, min_value: i64) -> anyhow::Result<Self> {
        Ok(Self {
            pattern: Regex::new(&format!("^(?:{pattern})$"))?,
            min_value,
        })
    }

    fn pattern_violation(&self, car: &Car) -> Option<String> {
        if !self.pattern.is_match(&car.brand) {
            return Some(format!("Brand {} does not match pattern", car.brand));
        }
        if !self.pattern.is_match(&car.model) {
            return Some(format!("Model {} does not match pattern", car.model));
        }
        for component in &car.components {
            if !self.pattern.is_match(component) {
                return Some(format!("Component {} does not match pattern", component));
            }
        }
        None
    }

    fn min_value_violation(&self, car: &Car) -> Option<String> {
        if car.speed < self.min_value {
            return Some(format!(
                "Speed {} can't be less than {}",
                car.speed, self.min_value
            ));
        }
        if car.price < Decimal::from(self.min_value) {
            return Some(format!(
                "Price {} can't be less than {}",
                car.price, self.min_value
            ));
        }
        None
    }
}

impl Validator<Car> for CarValidator {
    fn validate(&self, car: &Car) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(violation) = self.pattern_violation(car) {
            errors.push(violation);
        }
        if let Some(violation) = self.min_value_violation(car) {
            errors.push(violation);
        }
        errors
    }
}

/// Validates a whole loaded catalog: the list must be non-empty, and every car
/// must pass the per-record validator. Per-car errors are aggregated.
pub struct CarsValidator {
    car_validator: CarValidator,
}

impl CarsValidator {
    pub fn new(car_validator: CarValidator) -> Self {
        Self { car_validator }
    }
}

impl Validator<Vec<Car>> for CarsValidator {
    fn validate(&self, cars: &Vec<Car>) -> Vec<String> {
        if cars.is_empty() {
            return vec!["List of cars is empty".to_string()];
        }

        cars.iter()
            .flat_map(|car| self.car_validator.validate(car))
            .collect()
    }
}
