//! Configuration loading and management

use crate::core::validation::{CarValidator, CarsValidator};
use crate::storage::InMemoryCarRepository;
use anyhow::Result;
use serde::{Deserialize, Serialize};

fn default_name_pattern() -> String {
    "[A-Z0-9 ]+".to_string()
}

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog file
    pub data_file: String,

    /// Pattern every brand, model, and component name must match
    #[serde(default = "default_name_pattern")]
    pub name_pattern: String,

    /// Minimum allowed speed and price
    #[serde(default)]
    pub min_value: i64,
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The per-record validator this configuration describes
    pub fn car_validator(&self) -> Result<CarValidator> {
        CarValidator::new(&self.name_pattern, self.min_value)
    }

    /// Load and validate the configured catalog file into a repository
    pub fn open_repository(&self) -> Result<InMemoryCarRepository> {
        let validator = CarsValidator::new(self.car_validator()?);
        InMemoryCarRepository::from_json_file(&self.data_file, &validator)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            data_file: "cars.json".to_string(),
            name_pattern: default_name_pattern(),
            min_value: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::Validator;
    use crate::core::car::{Car, Color};
    use rust_decimal::Decimal;

    #[test]
    fn test_from_yaml_str() {
        let config = CatalogConfig::from_yaml_str(
            r#"
data_file: "data/cars.json"
name_pattern: "[A-Z ]+"
min_value: 100
"#,
        )
        .unwrap();

        assert_eq!(config.data_file, "data/cars.json");
        assert_eq!(config.name_pattern, "[A-Z ]+");
        assert_eq!(config.min_value, 100);
    }

    #[test]
    fn test_from_yaml_str_applies_defaults() {
        let config = CatalogConfig::from_yaml_str("data_file: cars.json").unwrap();
        assert_eq!(config.name_pattern, "[A-Z0-9 ]+");
        assert_eq!(config.min_value, 0);
    }

    #[test]
    fn test_from_yaml_str_requires_data_file() {
        assert!(CatalogConfig::from_yaml_str("min_value: 5").is_err());
    }

    #[test]
    fn test_car_validator_from_config() {
        let config = CatalogConfig {
            min_value: 100,
            ..CatalogConfig::default_config()
        };
        let validator = config.car_validator().unwrap();

        let slow = Car::new(
            "BMW",
            "X3",
            Decimal::from(250_000),
            50,
            Color::Black,
            vec!["ABS".to_string()],
        );
        assert_eq!(validator.validate(&slow), vec!["Speed 50 can't be less than 100"]);
    }

    #[test]
    fn test_invalid_name_pattern_fails() {
        let config = CatalogConfig {
            name_pattern: "(".to_string(),
            ..CatalogConfig::default_config()
        };
        assert!(config.car_validator().is_err());
    }
}
