//! In-memory implementation of CarRepository
//!
//! Holds an immutable snapshot behind an RwLock, either populated directly or
//! loaded from a JSON catalog file and validated before use.

use crate::core::car::Car;
use crate::core::service::CarRepository;
use crate::core::validation::{CarsValidator, ensure_valid};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Catalog wire format: `{"cars": [...]}`.
#[derive(Debug, Deserialize)]
struct Catalog {
    cars: Vec<Car>,
}

/// In-memory car repository
///
/// Uses RwLock for thread-safe access; `get_all` hands out a snapshot clone,
/// so readers never observe partial updates.
#[derive(Clone, Debug)]
pub struct InMemoryCarRepository {
    cars: Arc<RwLock<Vec<Car>>>,
}

impl InMemoryCarRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            cars: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository over an existing record set
    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: Arc::new(RwLock::new(cars)),
        }
    }

    /// Load a catalog from a JSON file and validate it before accepting it.
    ///
    /// Construction fails on unreadable files, malformed JSON, or any
    /// validation error (reported in aggregate).
    pub fn from_json_file(path: impl AsRef<Path>, validator: &CarsValidator) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;

        ensure_valid(&catalog.cars, validator)?;
        tracing::info!(count = catalog.cars.len(), path = %path.display(), "loaded car catalog");

        Ok(Self::with_cars(catalog.cars))
    }

    /// Add a record to the repository
    pub fn add(&self, car: Car) -> Result<()> {
        let mut cars = self
            .cars
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        cars.push(car);

        Ok(())
    }
}

impl Default for InMemoryCarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn get_all(&self) -> Result<Vec<Car>> {
        let cars = self
            .cars
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(cars.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::car::Color;
    use crate::core::validation::CarValidator;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn sample_validator() -> CarsValidator {
        CarsValidator::new(CarValidator::new("[A-Z0-9 ]+", 0).unwrap())
    }

    fn catalog_json() -> &'static str {
        r#"{
            "cars": [
                {
                    "brand": "BMW",
                    "model": "X3",
                    "price": 250000,
                    "speed": 250,
                    "color": "BLACK",
                    "components": ["ABS", "AIR CONDITION"]
                },
                {
                    "brand": "AUDI",
                    "model": "A1",
                    "price": 300000,
                    "speed": 280,
                    "color": "BLUE",
                    "components": ["RADIO", "ABS"]
                }
            ]
        }"#
    }

    #[tokio::test]
    async fn test_get_all_returns_added_cars() {
        let repository = InMemoryCarRepository::new();
        repository
            .add(Car::new(
                "BMW",
                "X3",
                Decimal::from(250_000),
                250,
                Color::Black,
                vec!["ABS".to_string()],
            ))
            .unwrap();

        let cars = repository.get_all().await.unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].brand, "BMW");
    }

    #[tokio::test]
    async fn test_get_all_is_a_snapshot() {
        let repository = InMemoryCarRepository::with_cars(Vec::new());
        let snapshot = repository.get_all().await.unwrap();

        repository
            .add(Car::new(
                "FIAT",
                "PANDA",
                Decimal::from(120_000),
                170,
                Color::Red,
                vec!["ABS".to_string()],
            ))
            .unwrap();

        assert!(snapshot.is_empty());
        assert_eq!(repository.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_from_json_file_loads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(catalog_json().as_bytes()).unwrap();

        let repository =
            InMemoryCarRepository::from_json_file(file.path(), &sample_validator()).unwrap();

        let cars = repository.get_all().await.unwrap();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].model, "X3");
        assert_eq!(cars[0].price, Decimal::from(250_000));
        assert_eq!(cars[1].color, Color::Blue);
    }

    #[test]
    fn test_from_json_file_rejects_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"cars": []}"#).unwrap();

        let err = InMemoryCarRepository::from_json_file(file.path(), &sample_validator())
            .unwrap_err();
        assert!(err.to_string().contains("List of cars is empty"));
    }

    #[test]
    fn test_from_json_file_rejects_invalid_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "cars": [
                    {
                        "brand": "bmw",
                        "model": "X3",
                        "price": 250000,
                        "speed": 250,
                        "color": "BLACK",
                        "components": ["ABS"]
                    }
                ]
            }"#,
        )
        .unwrap();

        let err = InMemoryCarRepository::from_json_file(file.path(), &sample_validator())
            .unwrap_err();
        assert!(err.to_string().contains("Brand bmw does not match pattern"));
    }

    #[test]
    fn test_from_json_file_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        assert!(
            InMemoryCarRepository::from_json_file(file.path(), &sample_validator()).is_err()
        );
    }

    #[test]
    fn test_from_json_file_missing_file() {
        assert!(
            InMemoryCarRepository::from_json_file("/nonexistent/cars.json", &sample_validator())
                .is_err()
        );
    }
}
