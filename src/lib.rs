//! # Fleet
//!
//! A car catalog query and aggregation engine.
//!
//! ## Features
//!
//! - **Immutable Records**: `Car` values are read-only snapshots with
//!   regex-capable matching predicates
//! - **Declarative Criteria**: multi-field filter specifications validated at
//!   construction, with every violated rule reported together
//! - **Generic Aggregation**: grouping by arbitrary keys with counts or
//!   min/max/average statistics over any numeric field
//! - **Nearest-Price Search**: all records tied at the minimum absolute price
//!   distance, never an arbitrary tie-break
//! - **Exact Arithmetic**: prices and statistics use decimal arithmetic, with
//!   averages rounded half-up to 2 decimal places
//! - **Pluggable Data Sources**: the engine depends only on a `CarRepository`
//!   trait; an in-memory, JSON-backed implementation ships in `storage`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fleet::prelude::*;
//!
//! let config = CatalogConfig::from_yaml_file("catalog.yaml")?;
//! let service = CarQueryService::new(config.open_repository()?);
//!
//! let by_color = service
//!     .group_by_count(|car| GroupField::Color.key_of(car))
//!     .await?;
//!
//! let closest = service.closest_to_price(Decimal::from(250_000)).await?;
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain model ===
    pub use crate::core::{
        car::{Car, Color},
        collectors::StatisticCollector,
        criterion::{CarCriterion, CarCriterionDraft},
        error::{CatalogError, QueryError, StorageError, ValidationError},
        query::{GroupField, GroupKey, OrderDirection, SortField, SortSpec, StatField},
        service::{CarQueryService, CarRepository},
        statistic::Statistic,
        validation::{CarCriterionValidator, CarValidator, CarsValidator, Validator, ensure_valid},
    };

    // === Storage ===
    pub use crate::storage::InMemoryCarRepository;

    // === Config ===
    pub use crate::config::CatalogConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use indexmap::IndexMap;
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
