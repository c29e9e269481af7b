//! Core module containing the catalog domain model and the query engine

pub mod car;
pub mod collectors;
pub mod criterion;
pub mod error;
pub mod query;
pub mod service;
pub mod statistic;
pub mod validation;

pub use car::{Car, Color};
pub use collectors::StatisticCollector;
pub use criterion::{CarCriterion, CarCriterionDraft};
pub use error::{CatalogError, QueryError, StorageError, ValidationError};
pub use query::{GroupField, GroupKey, OrderDirection, SortField, SortSpec, StatField};
pub use service::{CarQueryService, CarRepository};
pub use statistic::Statistic;
pub use validation::{CarCriterionValidator, CarValidator, CarsValidator, Validator};
