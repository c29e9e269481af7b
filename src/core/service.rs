//! The data source abstraction and the query/aggregation engine

use crate::core::car::Car;
use crate::core::collectors::StatisticCollector;
use crate::core::criterion::CarCriterion;
use crate::core::error::{CatalogError, QueryError};
use crate::core::query::StatField;
use crate::core::statistic::Statistic;
use async_trait::async_trait;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::hash::Hash;

/// Source of catalog records.
///
/// Implementations own consistency and thread safety of the read path; the
/// engine treats every call as an independent snapshot. Failures surface to
/// the engine unchanged and are never retried there.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn get_all(&self) -> anyhow::Result<Vec<Car>>;
}

/// Stateless query/aggregation engine over a [`CarRepository`].
///
/// Every operation re-reads the full record set and applies a pure
/// transformation: filter, sort, group, or reduce. No state persists between
/// calls, so a service value is safe to share across tasks as long as its
/// repository is.
pub struct CarQueryService<R: CarRepository> {
    repository: R,
}

impl<R: CarRepository> CarQueryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn records(&self) -> Result<Vec<Car>, CatalogError> {
        let cars = self.repository.get_all().await.map_err(CatalogError::storage)?;
        tracing::debug!(count = cars.len(), "fetched records from repository");
        Ok(cars)
    }

    /// All records, stably sorted by `comparator`.
    pub async fn sorted_by<F>(&self, comparator: F) -> Result<Vec<Car>, CatalogError>
    where
        F: Fn(&Car, &Car) -> Ordering,
    {
        let mut cars = self.records().await?;
        cars.sort_by(|a, b| comparator(a, b));
        Ok(cars)
    }

    /// Records whose speed lies in `[min_speed, max_speed]`, both ends
    /// inclusive. Fails before data access if the bounds are inverted.
    pub async fn with_speed_between(
        &self,
        min_speed: i64,
        max_speed: i64,
    ) -> Result<Vec<Car>, CatalogError> {
        if min_speed > max_speed {
            return Err(CatalogError::invalid_argument(
                "Min speed is greater than max speed",
            ));
        }
        self.filter_by(|car| car.has_speed_between(min_speed, max_speed))
            .await
    }

    /// Records matching `filter`, in their original order.
    pub async fn filter_by<P>(&self, filter: P) -> Result<Vec<Car>, CatalogError>
    where
        P: Fn(&Car) -> bool,
    {
        let mut cars = self.records().await?;
        cars.retain(|car| filter(car));
        Ok(cars)
    }

    /// Partition count per grouping key, keys in first-seen order.
    pub async fn group_by_count<K, F>(&self, key_fn: F) -> Result<IndexMap<K, u64>, CatalogError>
    where
        K: Eq + Hash,
        F: Fn(&Car) -> K,
    {
        let mut groups: IndexMap<K, u64> = IndexMap::new();
        for car in self.records().await? {
            *groups.entry(key_fn(&car)).or_insert(0) += 1;
        }
        Ok(groups)
    }

    /// One [`Statistic`] per grouping key, computed by `collector` over the
    /// records sharing that key only. Keys in first-seen order.
    pub async fn group_by_statistic<K, F, V>(
        &self,
        key_fn: F,
        collector: &StatisticCollector<V>,
    ) -> Result<IndexMap<K, Statistic<Decimal>>, CatalogError>
    where
        K: Eq + Hash,
        F: Fn(&Car) -> K,
        V: Fn(&Car) -> Decimal,
    {
        let mut groups: IndexMap<K, Vec<Car>> = IndexMap::new();
        for car in self.records().await? {
            groups.entry(key_fn(&car)).or_default().push(car);
        }

        groups
            .into_iter()
            .map(|(key, members)| Ok((key, collector.collect(&members)?)))
            .collect()
    }

    /// Min/max/average of price and of speed over the full record set, in
    /// that fixed order.
    pub async fn price_speed_statistic(&self) -> Result<Vec<Statistic<Decimal>>, CatalogError> {
        let cars = self.records().await?;
        let price = StatisticCollector::min_max_average(|car: &Car| StatField::Price.value_of(car))
            .collect(&cars)?;
        let speed = StatisticCollector::min_max_average(|car: &Car| StatField::Speed.value_of(car))
            .collect(&cars)?;
        Ok(vec![price, speed])
    }

    /// Every record mapped to its sorted-components variant; the order of the
    /// records themselves is unchanged.
    pub async fn with_sorted_components<F>(&self, comparator: F) -> Result<Vec<Car>, CatalogError>
    where
        F: Fn(&str, &str) -> Ordering,
    {
        let cars = self.records().await?;
        Ok(cars
            .iter()
            .map(|car| car.with_sorted_components(&comparator))
            .collect())
    }

    /// Mapping from each distinct component to the cars carrying it (a car
    /// with N components appears in N groups), with group entries reordered
    /// by `comparator` applied to group sizes.
    ///
    /// Components enter the map in first-seen order while scanning records,
    /// and the size sort is stable, so equal-sized groups keep that order.
    pub async fn group_by_component_sorted_by_group_size<F>(
        &self,
        comparator: F,
    ) -> Result<IndexMap<String, Vec<Car>>, CatalogError>
    where
        F: Fn(usize, usize) -> Ordering,
    {
        let mut groups: IndexMap<String, Vec<Car>> = IndexMap::new();
        for car in self.records().await? {
            for component in &car.components {
                groups.entry(component.clone()).or_default().push(car.clone());
            }
        }

        let mut entries: Vec<(String, Vec<Car>)> = groups.into_iter().collect();
        entries.sort_by(|a, b| comparator(a.1.len(), b.1.len()));
        Ok(entries.into_iter().collect())
    }

    /// All records tied at the minimum absolute price distance from `price`.
    ///
    /// Ties are not broken: every record at the minimum distance is returned.
    /// Fails with an invalid-argument error for a non-positive target price,
    /// and with [`QueryError::EmptyRecordSet`] when there are no records at
    /// all (an empty result list would be ambiguous with "no ties").
    pub async fn closest_to_price(&self, price: Decimal) -> Result<Vec<Car>, CatalogError> {
        if price <= Decimal::ZERO {
            return Err(CatalogError::invalid_argument("Price is not positive"));
        }

        let cars = self.records().await?;
        let min_difference = cars
            .iter()
            .map(|car| car.difference_from_price(price))
            .min()
            .ok_or(CatalogError::Query(QueryError::EmptyRecordSet))?;

        Ok(cars
            .into_iter()
            .filter(|car| car.difference_from_price(price) == min_difference)
            .collect())
    }

    /// Records matching `criterion`, in their original order.
    pub async fn filter_by_criterion(
        &self,
        criterion: &CarCriterion,
    ) -> Result<Vec<Car>, CatalogError> {
        self.filter_by(|car| car.matches_criterion(criterion)).await
    }
}
