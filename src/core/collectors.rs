//! Statistical reducers over extracted record fields
//!
//! A [`StatisticCollector`] pairs a field accessor with a finishing fold, so
//! the same collector works uniformly over price, speed, or any other numeric
//! field of a [`Car`].

use crate::core::car::Car;
use crate::core::error::{CatalogError, QueryError};
use crate::core::statistic::Statistic;
use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, Copy)]
enum Finisher {
    MinMax,
    MinMaxAverage,
}

/// Generic min/max(/average) fold parameterized by a field accessor.
pub struct StatisticCollector<F>
where
    F: Fn(&Car) -> Decimal,
{
    extract: F,
    finisher: Finisher,
}

impl<F> StatisticCollector<F>
where
    F: Fn(&Car) -> Decimal,
{
    /// A collector producing [`Statistic::MinMax`].
    ///
    /// Empty input yields `(0, 0)` rather than failing. That fallback is
    /// numerically debatable but load-bearing for callers, so it stays.
    pub fn min_max(extract: F) -> Self {
        Self {
            extract,
            finisher: Finisher::MinMax,
        }
    }

    /// A collector producing [`Statistic::MinMaxAverage`], with the average
    /// computed from the full-precision decimal sum and rounded to 2 decimal
    /// places half-up. Requires non-empty input.
    pub fn min_max_average(extract: F) -> Self {
        Self {
            extract,
            finisher: Finisher::MinMaxAverage,
        }
    }

    pub fn collect<'a, I>(&self, cars: I) -> Result<Statistic<Decimal>, CatalogError>
    where
        I: IntoIterator<Item = &'a Car>,
    {
        let values: Vec<Decimal> = cars.into_iter().map(&self.extract).collect();

        let min = values.iter().copied().min().unwrap_or(Decimal::ZERO);
        let max = values.iter().copied().max().unwrap_or(Decimal::ZERO);

        match self.finisher {
            Finisher::MinMax => Ok(Statistic::MinMax { min, max }),
            Finisher::MinMaxAverage => {
                if values.is_empty() {
                    return Err(CatalogError::Query(QueryError::EmptyRecordSet));
                }
                let sum = values.iter().fold(Decimal::ZERO, |acc, v| acc + *v);
                let average = (sum / Decimal::from(values.len() as u64))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                Ok(Statistic::MinMaxAverage { min, max, average })
            }
        }
    }
}
