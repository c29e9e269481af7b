//! Summary statistics produced by aggregation queries

use serde::Serialize;

/// A summary over one numeric field of a record set.
///
/// Produced once per aggregation call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statistic<T> {
    /// Minimum and maximum under natural ordering
    MinMax { min: T, max: T },

    /// Minimum, maximum, and the average rounded to 2 decimal places
    MinMaxAverage { min: T, max: T, average: T },
}

impl<T> Statistic<T> {
    pub fn min(&self) -> &T {
        match self {
            Statistic::MinMax { min, .. } | Statistic::MinMaxAverage { min, .. } => min,
        }
    }

    pub fn max(&self) -> &T {
        match self {
            Statistic::MinMax { max, .. } | Statistic::MinMaxAverage { max, .. } => max,
        }
    }

    /// The average, when this statistic carries one
    pub fn average(&self) -> Option<&T> {
        match self {
            Statistic::MinMax { .. } => None,
            Statistic::MinMaxAverage { average, .. } => Some(average),
        }
    }
}
