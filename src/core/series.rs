use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Ordered, non-negative values rendered one bar each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    values: Vec<f64>,
    max_value: f64,
}

impl DataSeries {
    /// Validates and wraps `values`.
    ///
    /// Every value must be finite and `>= 0`.
    pub fn new(values: Vec<f64>) -> GraphResult<Self> {
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(GraphError::InvalidData(format!(
                "bar value at index {index} must be finite and >= 0, got {value}"
            )));
        }

        let max_value = values
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0);

        Ok(Self { values, max_value })
    }

    pub fn from_decimals(values: &[Decimal]) -> GraphResult<Self> {
        let converted = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.to_f64().ok_or_else(|| {
                    GraphError::InvalidData(format!(
                        "bar value at index {index} cannot be represented as f64"
                    ))
                })
            })
            .collect::<GraphResult<Vec<f64>>>()?;
        Self::new(converted)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value of the series, `0` when empty.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}
