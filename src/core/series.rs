use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Index-aligned category labels and values forming one chart dataset.
///
/// Series are supplied by the host page and treated as read-only input.
/// Alignment between `labels` and `values` is the data provider's
/// responsibility; nothing here rejects a mismatched pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    #[must_use]
    pub fn new<L, S>(labels: L, values: Vec<f64>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            values,
        }
    }

    /// Builds a series from exact decimal counts.
    pub fn from_decimal_values<L, S>(labels: L, values: &[Decimal]) -> DashboardResult<Self>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut converted = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let as_f64 = value.to_f64().filter(|v| v.is_finite()).ok_or_else(|| {
                DashboardError::InvalidData(format!(
                    "series value at index {index} is not representable as f64"
                ))
            })?;
            converted.push(as_f64);
        }
        Ok(Self::new(labels, converted))
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.values.len()
    }
}
