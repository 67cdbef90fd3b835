//! Data Processor Module
//! Coerces the sales column, drops unusable rows and sums sales per model.

use polars::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Sales data appears empty after grouping.")]
    EmptyAfterAggregation,
    #[error("Cannot group by column '{column}': {source}")]
    Grouping {
        column: String,
        #[source]
        source: PolarsError,
    },
    #[error("Unexpected error while preparing data: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Total sales per model, ordered by total descending.
///
/// Models with equal totals keep lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelSales {
    entries: Vec<(String, f64)>,
}

impl ModelSales {
    /// Build from unordered totals, applying the descending sort.
    pub fn from_totals(totals: BTreeMap<String, f64>) -> Self {
        let mut entries: Vec<(String, f64)> = totals.into_iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(m, v)| (m.as_str(), *v))
    }

    pub fn models(&self) -> Vec<&str> {
        self.entries.iter().map(|(m, _)| m.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    #[cfg(test)]
    pub fn get(&self, model: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(m, _)| m == model)
            .map(|(_, v)| *v)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    pub fn max(&self) -> f64 {
        self.entries.first().map(|(_, v)| *v).unwrap_or(0.0)
    }

    /// The `n` best-selling models (all of them if fewer exist).
    pub fn top(&self, n: usize) -> ModelSales {
        Self {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }
}

/// Reinterpret `value_col` as Float64 and drop rows where it is missing.
///
/// Unparseable text becomes null instead of failing; NaN counts as missing.
pub fn clean_sales(mut df: DataFrame, value_col: &str) -> Result<DataFrame, ProcessorError> {
    let before = df.height();
    let coerced = df.column(value_col)?.cast(&DataType::Float64)?;
    df.with_column(coerced)?;

    let mask: BooleanChunked = df
        .column(value_col)?
        .f64()?
        .into_iter()
        .map(|v| v.is_some_and(|v| !v.is_nan()))
        .collect();
    let cleaned = df.filter(&mask)?;

    debug!(
        dropped = before - cleaned.height(),
        kept = cleaned.height(),
        "non-numeric sales rows removed"
    );
    Ok(cleaned)
}

/// Sum `value_col` per distinct `key_col`. Rows without a key are skipped.
pub fn aggregate_sales(
    df: &DataFrame,
    key_col: &str,
    value_col: &str,
) -> Result<ModelSales, ProcessorError> {
    let grouping = |source| ProcessorError::Grouping {
        column: key_col.to_string(),
        source,
    };
    let keys = df
        .column(key_col)
        .and_then(|c| c.cast(&DataType::String))
        .map_err(grouping)?;
    let values = df.column(value_col)?.cast(&DataType::Float64)?;

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (key, value) in keys.str().map_err(grouping)?.into_iter().zip(values.f64()?) {
        if let (Some(k), Some(v)) = (key, value) {
            *totals.entry(k.to_string()).or_default() += v;
        }
    }

    let sales = ModelSales::from_totals(totals);
    if sales.is_empty() {
        return Err(ProcessorError::EmptyAfterAggregation);
    }
    info!(models = sales.len(), total = sales.total(), "sales aggregated");
    Ok(sales)
}

/// Clean the raw table and aggregate it.
///
/// Returns the cleaned table (used for the preview) alongside the totals.
pub fn prepare_sales(
    df: DataFrame,
    key_col: &str,
    value_col: &str,
) -> Result<(DataFrame, ModelSales), ProcessorError> {
    let cleaned = clean_sales(df, value_col)?;
    let sales = aggregate_sales(&cleaned, key_col, value_col)?;
    Ok((cleaned, sales))
}
