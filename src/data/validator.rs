//! Column Validator Module
//! Gate that stops the pipeline when a required column is absent.

use polars::prelude::*;
use thiserror::Error;

use super::loader::column_names;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required column: '{column}' in dataset.")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}

/// Check that every column in `required` exists, in order.
///
/// Stops at the first missing column and carries the full header so the
/// caller can show what was actually present.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), ValidationError> {
    let available = column_names(df);
    match required
        .iter()
        .find(|name| !available.iter().any(|c| c == *name))
    {
        Some(missing) => Err(ValidationError::MissingColumn {
            column: missing.to_string(),
            available,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df!(
            "Manufacturer" => ["Toyota"],
            "Model" => ["Corolla"],
            "Price" => [20.5],
        )
        .unwrap()
    }

    #[test]
    fn require_columns_passes_when_all_present() {
        assert_eq!(require_columns(&frame(), &["Model", "Manufacturer"]), Ok(()));
    }

    #[test]
    fn require_columns_reports_first_missing_with_full_header() {
        let err = require_columns(&frame(), &["Model", "Sales_in_thousands", "Other"])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingColumn {
                column: "Sales_in_thousands".into(),
                available: vec!["Manufacturer".into(), "Model".into(), "Price".into()],
            }
        );
    }

    #[test]
    fn column_match_is_case_sensitive() {
        assert!(require_columns(&frame(), &["model"]).is_err());
    }
}
