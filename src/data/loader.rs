//! CSV Data Loader Module
//! Reads the sales file into a Polars DataFrame.

use polars::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Zero reads every column as text; numeric coercion happens in the processor.
const INFER_SCHEMA_ROWS: usize = 0;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The file '{}' was not found.", .0.display())]
    FileNotFound(PathBuf),
    #[error("The dataset file is empty.")]
    EmptyDataset,
    #[error("Error reading CSV file: {0}")]
    Parse(String),
}

impl From<PolarsError> for LoaderError {
    fn from(err: PolarsError) -> Self {
        match err {
            PolarsError::NoData(_) => LoaderError::EmptyDataset,
            other => LoaderError::Parse(other.to_string()),
        }
    }
}

/// Load a CSV file with a header row.
///
/// A missing file, a file without any data rows, and a file Polars cannot
/// parse are reported as distinct [`LoaderError`] kinds.
pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LoaderError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(LoaderError::Parse(e.to_string())),
    };
    if meta.len() == 0 {
        return Err(LoaderError::EmptyDataset);
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    if df.height() == 0 {
        return Err(LoaderError::EmptyDataset);
    }

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );
    debug!(schema = ?df.schema(), "schema");
    Ok(df)
}

/// Column names in header order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_csv_reads_header_and_rows() {
        let file = csv_file(
            "Manufacturer,Model,Sales_in_thousands\n\
             Toyota,Corolla,50\n\
             Honda,Civic,30\n",
        );
        let df = load_csv(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(
            column_names(&df),
            vec!["Manufacturer", "Model", "Sales_in_thousands"]
        );
    }

    #[test]
    fn load_csv_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match load_csv(&path) {
            Err(LoaderError::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_csv_reports_zero_byte_file_as_empty() {
        let file = csv_file("");
        assert!(matches!(
            load_csv(file.path()),
            Err(LoaderError::EmptyDataset)
        ));
    }

    #[test]
    fn load_csv_reports_header_only_file_as_empty() {
        let file = csv_file("Manufacturer,Model,Sales_in_thousands\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(LoaderError::EmptyDataset)
        ));
    }

    #[test]
    fn load_csv_keeps_late_non_numeric_values_as_text() {
        let mut contents = String::from("Manufacturer,Model,Sales_in_thousands\n");
        for _ in 0..10_050 {
            contents.push_str("Toyota,Corolla,5\n");
        }
        contents.push_str("Toyota,Corolla,1.5\n");
        contents.push_str("Honda,Civic,N/A\n");
        let file = csv_file(&contents);

        let df = load_csv(file.path()).unwrap();
        assert_eq!(df.height(), 10_052);
        assert_eq!(
            df.column("Sales_in_thousands").unwrap().dtype(),
            &DataType::String
        );
    }

    #[test]
    fn load_csv_reports_extra_fields_as_parse_error() {
        let file = csv_file(
            "Manufacturer,Model,Sales_in_thousands\n\
             Toyota,Corolla,50\n\
             Honda,Civic,30,extra,fields\n",
        );
        match load_csv(file.path()) {
            Err(e @ LoaderError::Parse(_)) => {
                assert!(e.to_string().starts_with("Error reading CSV file: "))
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn load_csv_reports_invalid_utf8_as_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Manufacturer,Model,Sales_in_thousands\nToyota,Cor\xff\xfeolla,50\n")
            .unwrap();
        file.flush().unwrap();
        assert!(matches!(load_csv(file.path()), Err(LoaderError::Parse(_))));
    }

    #[test]
    fn not_found_message_names_the_file() {
        let err = LoaderError::FileNotFound(PathBuf::from("car_sales.csv"));
        assert_eq!(err.to_string(), "The file 'car_sales.csv' was not found.");
    }
}
