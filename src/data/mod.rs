//! Data module - CSV loading, validation and aggregation

mod loader;
mod processor;
mod validator;

pub use loader::{column_names, load_csv, LoaderError};
pub use processor::{prepare_sales, ModelSales, ProcessorError};
pub use validator::{require_columns, ValidationError};
