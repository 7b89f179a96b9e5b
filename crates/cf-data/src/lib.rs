//! cf-data: commute dataset format, loading, and normalization.
//!
//! The input document is best-effort JSON: numeric fields may arrive as
//! numbers, strings, or be missing entirely. Loading performs no validation
//! beyond parsing; coercion is deferred to the aggregation stage.

pub mod groups;
pub mod normalize;
pub mod schema;

pub use groups::{AGE_GROUPS, GroupCatalog, is_age_group, is_income_group};
pub use normalize::normalize;
pub use schema::{Dataset, FlowRecord, RawValue};

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and normalize a dataset from a JSON file.
///
/// The returned dataset is intended to be immutable for the session.
pub fn load_dataset(path: &std::path::Path) -> DataResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let mut dataset: Dataset = serde_json::from_str(&content)?;
    normalize(&mut dataset);
    Ok(dataset)
}

/// Parse and normalize a dataset from an in-memory JSON document.
pub fn parse_dataset(content: &str) -> DataResult<Dataset> {
    let mut dataset: Dataset = serde_json::from_str(content)?;
    normalize(&mut dataset);
    Ok(dataset)
}
