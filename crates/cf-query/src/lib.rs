//! cf-query: filtering and aggregation over the commute dataset.
//!
//! Provides:
//! - The ranked top-flow query that feeds the diagram ([`top_flows`])
//! - The wider CSV export snapshot ([`export::export_rows`])

pub mod engine;
pub mod export;

pub use engine::{AggregatedFlow, MAX_FLOWS, top_flows};
pub use export::{CSV_HEADER, ExportRow, export_rows, to_csv};
