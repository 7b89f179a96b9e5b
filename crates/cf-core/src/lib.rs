//! cf-core: stable foundation for commuteflow.
//!
//! Contains:
//! - ids (stable compact IDs for graph objects)
//! - format (display names, thousands grouping, group labels)
//! - error (shared error types)

pub mod error;
pub mod format;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CfError, CfResult};
pub use format::{display_name, group_display, thousands};
pub use ids::*;

/// Year assigned to records that arrive without one.
pub const DEFAULT_YEAR: i32 = 2022;
