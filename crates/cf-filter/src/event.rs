//! Typed filter-change events.
//!
//! UI widgets emit these; the core pipeline consumes them without knowing
//! anything about widget implementations.

use crate::state::{GroupChoice, NamedFilter, Selection};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Year(i32),
    Named(NamedFilter),
    Origins(Selection),
    Destinations(Selection),
    AgeGroup(GroupChoice),
    IncomeGroup(GroupChoice),
}
