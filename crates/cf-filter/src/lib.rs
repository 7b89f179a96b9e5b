//! cf-filter: the filter model for the flow explorer.
//!
//! [`FilterState`] is an immutable value: UI layers emit [`FilterEvent`]s
//! and apply them through [`FilterState::apply`], which returns the next
//! state. The rendering pipeline is then a pure function of
//! (dataset, filter state), callable from any binding layer.

pub mod event;
pub mod state;

pub use event::FilterEvent;
pub use state::{FilterState, GroupChoice, NamedFilter, Selection};
