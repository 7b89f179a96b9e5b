//! cf-graph: the flow graph fed to layout.
//!
//! Provides:
//! - Core graph data structures ([`FlowNode`], [`FlowEdge`], [`FlowGraph`])
//! - The builder that turns ranked [`cf_query::AggregatedFlow`]s into a
//!   graph with deterministic node ordering and top-10 edge tagging
//!
//! # Example
//!
//! ```
//! use cf_graph::build_flow_graph;
//! use cf_query::AggregatedFlow;
//!
//! let flows = vec![AggregatedFlow {
//!     origin: "DOWNTOWN".into(),
//!     destination: "MIDTOWN".into(),
//!     year: 2022,
//!     count: 120.0,
//!     group: "age_<=29".into(),
//!     pct_no_vehicle: 0.0,
//!     pct_transit: 0.0,
//!     pct_carpool: 0.0,
//! }];
//! let graph = build_flow_graph(&flows);
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.edges().len(), 1);
//! ```

pub mod builder;
pub mod graph;

pub use builder::{TOP_EMPHASIZED, build_flow_graph};
pub use graph::{FlowEdge, FlowGraph, FlowNode};
