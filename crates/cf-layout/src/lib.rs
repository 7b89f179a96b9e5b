//! cf-layout: coordinate assignment for the flow graph.
//!
//! The layout algorithm itself sits behind the [`LayoutEngine`] trait; this
//! crate owns the parameters (node thickness, padding, margins), the extent
//! derivation from the viewport, the built-in [`BandLayout`] engine, and the
//! adapter that reattaches raw node identities to laid-out edges.

pub mod band;
pub mod layout;
pub mod params;

pub use band::BandLayout;
pub use layout::{LaidOutEdge, LaidOutGraph, LaidOutNode, LayoutEngine, lay_out};
pub use params::{Extent, LayoutParams, Margins};
