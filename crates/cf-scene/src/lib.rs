//! cf-scene: the drawable scene model and interaction state.
//!
//! Turns a laid-out graph plus the current interaction state into a fully
//! styled draw list. No rendering backend here: the UI layer only has to
//! paint what it is handed, so styling and the hover/focus state machine
//! stay testable without a window.

pub mod highlight;
pub mod labels;
pub mod scene;
pub mod style;

pub use highlight::{Emphasis, Interaction};
pub use labels::NodeLabel;
pub use scene::{EdgeTooltip, Scene, SceneEdge, SceneNode, build_scene};
pub use style::{EdgeStyle, Rgb, edge_style};
