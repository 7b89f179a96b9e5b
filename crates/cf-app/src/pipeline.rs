//! The render pipeline as a pure function.
//!
//! Every interaction triggers a full recompute: filter → aggregate →
//! build graph → lay out → style. No caching across calls; the
//! worst-case cost is O(records + nodes + edges) per interaction, which
//! is the policy here (no incremental scene diffing).

use cf_data::schema::FlowRecord;
use cf_filter::FilterState;
use cf_graph::build_flow_graph;
use cf_layout::{BandLayout, LayoutParams, lay_out};
use cf_scene::{Interaction, Scene};

use crate::error::AppResult;

/// Pixel dimensions of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Compute the drawable scene for the current dataset, filter, and
/// interaction state.
pub fn build_scene(
    records: &[FlowRecord],
    filter: &FilterState,
    viewport: Viewport,
    interaction: &Interaction,
) -> AppResult<Scene> {
    let flows = cf_query::top_flows(records, filter);
    let graph = build_flow_graph(&flows);
    let laid = lay_out(
        &graph,
        &LayoutParams::default(),
        (viewport.width, viewport.height),
        &BandLayout,
    )?;
    let scene = cf_scene::build_scene(&laid, interaction, viewport.width);

    tracing::debug!(
        edges = scene.edges.len(),
        nodes = scene.nodes.len(),
        "rebuilt scene"
    );
    Ok(scene)
}
