//! Scene assembly: everything the painter needs, in draw order.

use cf_core::thousands;
use cf_layout::{LaidOutEdge, LaidOutGraph, LaidOutNode};

use crate::highlight::Interaction;
use crate::labels::{NodeLabel, node_label};
use crate::style::{EdgeStyle, edge_style};

/// Hover payload for one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTooltip {
    /// "Origin → Destination", display-formatted.
    pub title: String,
    pub year: i32,
    pub commuters: String,
    /// Share of the filtered total, e.g. "12.3%".
    pub share: String,
    pub pct_no_vehicle: String,
    pub pct_transit: String,
    pub pct_carpool: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdge {
    pub layout: LaidOutEdge,
    pub style: EdgeStyle,
    pub tooltip: EdgeTooltip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub layout: LaidOutNode,
    pub label: NodeLabel,
}

/// The full drawable scene. Edges are in z-order (first drawn first).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub edges: Vec<SceneEdge>,
    pub nodes: Vec<SceneNode>,
    pub max_count: f64,
    pub total_count: f64,
}

impl Scene {
    /// Recompute edge styles for a new interaction state, leaving
    /// geometry untouched. Cheap enough to run on every hover change.
    pub fn restyle(&mut self, interaction: &Interaction) {
        let emphasis = interaction.emphasis();
        for edge in &mut self.edges {
            edge.style = edge_style(&edge.layout, self.max_count, &emphasis);
        }
    }
}

/// Build the scene for a laid-out graph and interaction state.
pub fn build_scene(laid: &LaidOutGraph, interaction: &Interaction, viewport_width: f32) -> Scene {
    let max_count = laid.max_count();
    let total_count = laid.total_count();
    let emphasis = interaction.emphasis();

    let edges = laid
        .edges
        .iter()
        .map(|edge| SceneEdge {
            layout: edge.clone(),
            style: edge_style(edge, max_count, &emphasis),
            tooltip: tooltip(edge, laid, total_count),
        })
        .collect();

    let nodes = laid
        .nodes
        .iter()
        .map(|node| SceneNode {
            layout: node.clone(),
            label: node_label(node, viewport_width),
        })
        .collect();

    Scene {
        edges,
        nodes,
        max_count,
        total_count,
    }
}

fn tooltip(edge: &LaidOutEdge, laid: &LaidOutGraph, total_count: f64) -> EdgeTooltip {
    let source_name = laid
        .node(edge.source)
        .map(|n| n.name.as_str())
        .unwrap_or(edge.origin.as_str());
    let target_name = laid
        .node(edge.target)
        .map(|n| n.name.as_str())
        .unwrap_or(edge.destination.as_str());
    let share = if total_count > 0.0 {
        format!("{:.1}%", edge.count / total_count * 100.0)
    } else {
        "0.0%".to_string()
    };
    EdgeTooltip {
        title: format!("{source_name} → {target_name}"),
        year: edge.year,
        commuters: thousands(edge.count),
        share,
        pct_no_vehicle: format!("{:.1}%", edge.pct_no_vehicle),
        pct_transit: format!("{:.1}%", edge.pct_transit),
        pct_carpool: format!("{:.1}%", edge.pct_carpool),
    }
}
