//! Two-line node labels.

use cf_core::thousands;
use cf_layout::LaidOutNode;

/// Secondary total line is dropped for slivers thinner than this.
const MIN_SPAN_FOR_TOTAL: f32 = 3.0;

/// Horizontal offsets from the node rectangle.
const LEFT_LABEL_OFFSET: f32 = 80.0;
const RIGHT_LABEL_OFFSET: f32 = 10.0;

/// A node label: name on the first line, rounded total on the second.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLabel {
    pub x: f32,
    pub y: f32,
    pub primary: String,
    pub secondary: Option<String>,
    pub raw: String,
}

/// Position and text for a node's label.
///
/// Nodes in the left half of the diagram label to their left, the rest to
/// their right. The total is outflow for nodes with outgoing edges,
/// inflow otherwise.
pub fn node_label(node: &LaidOutNode, diagram_width: f32) -> NodeLabel {
    let on_left = node.x0 < diagram_width / 2.0;
    let x = if on_left {
        node.x0 - LEFT_LABEL_OFFSET
    } else {
        node.x1 + RIGHT_LABEL_OFFSET
    };
    let total = if node.has_outgoing {
        node.outflow
    } else {
        node.inflow
    };
    let secondary =
        (node.span() > MIN_SPAN_FOR_TOTAL).then(|| format!("({})", thousands(total)));

    NodeLabel {
        x,
        y: (node.y0 + node.y1) / 2.0,
        primary: node.name.clone(),
        secondary,
        raw: node.raw.clone(),
    }
}
