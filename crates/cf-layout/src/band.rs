//! Built-in two-band layout engine.
//!
//! Origins stack in a left column, destination-only nodes in a right
//! column. Node heights are proportional to node throughput; ribbon
//! anchors stack along each node in edge draw order.

use std::collections::HashMap;

use cf_graph::{FlowGraph, FlowNode};

use crate::layout::{LaidOutEdge, LaidOutGraph, LaidOutNode, LayoutEngine};
use crate::params::{Extent, LayoutParams};

pub struct BandLayout;

impl LayoutEngine for BandLayout {
    fn layout(&self, graph: &FlowGraph, params: &LayoutParams, extent: Extent) -> LaidOutGraph {
        let (left, right): (Vec<&FlowNode>, Vec<&FlowNode>) =
            graph.nodes().iter().partition(|n| n.has_outgoing());

        // One pixels-per-commuter scale for both columns, so a node's
        // height means the same thing on either side.
        let scale = [&left, &right]
            .into_iter()
            .filter(|col| !col.is_empty())
            .map(|col| column_scale(col, params, extent))
            .fold(f64::INFINITY, f64::min);
        let scale = if scale.is_finite() { scale } else { 1.0 };

        let mut nodes: Vec<Option<LaidOutNode>> = vec![None; graph.nodes().len()];
        place_column(&left, extent.x0, params, extent, scale, &mut nodes);
        place_column(
            &right,
            extent.x1 - params.node_width,
            params,
            extent,
            scale,
            &mut nodes,
        );
        let nodes: Vec<LaidOutNode> = nodes.into_iter().flatten().collect();

        // Stack ribbon anchors along each node in edge order.
        let mut out_offset: HashMap<u32, f32> = HashMap::new();
        let mut in_offset: HashMap<u32, f32> = HashMap::new();
        let edges = graph
            .edges()
            .iter()
            .map(|edge| {
                let width = (edge.count * scale).max(1.0) as f32;
                let source_top = nodes[edge.source.index() as usize].y0;
                let target_top = nodes[edge.target.index() as usize].y0;
                let so = out_offset.entry(edge.source.index()).or_insert(0.0);
                let source_y = source_top + *so + width / 2.0;
                *so += width;
                let to = in_offset.entry(edge.target.index()).or_insert(0.0);
                let target_y = target_top + *to + width / 2.0;
                *to += width;
                LaidOutEdge {
                    source: edge.source,
                    target: edge.target,
                    count: edge.count,
                    width,
                    source_y,
                    target_y,
                    origin: edge.origin.clone(),
                    destination: edge.destination.clone(),
                    year: edge.year,
                    pct_no_vehicle: edge.pct_no_vehicle,
                    pct_transit: edge.pct_transit,
                    pct_carpool: edge.pct_carpool,
                    emphasized: edge.emphasized,
                }
            })
            .collect();

        LaidOutGraph { nodes, edges }
    }
}

/// Pixels per unit of throughput that lets the column fit its extent.
fn column_scale(column: &[&FlowNode], params: &LayoutParams, extent: Extent) -> f64 {
    let total: f64 = column.iter().map(|n| throughput(n)).sum();
    if total <= 0.0 {
        return f64::INFINITY;
    }
    let padding = params.node_padding * (column.len().saturating_sub(1)) as f32;
    let available = (extent.height() - padding).max(1.0) as f64;
    available / total
}

fn throughput(node: &FlowNode) -> f64 {
    node.inflow.max(node.outflow)
}

fn place_column(
    column: &[&FlowNode],
    x0: f32,
    params: &LayoutParams,
    extent: Extent,
    scale: f64,
    out: &mut [Option<LaidOutNode>],
) {
    let mut y = extent.y0;
    for node in column {
        let height = ((throughput(node) * scale) as f32).max(1.0);
        out[node.id.index() as usize] = Some(LaidOutNode {
            id: node.id,
            name: node.name.clone(),
            raw: node.raw.clone(),
            x0,
            y0: y,
            x1: x0 + params.node_width,
            y1: y + height,
            inflow: node.inflow,
            outflow: node.outflow,
            has_outgoing: node.has_outgoing(),
        });
        y += height + params.node_padding;
    }
}
