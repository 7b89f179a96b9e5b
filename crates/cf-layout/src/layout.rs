//! Laid-out graph types, the engine trait, and the identity-reattaching
//! adapter.

use cf_core::{CfError, CfResult, NodeId};
use cf_graph::FlowGraph;

use crate::params::{Extent, LayoutParams};

/// A node with assigned coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutNode {
    pub id: NodeId,
    pub name: String,
    pub raw: String,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub inflow: f64,
    pub outflow: f64,
    pub has_outgoing: bool,
}

impl LaidOutNode {
    pub fn span(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// An edge with ribbon geometry.
///
/// `origin`/`destination` are the raw node identities; the adapter
/// guarantees they are populated after layout, whatever the engine did
/// to the endpoint references.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub count: f64,
    /// Ribbon thickness in pixels.
    pub width: f32,
    /// Vertical center of the ribbon at the source node.
    pub source_y: f32,
    /// Vertical center of the ribbon at the target node.
    pub target_y: f32,
    pub origin: String,
    pub destination: String,
    pub year: i32,
    pub pct_no_vehicle: f64,
    pub pct_transit: f64,
    pub pct_carpool: f64,
    pub emphasized: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutGraph {
    pub nodes: Vec<LaidOutNode>,
    pub edges: Vec<LaidOutEdge>,
}

impl LaidOutGraph {
    pub fn node(&self, id: NodeId) -> Option<&LaidOutNode> {
        self.nodes.get(id.index() as usize)
    }

    /// Largest edge count, for stroke-width scaling.
    pub fn max_count(&self) -> f64 {
        self.edges.iter().map(|e| e.count).fold(0.0, f64::max)
    }

    /// Sum of all edge counts, for share-of-total labels.
    pub fn total_count(&self) -> f64 {
        self.edges.iter().map(|e| e.count).sum()
    }
}

/// The external-collaborator seam: a coordinate solver for flow graphs.
pub trait LayoutEngine {
    fn layout(&self, graph: &FlowGraph, params: &LayoutParams, extent: Extent) -> LaidOutGraph;
}

/// Lay out a graph within a viewport.
///
/// Derives the extent from the viewport minus margins, runs the engine,
/// then reattaches each edge's raw origin/destination identity from the
/// node table so highlight matching never depends on engine behavior.
/// Engine output whose edges reference nodes outside the graph's node
/// table is rejected.
pub fn lay_out(
    graph: &FlowGraph,
    params: &LayoutParams,
    viewport: (f32, f32),
    engine: &dyn LayoutEngine,
) -> CfResult<LaidOutGraph> {
    let extent = params.extent(viewport.0, viewport.1)?;
    let mut laid = engine.layout(graph, params, extent);
    reattach_identities(&mut laid, graph)?;
    Ok(laid)
}

fn reattach_identities(laid: &mut LaidOutGraph, graph: &FlowGraph) -> CfResult<()> {
    for edge in &mut laid.edges {
        let source = graph.node(edge.source).ok_or(CfError::Invariant {
            what: "laid-out edge references an unknown source node",
        })?;
        let target = graph.node(edge.target).ok_or(CfError::Invariant {
            what: "laid-out edge references an unknown target node",
        })?;
        edge.origin = source.raw.clone();
        edge.destination = target.raw.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::BandLayout;
    use cf_graph::build_flow_graph;
    use cf_query::AggregatedFlow;

    fn flow(origin: &str, destination: &str, count: f64) -> AggregatedFlow {
        AggregatedFlow {
            origin: origin.into(),
            destination: destination.into(),
            year: 2022,
            count,
            group: "age_<=29".into(),
            pct_no_vehicle: 0.0,
            pct_transit: 0.0,
            pct_carpool: 0.0,
        }
    }

    /// An engine that loses the raw identities, as a real solver might when
    /// it swaps endpoint references for node objects.
    struct ErasingEngine;

    impl LayoutEngine for ErasingEngine {
        fn layout(
            &self,
            graph: &FlowGraph,
            params: &LayoutParams,
            extent: Extent,
        ) -> LaidOutGraph {
            let mut laid = BandLayout.layout(graph, params, extent);
            for edge in &mut laid.edges {
                edge.origin.clear();
                edge.destination.clear();
            }
            laid
        }
    }

    #[test]
    fn adapter_reattaches_raw_identities() {
        let graph = build_flow_graph(&[flow("DOWNTOWN", "MIDTOWN", 10.0)]);
        let laid = lay_out(
            &graph,
            &LayoutParams::default(),
            (1000.0, 600.0),
            &ErasingEngine,
        )
        .unwrap();

        assert_eq!(laid.edges[0].origin, "DOWNTOWN");
        assert_eq!(laid.edges[0].destination, "MIDTOWN");
    }

    #[test]
    fn lay_out_rejects_tiny_viewports() {
        let graph = build_flow_graph(&[flow("A", "B", 1.0)]);
        let result = lay_out(&graph, &LayoutParams::default(), (200.0, 80.0), &BandLayout);
        assert!(result.is_err());
    }

    /// An engine that rewires an edge to a node outside the graph.
    struct RogueEngine;

    impl LayoutEngine for RogueEngine {
        fn layout(
            &self,
            graph: &FlowGraph,
            params: &LayoutParams,
            extent: Extent,
        ) -> LaidOutGraph {
            let mut laid = BandLayout.layout(graph, params, extent);
            for edge in &mut laid.edges {
                edge.target = NodeId::from_index(laid.nodes.len() as u32 + 7);
            }
            laid
        }
    }

    #[test]
    fn lay_out_rejects_edges_to_unknown_nodes() {
        let graph = build_flow_graph(&[flow("A", "B", 1.0)]);
        let result = lay_out(
            &graph,
            &LayoutParams::default(),
            (1000.0, 600.0),
            &RogueEngine,
        );
        assert!(matches!(
            result,
            Err(cf_core::CfError::Invariant { .. })
        ));
    }
}
