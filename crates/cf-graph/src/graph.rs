//! Core graph data structures.

use cf_core::NodeId;

/// A node in the flow graph: one origin or destination area.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: NodeId,
    /// Formatted display name.
    pub name: String,
    /// Original raw identity, preserved for highlight matching.
    pub raw: String,
    /// Sum of finite incoming edge counts.
    pub inflow: f64,
    /// Sum of finite outgoing edge counts.
    pub outflow: f64,
}

impl FlowNode {
    pub fn has_outgoing(&self) -> bool {
        self.outflow > 0.0
    }
}

/// A directed weighted edge between two nodes.
///
/// Raw origin/destination identities ride along so the interaction layer
/// can match edges to nodes after layout replaces endpoint references.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub count: f64,
    pub origin: String,
    pub destination: String,
    pub year: i32,
    pub pct_no_vehicle: f64,
    pub pct_transit: f64,
    pub pct_carpool: f64,
    /// In the ten highest-count edges of this graph (visual emphasis tag).
    pub emphasized: bool,
}

impl FlowEdge {
    /// Whether this edge touches the node with the given raw identity.
    pub fn touches(&self, raw: &str) -> bool {
        self.origin == raw || self.destination == raw
    }
}

/// The built graph: nodes in deterministic left-to-right order, edges in
/// draw order (emphasized first, so they paint on top of nothing later).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    pub(crate) nodes: Vec<FlowNode>,
    pub(crate) edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&FlowNode> {
        self.nodes.get(id.index() as usize)
    }

    /// Largest edge count in the graph (all edge counts are finite).
    pub fn max_count(&self) -> f64 {
        self.edges.iter().map(|e| e.count).fold(0.0, f64::max)
    }

    /// Sum of all edge counts, for share-of-total labels.
    pub fn total_count(&self) -> f64 {
        self.edges.iter().map(|e| e.count).sum()
    }
}
