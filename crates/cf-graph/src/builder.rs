//! Flow graph construction from ranked aggregated flows.

use std::collections::{HashMap, HashSet};

use cf_core::{NodeId, display_name};
use cf_query::AggregatedFlow;

use crate::graph::{FlowEdge, FlowGraph, FlowNode};

/// How many of the highest-count edges get the visual-emphasis tag.
pub const TOP_EMPHASIZED: usize = 10;

/// Build the graph for a ranked flow list.
///
/// Node ordering is deterministic for a given flow set: origins sorted by
/// descending outflow, then destinations not already present sorted by
/// descending inflow; ties keep their input relative order (stable sort).
/// Edges with non-finite counts or unresolvable endpoints are dropped;
/// upstream filtering should already prevent both.
pub fn build_flow_graph(flows: &[AggregatedFlow]) -> FlowGraph {
    // Role-derived totals over finite counts.
    let mut outflow: HashMap<&str, f64> = HashMap::new();
    let mut inflow: HashMap<&str, f64> = HashMap::new();
    for flow in flows {
        if flow.count.is_finite() {
            *outflow.entry(flow.origin.as_str()).or_insert(0.0) += flow.count;
            *inflow.entry(flow.destination.as_str()).or_insert(0.0) += flow.count;
        }
    }

    let mut origins = unique_in_order(flows.iter().map(|f| f.origin.as_str()));
    origins.sort_by(|a, b| {
        let (ta, tb) = (total(&outflow, a), total(&outflow, b));
        tb.partial_cmp(&ta).unwrap_or(std::cmp::Ordering::Equal)
    });

    let origin_set: HashSet<&str> = origins.iter().copied().collect();
    let mut destinations: Vec<&str> =
        unique_in_order(flows.iter().map(|f| f.destination.as_str()))
            .into_iter()
            .filter(|d| !origin_set.contains(d))
            .collect();
    destinations.sort_by(|a, b| {
        let (ta, tb) = (total(&inflow, a), total(&inflow, b));
        tb.partial_cmp(&ta).unwrap_or(std::cmp::Ordering::Equal)
    });

    // Dense zero-based ids: origins first, then destination-only nodes.
    let mut index: HashMap<&str, NodeId> = HashMap::new();
    let mut nodes = Vec::with_capacity(origins.len() + destinations.len());
    for raw in origins.into_iter().chain(destinations) {
        let id = NodeId::from_index(nodes.len() as u32);
        index.insert(raw, id);
        nodes.push(FlowNode {
            id,
            name: display_name(raw),
            raw: raw.to_string(),
            inflow: total(&inflow, raw),
            outflow: total(&outflow, raw),
        });
    }

    let mut edges: Vec<FlowEdge> = Vec::with_capacity(flows.len());
    for flow in flows {
        if !flow.count.is_finite() {
            continue;
        }
        let (Some(&source), Some(&target)) = (
            index.get(flow.origin.as_str()),
            index.get(flow.destination.as_str()),
        ) else {
            continue;
        };
        edges.push(FlowEdge {
            source,
            target,
            count: flow.count,
            origin: flow.origin.clone(),
            destination: flow.destination.clone(),
            year: flow.year,
            pct_no_vehicle: flow.pct_no_vehicle,
            pct_transit: flow.pct_transit,
            pct_carpool: flow.pct_carpool,
            emphasized: false,
        });
    }

    tag_and_front_load_top_edges(&mut edges);

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "built flow graph"
    );
    FlowGraph { nodes, edges }
}

/// Tag the top-N edges by count and move them to the front of the list
/// in descending order; the remainder keeps its relative order. Draw
/// order is z-order, so tagged edges paint first.
fn tag_and_front_load_top_edges(edges: &mut Vec<FlowEdge>) {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| {
        edges[b]
            .count
            .partial_cmp(&edges[a].count)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let top: Vec<usize> = order.into_iter().take(TOP_EMPHASIZED).collect();
    for &i in &top {
        edges[i].emphasized = true;
    }

    let top_set: HashSet<usize> = top.iter().copied().collect();
    let mut reordered = Vec::with_capacity(edges.len());
    for &i in &top {
        reordered.push(edges[i].clone());
    }
    for (i, edge) in edges.iter().enumerate() {
        if !top_set.contains(&i) {
            reordered.push(edge.clone());
        }
    }
    *edges = reordered;
}

fn unique_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item) {
            out.push(item);
        }
    }
    out
}

fn total(map: &HashMap<&str, f64>, key: &str) -> f64 {
    map.get(key).copied().unwrap_or(0.0)
}
