//! Edge and node styling rules.

use cf_layout::LaidOutEdge;

use crate::highlight::Emphasis;

/// Backend-agnostic sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Color for emphasized edges (top-10 tag, hover, focus).
pub const EMPHASIS_COLOR: Rgb = Rgb(0x1f, 0x78, 0xb4);
/// Color for everything else.
pub const NEUTRAL_COLOR: Rgb = Rgb(0xbb, 0xbb, 0xbb);
/// Node rectangle fill.
pub const NODE_FILL: Rgb = Rgb(0x7b, 0x9a, 0xcc);
/// Primary label text.
pub const LABEL_PRIMARY: Rgb = Rgb(0x11, 0x11, 0x11);
/// Secondary (total) label text.
pub const LABEL_SECONDARY: Rgb = Rgb(0x66, 0x66, 0x66);

pub const BASE_OPACITY: f32 = 0.7;
pub const EMPHASIS_OPACITY: f32 = 0.9;
pub const HOVER_DIM_OPACITY: f32 = 0.1;
pub const FOCUS_DIM_OPACITY: f32 = 0.05;

/// Baseline stroke width scales with count relative to the largest flow
/// in the current filtered set, floored to stay visible.
pub const WIDTH_SCALE: f32 = 15.0;
pub const BASE_MIN_WIDTH: f32 = 1.5;
pub const DIM_MIN_WIDTH: f32 = 1.0;
pub const EMPHASIS_MIN_WIDTH: f32 = 2.5;

/// Complete stroke styling for one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub color: Rgb,
    pub opacity: f32,
    pub width: f32,
}

/// Style an edge under the current emphasis.
///
/// Neutral styling is a single definition used everywhere, so leaving
/// hover or focus restores it exactly.
pub fn edge_style(edge: &LaidOutEdge, max_count: f64, emphasis: &Emphasis) -> EdgeStyle {
    match emphasis {
        Emphasis::None => baseline(edge, max_count),
        Emphasis::Hover(raw) => highlighted(edge, raw, HOVER_DIM_OPACITY),
        Emphasis::Focus(raw) => highlighted(edge, raw, FOCUS_DIM_OPACITY),
    }
}

fn baseline(edge: &LaidOutEdge, max_count: f64) -> EdgeStyle {
    let scaled = if max_count > 0.0 {
        (edge.count / max_count) as f32 * WIDTH_SCALE
    } else {
        0.0
    };
    EdgeStyle {
        color: if edge.emphasized {
            EMPHASIS_COLOR
        } else {
            NEUTRAL_COLOR
        },
        opacity: BASE_OPACITY,
        width: scaled.max(BASE_MIN_WIDTH),
    }
}

fn highlighted(edge: &LaidOutEdge, raw: &str, dim_opacity: f32) -> EdgeStyle {
    let touches = edge.origin == raw || edge.destination == raw;
    if touches {
        EdgeStyle {
            color: EMPHASIS_COLOR,
            opacity: EMPHASIS_OPACITY,
            width: edge.width.max(EMPHASIS_MIN_WIDTH),
        }
    } else {
        EdgeStyle {
            color: NEUTRAL_COLOR,
            opacity: dim_opacity,
            width: edge.width.max(DIM_MIN_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::NodeId;

    fn edge(count: f64, emphasized: bool) -> LaidOutEdge {
        LaidOutEdge {
            source: NodeId::from_index(0),
            target: NodeId::from_index(1),
            count,
            width: 6.0,
            source_y: 0.0,
            target_y: 0.0,
            origin: "A".into(),
            destination: "B".into(),
            year: 2022,
            pct_no_vehicle: 0.0,
            pct_transit: 0.0,
            pct_carpool: 0.0,
            emphasized,
        }
    }

    #[test]
    fn baseline_width_scales_with_share_of_max() {
        let style = edge_style(&edge(50.0, false), 100.0, &Emphasis::None);
        assert_eq!(style.width, 7.5);
        assert_eq!(style.opacity, BASE_OPACITY);
        assert_eq!(style.color, NEUTRAL_COLOR);
    }

    #[test]
    fn baseline_width_is_floored() {
        let style = edge_style(&edge(1.0, false), 1000.0, &Emphasis::None);
        assert_eq!(style.width, BASE_MIN_WIDTH);
    }

    #[test]
    fn top_tag_recolors_baseline() {
        let style = edge_style(&edge(50.0, true), 100.0, &Emphasis::None);
        assert_eq!(style.color, EMPHASIS_COLOR);
    }

    #[test]
    fn hover_emphasizes_touching_and_dims_others() {
        let touching = edge_style(&edge(50.0, false), 100.0, &Emphasis::Hover("A".into()));
        assert_eq!(touching.opacity, EMPHASIS_OPACITY);
        assert_eq!(touching.color, EMPHASIS_COLOR);
        assert_eq!(touching.width, 6.0);

        let other = edge_style(&edge(50.0, false), 100.0, &Emphasis::Hover("Z".into()));
        assert_eq!(other.opacity, HOVER_DIM_OPACITY);
        assert_eq!(other.color, NEUTRAL_COLOR);
    }

    #[test]
    fn focus_dims_deeper_than_hover() {
        let other = edge_style(&edge(50.0, false), 100.0, &Emphasis::Focus("Z".into()));
        assert_eq!(other.opacity, FOCUS_DIM_OPACITY);
    }
}
