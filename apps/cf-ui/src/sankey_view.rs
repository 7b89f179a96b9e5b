//! Painter for the flow diagram.
//!
//! Paints a [`Scene`] verbatim and reports hit-test results; it holds no
//! state of its own, so all interaction policy stays in cf-scene.

use cf_scene::{Rgb, Scene, SceneEdge, style};
use egui::epaint::{CubicBezierShape, PathStroke};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Vec2};

/// How close the pointer must be to a ribbon centerline to hover it,
/// beyond half the stroke width.
const EDGE_HOVER_SLACK: f32 = 2.0;

/// Samples per ribbon for pointer distance checks.
const EDGE_HOVER_SAMPLES: u32 = 24;

const LABEL_FONT: f32 = 12.0;
const LABEL_LINE_STEP: f32 = 14.0;

/// Duration of the opacity transition when highlight state changes.
const HIGHLIGHT_ANIM_SECS: f32 = 0.2;

/// Hit-test results for one frame.
#[derive(Debug, Default)]
pub struct SankeyResponse {
    /// Raw identity of the node (or label) under the pointer.
    pub hovered_node: Option<String>,
    /// Raw identity of the node clicked this frame.
    pub clicked_node: Option<String>,
}

pub fn show(ui: &mut egui::Ui, scene: &Scene) -> SankeyResponse {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    let offset = rect.min.to_vec2();
    let pointer = response.hover_pos();

    let mut hovered_edge: Option<&SceneEdge> = None;
    for (i, edge) in scene.edges.iter().enumerate() {
        let Some(ribbon) = ribbon_points(scene, edge, offset) else {
            continue;
        };
        // Ease opacity toward the styled target so highlight changes fade
        // instead of snapping.
        let opacity = ui.ctx().animate_value_with_time(
            egui::Id::new(("flow_edge_opacity", i)),
            edge.style.opacity,
            HIGHLIGHT_ANIM_SECS,
        );
        let stroke_width = edge.style.width;
        painter.add(CubicBezierShape::from_points_stroke(
            ribbon,
            false,
            Color32::TRANSPARENT,
            PathStroke::new(stroke_width, color(edge.style.color, opacity)),
        ));

        if let Some(pos) = pointer {
            if hovered_edge.is_none()
                && bezier_distance(ribbon, pos) <= stroke_width / 2.0 + EDGE_HOVER_SLACK
            {
                hovered_edge = Some(edge);
            }
        }
    }

    let mut out = SankeyResponse::default();
    for node in &scene.nodes {
        let node_rect = Rect::from_min_max(
            Pos2::new(node.layout.x0, node.layout.y0) + offset,
            Pos2::new(node.layout.x1, node.layout.y1) + offset,
        );
        painter.rect_filled(node_rect, 0.0, color(style::NODE_FILL, 1.0));

        let label_rect = draw_label(&painter, node, offset);

        let hit = pointer
            .map(|pos| node_rect.contains(pos) || label_rect.is_some_and(|r| r.contains(pos)))
            .unwrap_or(false);
        if hit {
            out.hovered_node = Some(node.layout.raw.clone());
            if response.clicked() {
                out.clicked_node = Some(node.layout.raw.clone());
            }
        }
    }

    // Edge tooltips only when no node claims the pointer.
    if out.hovered_node.is_none() {
        if let Some(edge) = hovered_edge {
            show_edge_tooltip(ui, edge);
        }
    }

    out
}

/// Draw a node's two-line label; returns its hit rect.
fn draw_label(painter: &egui::Painter, node: &cf_scene::SceneNode, offset: Vec2) -> Option<Rect> {
    let label = &node.label;
    let anchor = Pos2::new(label.x, label.y) + offset;

    let primary = painter.text(
        anchor,
        Align2::LEFT_CENTER,
        &label.primary,
        FontId::proportional(LABEL_FONT),
        color(style::LABEL_PRIMARY, 1.0),
    );
    let mut hit = primary;
    if let Some(secondary) = &label.secondary {
        let below = painter.text(
            anchor + Vec2::new(0.0, LABEL_LINE_STEP),
            Align2::LEFT_CENTER,
            secondary,
            FontId::proportional(LABEL_FONT),
            color(style::LABEL_SECONDARY, 1.0),
        );
        hit = hit.union(below);
    }
    Some(hit)
}

fn show_edge_tooltip(ui: &egui::Ui, edge: &SceneEdge) {
    egui::show_tooltip_at_pointer(
        ui.ctx(),
        ui.layer_id(),
        egui::Id::new("flow_edge_tooltip"),
        |ui| {
            let t = &edge.tooltip;
            ui.strong(&t.title);
            ui.label(format!("Year: {}", t.year));
            ui.label(format!("Commuters: {} ({} of total)", t.commuters, t.share));
            ui.separator();
            ui.label(format!("No vehicle: {}", t.pct_no_vehicle));
            ui.label(format!("Transit: {}", t.pct_transit));
            ui.label(format!("Carpool: {}", t.pct_carpool));
        },
    );
}

/// Control points for a horizontal ribbon between the edge's endpoint
/// nodes, in screen space.
fn ribbon_points(scene: &Scene, edge: &SceneEdge, offset: Vec2) -> Option<[Pos2; 4]> {
    let source = scene.nodes.get(edge.layout.source.index() as usize)?;
    let target = scene.nodes.get(edge.layout.target.index() as usize)?;

    let start = Pos2::new(source.layout.x1, edge.layout.source_y) + offset;
    let end = Pos2::new(target.layout.x0, edge.layout.target_y) + offset;
    let mid_x = (start.x + end.x) / 2.0;
    Some([
        start,
        Pos2::new(mid_x, start.y),
        Pos2::new(mid_x, end.y),
        end,
    ])
}

/// Minimum distance from a point to the sampled bezier centerline.
fn bezier_distance(points: [Pos2; 4], pos: Pos2) -> f32 {
    let mut best = f32::INFINITY;
    for i in 0..=EDGE_HOVER_SAMPLES {
        let t = i as f32 / EDGE_HOVER_SAMPLES as f32;
        let sample = cubic_at(points, t);
        best = best.min(sample.distance(pos));
    }
    best
}

fn cubic_at(p: [Pos2; 4], t: f32) -> Pos2 {
    let u = 1.0 - t;
    let x = u * u * u * p[0].x
        + 3.0 * u * u * t * p[1].x
        + 3.0 * u * t * t * p[2].x
        + t * t * t * p[3].x;
    let y = u * u * u * p[0].y
        + 3.0 * u * u * t * p[1].y
        + 3.0 * u * t * t * p[2].y
        + t * t * t * p[3].y;
    Pos2::new(x, y)
}

fn color(rgb: Rgb, opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(rgb.0, rgb.1, rgb.2, (opacity * 255.0) as u8)
}
