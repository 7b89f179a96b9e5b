//! Integration tests: highlight transitions over a real scene.

use cf_graph::build_flow_graph;
use cf_layout::{BandLayout, LayoutParams, lay_out};
use cf_query::AggregatedFlow;
use cf_scene::{Interaction, Scene, build_scene};

fn flow(origin: &str, destination: &str, count: f64) -> AggregatedFlow {
    AggregatedFlow {
        origin: origin.into(),
        destination: destination.into(),
        year: 2022,
        count,
        group: "age_<=29".into(),
        pct_no_vehicle: 4.5,
        pct_transit: 1.2,
        pct_carpool: 8.0,
    }
}

fn scene(interaction: &Interaction) -> Scene {
    let graph = build_flow_graph(&[
        flow("A", "X", 100.0),
        flow("B", "X", 60.0),
        flow("B", "Y", 20.0),
    ]);
    let laid = lay_out(&graph, &LayoutParams::default(), (1000.0, 600.0), &BandLayout).unwrap();
    build_scene(&laid, interaction, 1000.0)
}

#[test]
fn focus_toggle_restores_baseline_exactly() {
    let neutral = scene(&Interaction::new());

    let mut interaction = Interaction::new();
    interaction.click("B");
    let mut toggled = scene(&interaction);
    assert_ne!(neutral, toggled);

    interaction.click("B");
    toggled.restyle(&interaction);

    let before: Vec<_> = neutral.edges.iter().map(|e| e.style).collect();
    let after: Vec<_> = toggled.edges.iter().map(|e| e.style).collect();
    assert_eq!(before, after);
}

#[test]
fn hover_out_during_focus_keeps_focus_emphasis() {
    let mut interaction = Interaction::new();
    interaction.click("B");
    let focused = scene(&interaction);

    interaction.hover_in("A");
    interaction.hover_out();
    let mut after_hover = scene(&Interaction::new());
    after_hover.restyle(&interaction);

    let focused_styles: Vec<_> = focused.edges.iter().map(|e| e.style).collect();
    let after_styles: Vec<_> = after_hover.edges.iter().map(|e| e.style).collect();
    assert_eq!(focused_styles, after_styles);
}

#[test]
fn focus_emphasizes_only_touching_edges() {
    let mut interaction = Interaction::new();
    interaction.click("B");
    let styled = scene(&interaction);

    for edge in &styled.edges {
        let touches = edge.layout.origin == "B" || edge.layout.destination == "B";
        if touches {
            assert_eq!(edge.style.opacity, 0.9);
        } else {
            assert_eq!(edge.style.opacity, 0.05);
        }
    }
}

#[test]
fn tooltips_carry_share_of_filtered_total() {
    let neutral = scene(&Interaction::new());
    // Total is 180; the 100-count edge is 55.6%.
    let big = neutral
        .edges
        .iter()
        .find(|e| e.layout.count == 100.0)
        .unwrap();
    assert_eq!(big.tooltip.share, "55.6%");
    assert_eq!(big.tooltip.commuters, "100");
    assert_eq!(big.tooltip.year, 2022);
    assert_eq!(big.tooltip.pct_carpool, "8.0%");
}
