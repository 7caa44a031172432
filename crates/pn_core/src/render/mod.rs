//! # Render Adapter Surface
//!
//! Decorates the analytical outputs with presentation metadata: colors,
//! line widths, marker sizes, labels, and the away-team coordinate flip.
//! Everything here is derived at style time; the underlying aggregates are
//! never mutated.

pub mod layout;
pub mod palette;

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{ClassifiedPass, PassType};
use crate::analysis::network::{PassNetwork, TeamPassTotals};
use layout::{edge_alpha, flip, line_width, marker_size, MIN_RENDER_PASS_COUNT};
use palette::{completion_color, marker_edge_color, pass_color, EDGE_BASE};

/// How network nodes are labelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarkerLabel {
    Initials,
    #[default]
    Numbers,
}

/// A classified pass ready to be drawn as a directional arrow.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PassArrow {
    pub player_id: u32,
    pub player_name: String,
    pub pass_type: PassType,
    pub x: f32,
    pub y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StyledNode {
    pub player_id: u32,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub marker_size: f32,
    pub color: &'static str,
    pub edge_color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StyledEdge {
    pub from_player_id: u32,
    pub to_player_id: u32,
    pub pass_count: u32,
    pub x: f32,
    pub y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub width: f32,
    pub alpha: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StyledNetwork {
    pub team_id: u32,
    pub nodes: Vec<StyledNode>,
    pub edges: Vec<StyledEdge>,
    pub totals: TeamPassTotals,
}

/// Turn classified passes into drawable arrows. Passes without end
/// coordinates cannot be drawn and are skipped.
pub fn style_passes(passes: &[ClassifiedPass]) -> Vec<PassArrow> {
    passes
        .iter()
        .filter_map(|pass| {
            let (end_x, end_y) = match (pass.end_x, pass.end_y) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    log::debug!("pass by player {} has no end point, arrow skipped", pass.player_id);
                    return None;
                }
            };
            Some(PassArrow {
                player_id: pass.player_id,
                player_name: pass.player_name.clone(),
                pass_type: pass.pass_type,
                x: pass.x,
                y: pass.y,
                end_x,
                end_y,
                color: pass_color(pass.pass_type),
            })
        })
        .collect()
}

/// Style a pass network for drawing. `flipped` mirrors all coordinates for
/// the away-team view; edges at or below [`MIN_RENDER_PASS_COUNT`] are cut.
pub fn style_network(network: &PassNetwork, flipped: bool, label: MarkerLabel) -> StyledNetwork {
    let max_completed = network.nodes.iter().map(|n| n.passes_completed).max().unwrap_or(0);
    let max_pair = network.edges.iter().map(|e| e.pass_count).max().unwrap_or(0);
    let transform = |coord: f32| if flipped { flip(coord) } else { coord };

    let nodes = network
        .nodes
        .iter()
        .map(|node| StyledNode {
            player_id: node.player_id,
            label: match label {
                MarkerLabel::Initials => initials(&node.player_name),
                MarkerLabel::Numbers => {
                    node.shirt_no.map(|n| n.to_string()).unwrap_or_default()
                }
            },
            x: transform(node.avg_x),
            y: transform(node.avg_y),
            marker_size: marker_size(node.passes_completed, max_completed),
            color: completion_color(node.completion_pct),
            edge_color: marker_edge_color(node.subbed_in, node.subbed_out),
        })
        .collect();

    let edges = network
        .edges
        .iter()
        .filter(|edge| edge.pass_count > MIN_RENDER_PASS_COUNT)
        .map(|edge| StyledEdge {
            from_player_id: edge.from_player_id,
            to_player_id: edge.to_player_id,
            pass_count: edge.pass_count,
            x: transform(edge.x),
            y: transform(edge.y),
            end_x: transform(edge.end_x),
            end_y: transform(edge.end_y),
            width: line_width(edge.pass_count, max_pair),
            alpha: edge_alpha(edge.pass_count, max_pair),
            color: EDGE_BASE,
        })
        .collect();

    StyledNetwork { team_id: network.team_id, nodes, edges, totals: network.totals }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
