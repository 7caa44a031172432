//! # Pass Network Aggregator
//!
//! Groups a team's passes into a directed weighted graph: nodes are players
//! with their average pass-attempt location and volume, edges are ordered
//! (passer, receiver) pairs with attempt counts.
//!
//! ## Algorithm
//! 1. Derive the roster (with substitution flags) from the whole match.
//! 2. Filter events to the target team; the receiver of each pass is the
//!    player of the next chronological team event, whatever its type.
//! 3. Aggregate per player over pass attempts: mean start location,
//!    attempted/completed counts, completion percentage.
//! 4. Two-pass thresholding: compute raw aggregates and maxima first, then
//!    drop nodes at or below 10% of the maximum completed count, then drop
//!    pairs touching a dropped endpoint or at or below 10% of the maximum
//!    pair count. Filtering is never applied incrementally.
//!
//! Pair counts include unsuccessful attempts. A team with no completed
//! passes produces empty node and edge sets, not an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::event::{MatchEvent, Outcome};
use crate::models::roster::{build_roster, RosterEntry};

/// Nodes and edges are retained only above this share of the respective
/// match maximum.
pub const SIGNIFICANCE_RATIO: f32 = 0.1;

/// One player in the pass network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerNode {
    pub player_id: u32,
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_no: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub is_first_eleven: bool,
    /// Mean start location across the player's pass attempts.
    pub avg_x: f32,
    pub avg_y: f32,
    pub passes_attempted: u32,
    pub passes_completed: u32,
    /// completed / attempted * 100, rounded to 2 decimals. 0/0 counts as 0.
    pub completion_pct: f32,
    pub subbed_in: bool,
    pub subbed_out: bool,
}

/// Directed passer -> receiver relationship. Endpoint locations are copied
/// from the two players' aggregate locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassEdge {
    pub from_player_id: u32,
    pub to_player_id: u32,
    pub pass_count: u32,
    pub x: f32,
    pub y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

/// Whole-team pass volume, used for headline labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamPassTotals {
    pub attempted: u32,
    pub completed: u32,
    pub completion_pct: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassNetwork {
    pub team_id: u32,
    pub nodes: Vec<PlayerNode>,
    pub edges: Vec<PassEdge>,
    pub totals: TeamPassTotals,
}

struct PlayerAcc {
    sum_x: f32,
    sum_y: f32,
    attempted: u32,
    completed: u32,
}

/// Build the pass network for one team from the full (chronologically
/// ordered) match event stream.
pub fn build_pass_network(events: &[MatchEvent], team_id: u32) -> PassNetwork {
    let roster: Vec<RosterEntry> =
        build_roster(events).into_iter().filter(|r| r.team_id == team_id).collect();
    let roster_by_id: BTreeMap<u32, &RosterEntry> =
        roster.iter().map(|r| (r.player_id, r)).collect();

    let team_events: Vec<&MatchEvent> =
        events.iter().filter(|e| e.team_id == team_id).collect();

    // Pass attempts paired with the inferred receiver: the player involved
    // in the next team event. The final team event has no receiver.
    let passes: Vec<(&MatchEvent, Option<u32>)> = team_events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_pass())
        .map(|(i, e)| (*e, team_events.get(i + 1).map(|next| next.player_id)))
        .collect();

    let mut totals = TeamPassTotals {
        attempted: passes.len() as u32,
        completed: passes.iter().filter(|(e, _)| e.outcome == Outcome::Successful).count() as u32,
        completion_pct: 0.0,
    };
    totals.completion_pct = percentage(totals.completed, totals.attempted);

    // First pass: raw per-player aggregates.
    let mut accs: BTreeMap<u32, PlayerAcc> = BTreeMap::new();
    for (event, _) in &passes {
        let acc = accs.entry(event.player_id).or_insert(PlayerAcc {
            sum_x: 0.0,
            sum_y: 0.0,
            attempted: 0,
            completed: 0,
        });
        acc.sum_x += event.x;
        acc.sum_y += event.y;
        acc.attempted += 1;
        if event.outcome == Outcome::Successful {
            acc.completed += 1;
        }
    }

    // Second pass: threshold on the match maximum.
    let max_completed = accs.values().map(|a| a.completed).max().unwrap_or(0);
    let node_threshold = significance_threshold(max_completed);
    log::debug!(
        "team {}: node threshold {} (max completed {})",
        team_id,
        node_threshold,
        max_completed
    );

    let nodes: Vec<PlayerNode> = accs
        .iter()
        .filter(|(_, acc)| acc.completed > node_threshold)
        .filter_map(|(&player_id, acc)| {
            let Some(entry) = roster_by_id.get(&player_id) else {
                log::warn!("player {} has passes but no roster entry, skipped", player_id);
                return None;
            };
            Some(PlayerNode {
                player_id,
                player_name: entry.player_name.clone(),
                shirt_no: entry.shirt_no,
                position: entry.position.clone(),
                is_first_eleven: entry.is_first_eleven,
                avg_x: acc.sum_x / acc.attempted as f32,
                avg_y: acc.sum_y / acc.attempted as f32,
                passes_attempted: acc.attempted,
                passes_completed: acc.completed,
                completion_pct: percentage(acc.completed, acc.attempted),
                subbed_in: entry.subbed_in,
                subbed_out: entry.subbed_out,
            })
        })
        .collect();
    let node_by_id: BTreeMap<u32, &PlayerNode> = nodes.iter().map(|n| (n.player_id, n)).collect();

    // Pair counts over all attempts, then join against retained nodes.
    let mut pair_counts: BTreeMap<(u32, u32), u32> = BTreeMap::new();
    for (event, receiver) in &passes {
        if let Some(receiver) = receiver {
            *pair_counts.entry((event.player_id, *receiver)).or_insert(0) += 1;
        }
    }
    let joined: Vec<((u32, u32), u32, &PlayerNode, &PlayerNode)> = pair_counts
        .iter()
        .filter_map(|(&(from, to), &count)| {
            let from_node = node_by_id.get(&from)?;
            let to_node = node_by_id.get(&to)?;
            Some(((from, to), count, *from_node, *to_node))
        })
        .collect();

    let max_pair = joined.iter().map(|(_, count, _, _)| *count).max().unwrap_or(0);
    let edge_threshold = significance_threshold(max_pair);

    let edges: Vec<PassEdge> = joined
        .into_iter()
        .filter(|(_, count, _, _)| *count > edge_threshold)
        .map(|((from, to), count, from_node, to_node)| PassEdge {
            from_player_id: from,
            to_player_id: to,
            pass_count: count,
            x: from_node.avg_x,
            y: from_node.avg_y,
            end_x: to_node.avg_x,
            end_y: to_node.avg_y,
        })
        .collect();

    PassNetwork { team_id, nodes, edges, totals }
}

/// 10% of the maximum, rounded to the nearest integer. A zero maximum means
/// no value can exceed the threshold.
fn significance_threshold(max: u32) -> u32 {
    (max as f32 * SIGNIFICANCE_RATIO).round() as u32
}

/// completed / attempted * 100, rounded to 2 decimals; 0/0 counts as 0.
fn percentage(completed: u32, attempted: u32) -> f32 {
    if attempted == 0 {
        return 0.0;
    }
    let pct = completed as f32 / attempted as f32 * 100.0;
    (pct * 100.0).round() / 100.0
}
