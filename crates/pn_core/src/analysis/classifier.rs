//! # Pass Classifier
//!
//! Transforms the ordered match event stream into classified pass records.
//!
//! ## Algorithm
//! 1. For each pass, look at the immediately following event in the full
//!    stream (any team) to detect shot/goal association.
//! 2. Compute progressiveness from the distance ratio toward the goal mouth.
//! 3. Resolve the pass type by fixed precedence:
//!    Unsuccessful > Assist > KeyPass > Progressive > Successful.
//!
//! The lookahead is positional, not possession-scoped: it assumes the next
//! logged event is causally connected to the pass. An unsuccessful pass is
//! tagged `Unsuccessful` even when the next event is a shot or goal.

use serde::{Deserialize, Serialize};

use crate::models::event::{EventType, MatchEvent, Outcome, Period};

/// Reference point for progressiveness: the opponent goal mouth in
/// pitch-normalized coordinates.
pub const GOAL_MOUTH: (f32, f32) = (100.0, 50.0);

/// A pass is provisionally progressive when it closes the distance to the
/// goal mouth below this ratio.
pub const PROGRESSIVE_RATIO_MAX: f32 = 0.75;

/// Pass classification, mutually exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PassType {
    Unsuccessful,
    Successful,
    Progressive,
    KeyPass,
    Assist,
}

/// A pass event with its resolved classification. Computed once, never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedPass {
    pub team_id: u32,
    pub player_id: u32,
    pub player_name: String,
    pub period: Period,
    pub minute: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<f32>,
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_y: Option<f32>,
    pub outcome: Outcome,
    pub pass_type: PassType,
}

/// Classify every pass in the event stream, preserving stream order.
///
/// The input must already be in chronological order; the next-event
/// lookahead reads the stream positionally. A stream with no passes yields
/// an empty vector.
pub fn classify_passes(events: &[MatchEvent]) -> Vec<ClassifiedPass> {
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.is_pass())
        .map(|(idx, event)| ClassifiedPass {
            team_id: event.team_id,
            player_id: event.player_id,
            player_name: event.player_name.clone(),
            period: event.period,
            minute: event.minute,
            second: event.second,
            x: event.x,
            y: event.y,
            end_x: event.end_x,
            end_y: event.end_y,
            outcome: event.outcome,
            pass_type: classify(event, events.get(idx + 1)),
        })
        .collect()
}

fn classify(pass: &MatchEvent, next: Option<&MatchEvent>) -> PassType {
    // Unsuccessful wins over everything, including shot/goal adjacency.
    if pass.outcome == Outcome::Unsuccessful {
        return PassType::Unsuccessful;
    }
    if let Some(next) = next {
        if next.event_type == EventType::Goal {
            return PassType::Assist;
        }
        if next.is_shot_attempt() {
            return PassType::KeyPass;
        }
    }
    if is_progressive(pass) {
        PassType::Progressive
    } else {
        PassType::Successful
    }
}

/// Progressive iff the pass moves forward (`end_x > x`) and ends meaningfully
/// closer to the goal mouth (`d_end / d_start < 0.75`).
///
/// Missing end coordinates and passes originating exactly at the goal mouth
/// both degrade to "not progressive".
fn is_progressive(pass: &MatchEvent) -> bool {
    let (end_x, end_y) = match pass.end_location() {
        Some(end) => end,
        None => {
            log::debug!("pass {} has no end coordinates, treated as not progressive", pass.id);
            return false;
        }
    };
    if end_x <= pass.x {
        return false;
    }
    let d_start = distance_to_goal_mouth(pass.x, pass.y);
    if d_start == 0.0 {
        return false;
    }
    let d_end = distance_to_goal_mouth(end_x, end_y);
    d_end / d_start < PROGRESSIVE_RATIO_MAX
}

fn distance_to_goal_mouth(x: f32, y: f32) -> f32 {
    let dx = GOAL_MOUTH.0 - x;
    let dy = GOAL_MOUTH.1 - y;
    (dx * dx + dy * dy).sqrt()
}
