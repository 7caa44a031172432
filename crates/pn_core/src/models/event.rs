//! # Match Event Model
//!
//! One record per observed match action, as ingested from a match-statistics
//! event log. Events carry the raw pitch-normalized coordinates (0-100 on
//! both axes) plus the roster attributes the ingestion step joins in.

use serde::{Deserialize, Serialize};

/// Match period, ordered chronologically so events can be sorted by
/// (period, minute, second).
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    PreMatch,
    #[default]
    FirstHalf,
    SecondHalf,
    FirstPeriodOfExtraTime,
    SecondPeriodOfExtraTime,
    PenaltyShootout,
    PostGame,
}

/// Event taxonomy. Only the variants the analysis pipeline inspects are
/// named; everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Pass,
    SubstitutionOn,
    SubstitutionOff,
    MissedShots,
    SavedShot,
    ShotOnPost,
    Goal,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Successful,
    Unsuccessful,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub id: u64,
    pub team_id: u32,
    pub player_id: u32,
    pub player_name: String,
    pub period: Period,
    pub minute: u8,
    /// Fractional seconds within the minute; absent on some feed rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<f32>,
    /// Start location, 0-100 pitch-normalized.
    pub x: f32,
    pub y: f32,
    /// End location; present on pass/shot events only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_y: Option<f32>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_no: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub is_first_eleven: bool,
}

impl MatchEvent {
    pub fn is_pass(&self) -> bool {
        self.event_type == EventType::Pass
    }

    /// A shot attempt that did not score: missed, saved, or off the post.
    pub fn is_shot_attempt(&self) -> bool {
        matches!(
            self.event_type,
            EventType::MissedShots | EventType::SavedShot | EventType::ShotOnPost
        )
    }

    pub fn end_location(&self) -> Option<(f32, f32)> {
        match (self.end_x, self.end_y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// Sort events into chronological order: (period, minute, second).
///
/// The sort is stable, so rows sharing a timestamp keep their original
/// sequence order. Classification leans on this order to detect
/// shot-assisting passes, so callers should sort before analysis.
pub fn sort_chronological(events: &mut [MatchEvent]) {
    events.sort_by(|a, b| {
        a.period
            .cmp(&b.period)
            .then(a.minute.cmp(&b.minute))
            .then(a.second.unwrap_or(0.0).total_cmp(&b.second.unwrap_or(0.0)))
    });
}
