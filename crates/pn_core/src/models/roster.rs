//! # Roster Derivation
//!
//! Deduplicates the per-player roster attributes carried on every event row
//! and derives substitution flags from the SubstitutionOn/Off events of the
//! whole match. Substitution events are collected across both teams before
//! the roster is scoped to a team, since the feed does not guarantee
//! team-scoped substitution rows.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::event::{EventType, MatchEvent};

/// One participating player, with match-level substitution flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterEntry {
    pub player_id: u32,
    pub player_name: String,
    pub team_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_no: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub is_first_eleven: bool,
    pub subbed_in: bool,
    pub subbed_out: bool,
}

/// Build the deduplicated roster for all players seen in the event stream,
/// in first-appearance order.
pub fn build_roster(events: &[MatchEvent]) -> Vec<RosterEntry> {
    let subbed_in: HashSet<u32> = events
        .iter()
        .filter(|e| e.event_type == EventType::SubstitutionOn)
        .map(|e| e.player_id)
        .collect();
    let subbed_out: HashSet<u32> = events
        .iter()
        .filter(|e| e.event_type == EventType::SubstitutionOff)
        .map(|e| e.player_id)
        .collect();

    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut roster = Vec::new();
    for event in events {
        if !seen.insert((event.player_id, event.team_id)) {
            continue;
        }
        roster.push(RosterEntry {
            player_id: event.player_id,
            player_name: event.player_name.clone(),
            team_id: event.team_id,
            shirt_no: event.shirt_no,
            position: event.position.clone(),
            is_first_eleven: event.is_first_eleven,
            subbed_in: subbed_in.contains(&event.player_id),
            subbed_out: subbed_out.contains(&event.player_id),
        });
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{Outcome, Period};

    fn make_event(player_id: u32, team_id: u32, event_type: EventType) -> MatchEvent {
        MatchEvent {
            id: player_id as u64,
            team_id,
            player_id,
            player_name: format!("Player {}", player_id),
            period: Period::FirstHalf,
            minute: 10,
            second: Some(0.0),
            x: 50.0,
            y: 50.0,
            end_x: None,
            end_y: None,
            event_type,
            outcome: Outcome::Successful,
            shirt_no: Some(player_id as u8),
            position: Some("CM".to_string()),
            is_first_eleven: true,
        }
    }

    #[test]
    fn test_roster_dedupes_players() {
        let events = vec![
            make_event(1, 100, EventType::Pass),
            make_event(1, 100, EventType::Pass),
            make_event(2, 100, EventType::Pass),
        ];

        let roster = build_roster(&events);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].player_id, 1, "First-appearance order expected");
        assert_eq!(roster[1].player_id, 2);
    }

    #[test]
    fn test_substitution_flags() {
        let events = vec![
            make_event(1, 100, EventType::Pass),
            make_event(1, 100, EventType::SubstitutionOff),
            make_event(2, 100, EventType::SubstitutionOn),
            make_event(3, 200, EventType::Pass),
        ];

        let roster = build_roster(&events);
        let by_id = |id: u32| roster.iter().find(|r| r.player_id == id).unwrap();
        assert!(by_id(1).subbed_out);
        assert!(!by_id(1).subbed_in);
        assert!(by_id(2).subbed_in);
        assert!(!by_id(3).subbed_in);
        assert!(!by_id(3).subbed_out);
    }
}
