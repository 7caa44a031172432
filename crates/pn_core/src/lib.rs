//! # pn_core - Pass Classification and Pass-Network Aggregation
//!
//! This library turns an ordered soccer match event log into two derived
//! views:
//!
//! - classified passes with arrow semantics (successful, progressive,
//!   key pass, assist, unsuccessful), and
//! - per-team pass networks: players with average locations and pass
//!   volume, directed pass relationships filtered by significance
//!   thresholds.
//!
//! It is a pure in-memory transformation library. Event collection and
//! chart drawing live with the caller; the JSON API in [`api`] is the
//! integration surface.

pub mod analysis;
pub mod api;
pub mod error;
pub mod models;
pub mod render;

pub use analysis::{
    build_pass_network, classify_passes, ClassifiedPass, PassEdge, PassNetwork, PassType,
    PlayerNode, TeamPassTotals,
};
pub use api::{analyze_match, analyze_match_json, MatchRequest, MatchResponse, TeamAnalysis};
pub use error::{AnalysisError, Result};
pub use models::{
    sort_chronological, EventType, MatchEvent, MatchInfo, Outcome, Period, TeamInfo, TeamSide,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_request() -> serde_json::Value {
        let event = |id: u64,
                     team_id: u32,
                     player_id: u32,
                     minute: u8,
                     event_type: &str,
                     outcome: &str,
                     end: Option<(f32, f32)>| {
            json!({
                "id": id,
                "team_id": team_id,
                "player_id": player_id,
                "player_name": format!("Player {}", player_id),
                "period": "first_half",
                "minute": minute,
                "second": 0.0,
                "x": 40.0,
                "y": 50.0,
                "end_x": end.map(|e| e.0),
                "end_y": end.map(|e| e.1),
                "type": event_type,
                "outcome": outcome,
                "shirt_no": player_id,
                "position": "CM",
                "is_first_eleven": true
            })
        };

        json!({
            "schema_version": 1,
            "match_info": {
                "home": { "team_id": 100, "name": "Home FC" },
                "away": { "team_id": 200, "name": "Away United" },
                "time_stamp": "2024-03-02 17:30:00"
            },
            "events": [
                event(0, 100, 1, 5, "pass", "successful", Some((55.0, 50.0))),
                event(1, 100, 2, 6, "pass", "successful", Some((60.0, 45.0))),
                event(2, 100, 1, 7, "pass", "successful", Some((65.0, 50.0))),
                // An unsuccessful away pass right before a goal stays
                // unsuccessful.
                event(3, 200, 5, 40, "pass", "unsuccessful", Some((70.0, 50.0))),
                event(4, 200, 6, 40, "goal", "successful", None),
            ]
        })
    }

    #[test]
    fn test_analyze_match_json_end_to_end() {
        let result = analyze_match_json(&make_request().to_string());
        assert!(result.is_ok(), "Analysis should succeed: {:?}", result.err());

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["title"], "Home FC vs Away United");
        assert_eq!(parsed["date"], "2024-03-02");

        assert_eq!(parsed["home"]["arrows"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["home"]["network"]["nodes"].as_array().unwrap().len(), 2);

        // Outcome beats goal adjacency.
        let away_arrows = parsed["away"]["arrows"].as_array().unwrap();
        assert_eq!(away_arrows.len(), 1);
        assert_eq!(away_arrows[0]["pass_type"], "unsuccessful");

        // The away side completed nothing, so its network is empty but the
        // totals still count the attempt.
        assert_eq!(parsed["away"]["network"]["nodes"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["away"]["network"]["totals"]["attempted"], 1);
    }

    #[test]
    fn test_determinism() {
        let request = make_request().to_string();
        let first = analyze_match_json(&request).unwrap();
        let second = analyze_match_json(&request).unwrap();
        assert_eq!(first, second, "Same input must produce identical output");
    }

    #[test]
    fn test_unsupported_schema_version_is_rejected() {
        let mut request = make_request();
        request["schema_version"] = json!(9);
        let err = analyze_match_json(&request.to_string()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::UnsupportedSchemaVersion { found: 9, expected: 1 }
        ));
    }

    #[test]
    fn test_unknown_team_is_rejected() {
        let mut request = make_request();
        request["events"][0]["team_id"] = json!(999);
        let err = analyze_match_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownTeam { team_id: 999 }));
    }

    #[test]
    fn test_away_network_is_flipped_at_render_only() {
        // Give the away side a real network: three completed passes from
        // two players.
        let mut request = make_request();
        let events = request["events"].as_array_mut().unwrap();
        for (i, (player, minute)) in [(7u32, 50u8), (8, 51), (7, 52), (8, 53)].iter().enumerate() {
            events.push(json!({
                "id": 10 + i as u64,
                "team_id": 200,
                "player_id": player,
                "player_name": format!("Away {}", player),
                "period": "second_half",
                "minute": minute,
                "second": 0.0,
                "x": 20.0,
                "y": 30.0,
                "end_x": 35.0,
                "end_y": 30.0,
                "type": "pass",
                "outcome": "successful",
                "shirt_no": player,
                "position": "CB",
                "is_first_eleven": true
            }));
        }

        let request: MatchRequest =
            serde_json::from_value(request).expect("request deserializes");
        let response = analyze_match(&request).unwrap();

        // All away attempts start at x = 20; the styled node must sit at 80.
        let node = &response.away.network.nodes[0];
        assert_eq!(node.x, 80.0);
        assert_eq!(node.y, 70.0);
    }
}
