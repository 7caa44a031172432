pub mod json_api;

pub use json_api::{analyze_match, analyze_match_json, MatchRequest, MatchResponse, TeamAnalysis};
