//! # JSON API
//!
//! String-in/string-out surface for callers that supply a match document and
//! receive both derived views. The request carries the full event stream
//! plus match metadata; the response carries drawable arrows and styled
//! networks for both teams, with the away network mirrored.

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{classify_passes, ClassifiedPass};
use crate::analysis::network::build_pass_network;
use crate::error::{AnalysisError, Result};
use crate::models::event::{sort_chronological, MatchEvent};
use crate::models::match_info::MatchInfo;
use crate::render::{style_network, style_passes, MarkerLabel, PassArrow, StyledNetwork};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub match_info: MatchInfo,
    pub events: Vec<MatchEvent>,
    /// Node labelling for the network view; shirt numbers by default.
    #[serde(default)]
    pub marker_label: MarkerLabel,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    /// "Home vs Away" headline.
    pub title: String,
    /// Kickoff date (ISO), when the timestamp parses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub home: TeamAnalysis,
    pub away: TeamAnalysis,
}

#[derive(Debug, Serialize)]
pub struct TeamAnalysis {
    pub team_id: u32,
    pub name: String,
    /// Classified passes as drawable arrows, in match order.
    pub arrows: Vec<PassArrow>,
    /// Styled pass network; the away team is coordinate-flipped.
    pub network: StyledNetwork,
}

/// Run the full pipeline over one match.
///
/// Events are re-sorted chronologically (stable) before analysis, so a
/// caller-side shuffle of equal-timestamp rows cannot change the verdicts.
/// Events naming a team other than the two in `match_info` are a hard
/// error.
pub fn analyze_match(request: &MatchRequest) -> Result<MatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(AnalysisError::UnsupportedSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    let info = &request.match_info;
    if let Some(event) =
        request.events.iter().find(|e| info.side_of(e.team_id).is_none())
    {
        return Err(AnalysisError::UnknownTeam { team_id: event.team_id });
    }

    let mut events = request.events.clone();
    sort_chronological(&mut events);
    let classified = classify_passes(&events);
    log::debug!("{}: {} events, {} passes", info.title(), events.len(), classified.len());

    let team_analysis = |team_id: u32, name: &str, flipped: bool| TeamAnalysis {
        team_id,
        name: name.to_string(),
        arrows: style_passes(&team_passes(&classified, team_id)),
        network: style_network(
            &build_pass_network(&events, team_id),
            flipped,
            request.marker_label,
        ),
    };

    Ok(MatchResponse {
        schema_version: SCHEMA_VERSION,
        title: info.title(),
        date: info.kickoff_date().map(|d| d.to_string()),
        home: team_analysis(info.home.team_id, &info.home.name, false),
        away: team_analysis(info.away.team_id, &info.away.name, true),
    })
}

/// JSON wrapper around [`analyze_match`].
pub fn analyze_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let response = analyze_match(&request)?;
    Ok(serde_json::to_string(&response)?)
}

fn team_passes(classified: &[ClassifiedPass], team_id: u32) -> Vec<ClassifiedPass> {
    classified.iter().filter(|p| p.team_id == team_id).cloned().collect()
}
