//! Passnet CLI
//!
//! Match JSON in, derived JSON out: classified pass arrows or styled pass
//! networks for one or both teams.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};

use pn_core::api::json_api::{analyze_match, MatchRequest, MatchResponse, TeamAnalysis};

#[derive(Parser)]
#[command(name = "pn_cli")]
#[command(about = "Derive pass arrows and pass networks from a match event log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classified pass arrows for a team, or for a single player
    Arrows {
        /// Input match JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Output JSON file
        #[arg(long)]
        out: PathBuf,

        /// Team selection: home, away, or both
        #[arg(long, default_value = "both")]
        team: String,

        /// Keep only one player's passes, matched by name
        /// (case- and whitespace-insensitive containment)
        #[arg(long)]
        player: Option<String>,
    },

    /// Styled pass networks (nodes, edges, totals)
    Network {
        /// Input match JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Output JSON file
        #[arg(long)]
        out: PathBuf,

        /// Team selection: home, away, or both
        #[arg(long, default_value = "both")]
        team: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Arrows { r#in, out, team, player } => {
            let response = analyze_file(&r#in)?;
            let teams = select_teams(&response, &team)?;

            let (payload, arrow_count) = match player {
                Some(ref name) => {
                    let payload = player_arrows(&teams, name)?;
                    let count = payload["arrows"].as_array().map_or(0, |a| a.len());
                    (payload, count)
                }
                None => {
                    let count = teams.iter().map(|t| t.arrows.len()).sum();
                    let payload = json!({
                        "title": response.title.clone(),
                        "date": response.date.clone(),
                        "teams": teams
                            .iter()
                            .map(|t| {
                                json!({
                                    "team_id": t.team_id,
                                    "name": t.name,
                                    "arrows": t.arrows,
                                })
                            })
                            .collect::<Vec<_>>(),
                    });
                    (payload, count)
                }
            };
            write_json(&out, &payload)?;

            println!("✅ {} pass arrows written to {}", arrow_count, out.display());
        }

        Commands::Network { r#in, out, team } => {
            let response = analyze_file(&r#in)?;
            let teams = select_teams(&response, &team)?;

            let payload = json!({
                "title": response.title.clone(),
                "date": response.date.clone(),
                "teams": teams
                    .iter()
                    .map(|t| {
                        json!({
                            "team_id": t.team_id,
                            "name": t.name,
                            "network": t.network,
                        })
                    })
                    .collect::<Vec<_>>(),
            });
            write_json(&out, &payload)?;

            for t in &teams {
                println!(
                    "   {}: {} nodes, {} edges, {}/{} ({:.2}%) passes completed",
                    t.name,
                    t.network.nodes.len(),
                    t.network.edges.len(),
                    t.network.totals.completed,
                    t.network.totals.attempted,
                    t.network.totals.completion_pct,
                );
            }
            println!("✅ Pass networks written to {}", out.display());
        }
    }

    Ok(())
}

fn analyze_file(path: &Path) -> Result<MatchResponse> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let request: MatchRequest =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let response = analyze_match(&request)?;
    Ok(response)
}

fn select_teams<'a>(response: &'a MatchResponse, team: &str) -> Result<Vec<&'a TeamAnalysis>> {
    match team {
        "home" => Ok(vec![&response.home]),
        "away" => Ok(vec![&response.away]),
        "both" => Ok(vec![&response.home, &response.away]),
        other => bail!("unknown team selection '{}', expected home, away, or both", other),
    }
}

/// Arrows for a single player across the selected teams, matched by
/// normalized name containment.
fn player_arrows(teams: &[&TeamAnalysis], name: &str) -> Result<serde_json::Value> {
    let needle = normalize_name(name);
    let arrows: Vec<_> = teams
        .iter()
        .flat_map(|t| t.arrows.iter())
        .filter(|a| normalize_name(&a.player_name).contains(&needle))
        .collect();
    let Some(first) = arrows.first() else {
        bail!("no passes found for player '{}'", name);
    };

    Ok(json!({
        "player": first.player_name.clone(),
        "arrows": arrows,
    }))
}

fn normalize_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).flat_map(|c| c.to_lowercase()).collect()
}

fn write_json(path: &Path, payload: &serde_json::Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(payload)?;
    std::fs::write(path, pretty).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
