use thiserror::Error;

/// Hard failures surfaced to the caller. Analytic edge cases (missing end
/// coordinates, zero maxima, empty pass sets) never reach this enum; they
/// degrade to documented defaults inside the pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("team {team_id} does not play in this match")]
    UnknownTeam { team_id: u32 },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
