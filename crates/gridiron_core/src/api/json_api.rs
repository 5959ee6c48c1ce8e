//! JSON entry points for the web layer and the CLI.

use crate::efficiency::{calculate_team_chemistry, TargetLine, TeamChemistry};
use crate::error::{Result, StatsError};
use crate::models::{DerivedStats, Position, SeasonLine};
use crate::ranking::{top_performers, RankedLine, StatsQuery};
use crate::scouting::{scouting_metrics_for, ScoutingConfig, ScoutingMetrics};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const SCHEMA_VERSION: u8 = 1;

fn check_schema(found: u8) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        warn!(found, expected = SCHEMA_VERSION, "rejecting request schema");
        Err(StatsError::UnsupportedSchema {
            found,
            expected: SCHEMA_VERSION,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub schema_version: u8,
    pub lines: Vec<SeasonLine>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEvaluation {
    pub player_id: String,
    pub season: String,
    pub position: Position,
    pub derived: DerivedStats,
    pub scouting_score: f64,
    pub metrics: ScoutingMetrics,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub schema_version: u8,
    pub evaluations: Vec<PlayerEvaluation>,
}

pub fn evaluate(request: &EvaluateRequest, config: &ScoutingConfig) -> Result<EvaluateResponse> {
    check_schema(request.schema_version)?;

    let evaluations = request
        .lines
        .iter()
        .map(|line| {
            let derived = line.stats.derive(line.games_played);
            let metrics = scouting_metrics_for(line, &derived, config);
            PlayerEvaluation {
                player_id: line.player_id.clone(),
                season: line.season.clone(),
                position: line.position,
                scouting_score: metrics.scouting_score,
                derived,
                metrics,
            }
        })
        .collect::<Vec<_>>();

    info!(count = evaluations.len(), "evaluated season lines");
    Ok(EvaluateResponse {
        schema_version: SCHEMA_VERSION,
        evaluations,
    })
}

/// Derive and score every line in a JSON [`EvaluateRequest`].
pub fn evaluate_json(json: &str, config: &ScoutingConfig) -> Result<String> {
    let request: EvaluateRequest = serde_json::from_str(json)?;
    let response = evaluate(&request, config)?;
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    pub schema_version: u8,
    pub query: StatsQuery,
    pub lines: Vec<SeasonLine>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub schema_version: u8,
    pub results: Vec<RankedLine>,
}

pub fn rank(request: &RankRequest, config: &ScoutingConfig) -> Result<RankResponse> {
    check_schema(request.schema_version)?;
    Ok(RankResponse {
        schema_version: SCHEMA_VERSION,
        results: top_performers(&request.lines, &request.query, config)?,
    })
}

pub fn rank_json(json: &str, config: &ScoutingConfig) -> Result<String> {
    let request: RankRequest = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&rank(&request, config)?)?)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemistryRequest {
    pub schema_version: u8,
    pub receivers: Vec<TargetLine>,
    pub team_games: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemistryResponse {
    pub schema_version: u8,
    pub chemistry: TeamChemistry,
}

pub fn chemistry_json(json: &str) -> Result<String> {
    let request: ChemistryRequest = serde_json::from_str(json)?;
    check_schema(request.schema_version)?;
    let response = ChemistryResponse {
        schema_version: SCHEMA_VERSION,
        chemistry: calculate_team_chemistry(&request.receivers, request.team_games),
    };
    Ok(serde_json::to_string(&response)?)
}
