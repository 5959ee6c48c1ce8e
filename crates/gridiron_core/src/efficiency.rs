//! # Efficiency Metrics
//!
//! Position-agnostic rate helpers and the QB-receiver chemistry score.
//! Every rate is 0 when its denominator is 0.

use crate::models::ReceiverStats;
use crate::stats::{count_ratio, ratio, round2};
use serde::{Deserialize, Serialize};

/// Attempt-based counting stats for [`calculate_efficiency_metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptLine {
    pub completions: u32,
    pub attempts: u32,
    pub yards: u32,
    pub touchdowns: u32,
    pub interceptions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyMetrics {
    pub completion_rate: f64,
    pub yards_per_attempt: f64,
    pub touchdown_rate: f64,
    pub interception_rate: f64,
}

pub fn calculate_efficiency_metrics(line: &AttemptLine) -> EfficiencyMetrics {
    EfficiencyMetrics {
        completion_rate: round2(count_ratio(line.completions, line.attempts) * 100.0),
        yards_per_attempt: round2(count_ratio(line.yards, line.attempts)),
        touchdown_rate: round2(count_ratio(line.touchdowns, line.attempts) * 100.0),
        interception_rate: round2(count_ratio(line.interceptions, line.attempts) * 100.0),
    }
}

/// Season-volume stats for [`calculate_advanced_metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeLine {
    pub games_played: u32,
    pub games_started: u32,
    pub total_yards: u64,
    pub total_touchdowns: u64,
    pub fumbles: u32,
    pub fumbles_lost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedMetrics {
    pub games_per_start: f64,
    pub yards_per_game: f64,
    pub touchdowns_per_game: f64,
    /// Fumbles per 100 games.
    pub fumble_rate: f64,
    /// Lost fumbles as a share of fumbles.
    pub fumble_loss_rate: f64,
}

pub fn calculate_advanced_metrics(line: &VolumeLine) -> AdvancedMetrics {
    let games = line.games_played as f64;
    AdvancedMetrics {
        games_per_start: round2(count_ratio(line.games_played, line.games_started)),
        yards_per_game: round2(ratio(line.total_yards as f64, games)),
        touchdowns_per_game: round2(ratio(line.total_touchdowns as f64, games)),
        fumble_rate: round2(count_ratio(line.fumbles, line.games_played) * 100.0),
        fumble_loss_rate: round2(count_ratio(line.fumbles_lost, line.fumbles) * 100.0),
    }
}

/// Receiving totals for one target of a quarterback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetLine {
    pub targets: u32,
    pub receptions: u32,
    pub receiving_yards: u32,
    pub receiving_touchdowns: u32,
}

impl From<&ReceiverStats> for TargetLine {
    fn from(wr: &ReceiverStats) -> Self {
        Self {
            targets: wr.raw.targets,
            receptions: wr.raw.receptions,
            receiving_yards: wr.raw.receiving_yards,
            receiving_touchdowns: wr.raw.receiving_touchdowns,
        }
    }
}

const CHEMISTRY_CATCH_WEIGHT: f64 = 0.4;
const CHEMISTRY_YARDS_WEIGHT: f64 = 0.3;
const CHEMISTRY_TOUCHDOWN_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamChemistry {
    pub chemistry_score: f64,
    /// Receptions per 100 targets across all receivers.
    pub efficiency: f64,
    pub yards_per_target: f64,
    /// Touchdowns per 100 targets.
    pub touchdown_rate: f64,
    /// Each receiver's share of total targets, in input order. Not rounded.
    pub target_distribution: Vec<f64>,
}

impl TeamChemistry {
    fn empty() -> Self {
        Self {
            chemistry_score: 0.0,
            efficiency: 0.0,
            yards_per_target: 0.0,
            touchdown_rate: 0.0,
            target_distribution: Vec::new(),
        }
    }
}

/// Chemistry between a quarterback and the receivers they target.
///
/// `score = 0.4 * catch efficiency + 0.3 * yards/target + 0.3 * TD rate`.
/// No team games means an all-zero result.
pub fn calculate_team_chemistry(receivers: &[TargetLine], team_games: u32) -> TeamChemistry {
    if team_games == 0 {
        return TeamChemistry::empty();
    }

    let mut targets = 0u64;
    let mut receptions = 0u64;
    let mut yards = 0u64;
    let mut touchdowns = 0u64;
    for r in receivers {
        targets += r.targets as u64;
        receptions += r.receptions as u64;
        yards += r.receiving_yards as u64;
        touchdowns += r.receiving_touchdowns as u64;
    }
    let total_targets = targets as f64;

    let target_distribution = receivers
        .iter()
        .map(|r| ratio(r.targets as f64, total_targets))
        .collect();

    let efficiency = ratio(receptions as f64, total_targets) * 100.0;
    let yards_per_target = ratio(yards as f64, total_targets);
    let touchdown_rate = ratio(touchdowns as f64, total_targets) * 100.0;
    let chemistry_score = efficiency * CHEMISTRY_CATCH_WEIGHT
        + yards_per_target * CHEMISTRY_YARDS_WEIGHT
        + touchdown_rate * CHEMISTRY_TOUCHDOWN_WEIGHT;

    TeamChemistry {
        chemistry_score: round2(chemistry_score),
        efficiency: round2(efficiency),
        yards_per_target: round2(yards_per_target),
        touchdown_rate: round2(touchdown_rate),
        target_distribution,
    }
}
