//! Scouting profile for one season line.

use super::config::ScoutingConfig;
use super::score::{ball_security_rate, scouting_score_with, touchdown_interception_ratio};
use crate::models::{DerivedStats, SeasonLine};
use crate::stats::{count_ratio, round2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PERCENT_MAX: f64 = 100.0;

/// Points of big-play ability per return touchdown on defense.
const RETURN_TD_POINTS: f64 = 20.0;

/// Scouting profile: headline rates plus the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingMetrics {
    /// Position efficiency rate on a 0-100 scale.
    pub efficiency: f64,
    /// Starts as a share of games played.
    pub consistency: f64,
    /// Longest play (or return scores on defense), capped at 100.
    pub big_play_ability: f64,
    /// Needs game-by-game splits; always 0 for a season line.
    pub clutch_performance: f64,
    pub scouting_score: f64,
    /// Derived rate fields keyed by their camelCase name.
    pub position_metrics: BTreeMap<String, f64>,
}

pub fn scouting_metrics(line: &SeasonLine, config: &ScoutingConfig) -> ScoutingMetrics {
    let derived = line.stats.derive(line.games_played);
    scouting_metrics_for(line, &derived, config)
}

/// Same as [`scouting_metrics`] when the line is already derived.
pub fn scouting_metrics_for(
    line: &SeasonLine,
    derived: &DerivedStats,
    config: &ScoutingConfig,
) -> ScoutingMetrics {
    let consistency = count_ratio(line.games_started, line.games_played) * 100.0;
    let mut position_metrics = BTreeMap::new();

    let (efficiency, big_play) = match derived {
        DerivedStats::Quarterback(qb) => {
            position_metrics.insert("completionPercentage".into(), qb.completion_percentage);
            position_metrics.insert("yardsPerAttempt".into(), qb.yards_per_attempt);
            position_metrics.insert("yardsPerCompletion".into(), qb.yards_per_completion);
            position_metrics.insert("passerRating".into(), qb.passer_rating);
            position_metrics.insert(
                "touchdownInterceptionRatio".into(),
                round2(touchdown_interception_ratio(
                    qb.raw.pass_touchdowns,
                    qb.raw.interceptions,
                )),
            );
            (qb.completion_percentage, qb.raw.pass_long.max(qb.raw.rush_long) as f64)
        }
        DerivedStats::RunningBack(rb) => {
            position_metrics.insert("yardsPerRush".into(), rb.yards_per_rush);
            position_metrics.insert("yardsPerReception".into(), rb.yards_per_reception);
            position_metrics.insert("totalYards".into(), rb.total_yards as f64);
            position_metrics.insert("totalTouchdowns".into(), rb.total_touchdowns as f64);
            position_metrics.insert(
                "ballSecurity".into(),
                ball_security_rate(rb.raw.fumbles_lost, rb.raw.rush_attempts, rb.raw.receptions),
            );
            (
                rb.yards_per_rush * 10.0,
                rb.raw.rush_long.max(rb.raw.receiving_long) as f64,
            )
        }
        DerivedStats::Receiver(wr) => {
            position_metrics.insert("yardsPerReception".into(), wr.yards_per_reception);
            position_metrics.insert("catchPercentage".into(), wr.catch_percentage);
            position_metrics.insert("yardsPerTarget".into(), wr.yards_per_target);
            position_metrics.insert("totalYards".into(), wr.total_yards as f64);
            position_metrics.insert("totalTouchdowns".into(), wr.total_touchdowns as f64);
            (wr.catch_percentage, wr.raw.receiving_long as f64)
        }
        DerivedStats::Defensive(d) => {
            position_metrics.insert("tacklesPerGame".into(), d.tackles_per_game);
            position_metrics.insert("sacksPerGame".into(), d.sacks_per_game);
            let return_tds =
                d.raw.interception_touchdowns as f64 + d.raw.fumble_recovery_touchdowns as f64;
            (d.tackles_per_game * 10.0, return_tds * RETURN_TD_POINTS)
        }
    };

    ScoutingMetrics {
        efficiency: round2(efficiency.min(PERCENT_MAX)),
        consistency: round2(consistency),
        big_play_ability: round2(big_play.min(PERCENT_MAX)),
        clutch_performance: 0.0,
        scouting_score: scouting_score_with(derived, config),
        position_metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DefensivePosition, DefensiveRawStats, Position, RawStats, RunningBackRawStats,
    };

    fn line(position: Position, played: u32, started: u32, stats: RawStats) -> SeasonLine {
        SeasonLine {
            player_id: "p".into(),
            season: "2024".into(),
            team_id: None,
            position,
            games_played: played,
            games_started: started,
            stats,
        }
    }

    #[test]
    fn test_running_back_metrics() {
        let l = line(
            Position::RB,
            12,
            9,
            RawStats::RunningBack(RunningBackRawStats {
                rush_attempts: 180,
                rush_yards: 900,
                rush_long: 64,
                receptions: 20,
                receiving_yards: 160,
                receiving_long: 35,
                fumbles_lost: 2,
                ..Default::default()
            }),
        );

        let m = scouting_metrics(&l, &ScoutingConfig::default());
        assert_eq!(m.efficiency, 50.0);
        assert_eq!(m.consistency, 75.0);
        assert_eq!(m.big_play_ability, 64.0);
        assert_eq!(m.clutch_performance, 0.0);
        assert_eq!(m.position_metrics["ballSecurity"], 99.0);
        assert_eq!(m.position_metrics["totalYards"], 1060.0);
    }

    #[test]
    fn test_defensive_big_plays_come_from_return_scores() {
        let l = line(
            Position::CB,
            10,
            10,
            RawStats::Defensive(DefensiveRawStats {
                total_tackles: 50,
                interception_touchdowns: 2,
                fumble_recovery_touchdowns: 1,
                ..DefensiveRawStats::empty(DefensivePosition::CB)
            }),
        );

        let m = scouting_metrics(&l, &ScoutingConfig::default());
        assert_eq!(m.efficiency, 50.0);
        assert_eq!(m.big_play_ability, 60.0);
        assert_eq!(m.position_metrics["tacklesPerGame"], 5.0);
    }

    #[test]
    fn test_no_games_means_no_consistency() {
        let l = line(
            Position::RB,
            0,
            0,
            RawStats::RunningBack(RunningBackRawStats::default()),
        );
        let m = scouting_metrics(&l, &ScoutingConfig::default());
        assert_eq!(m.consistency, 0.0);
        assert_eq!(m.efficiency, 0.0);
    }
}
