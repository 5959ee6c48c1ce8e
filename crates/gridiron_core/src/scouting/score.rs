//! 0-100 scouting score from one derived stat line.
//!
//! Each position sums independently capped weighted terms, then the total is
//! clamped to `[0, 100]`.

use super::config::{
    DefensiveWeights, QuarterbackWeights, ReceiverWeights, RunningBackWeights, ScoutingConfig,
};
use crate::models::{
    DefensiveStats, DerivedStats, QuarterbackStats, ReceiverStats, RunningBackStats,
};
use crate::stats::{ratio, round2};
use tracing::debug;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Scouting score with the default weight table.
pub fn scouting_score(stats: &DerivedStats) -> f64 {
    scouting_score_with(stats, &ScoutingConfig::default())
}

pub fn scouting_score_with(stats: &DerivedStats, config: &ScoutingConfig) -> f64 {
    let total = match stats {
        DerivedStats::Quarterback(qb) => quarterback_score(qb, &config.quarterback),
        DerivedStats::RunningBack(rb) => running_back_score(rb, &config.running_back),
        DerivedStats::Receiver(wr) => receiver_score(wr, &config.receiver),
        DerivedStats::Defensive(d) => defensive_score(d, &config.defensive),
    };

    let score = round2(total.clamp(SCORE_MIN, SCORE_MAX));
    debug!(position = %stats.position(), raw_total = total, score, "scouting score");
    score
}

/// TD/INT ratio; without interceptions the touchdowns count double.
pub fn touchdown_interception_ratio(touchdowns: u32, interceptions: u32) -> f64 {
    if interceptions > 0 {
        touchdowns as f64 / interceptions as f64
    } else {
        touchdowns as f64 * 2.0
    }
}

fn quarterback_score(qb: &QuarterbackStats, w: &QuarterbackWeights) -> f64 {
    let td_int = touchdown_interception_ratio(qb.raw.pass_touchdowns, qb.raw.interceptions);

    w.completion_percentage.apply(qb.completion_percentage)
        + w.yards_per_attempt.apply(qb.yards_per_attempt)
        + w.touchdown_interception_ratio.apply(td_int)
        + w.passer_rating.apply(qb.passer_rating)
}

fn running_back_score(rb: &RunningBackStats, w: &RunningBackWeights) -> f64 {
    let fumble_rate =
        fumble_loss_ratio(rb.raw.fumbles_lost, rb.raw.rush_attempts, rb.raw.receptions);

    w.yards_per_rush.apply(rb.yards_per_rush)
        + w.total_touchdowns.apply(rb.total_touchdowns as f64)
        + w.yards_per_reception.apply(rb.yards_per_reception)
        + w.ball_security.apply(1.0 - fumble_rate)
}

fn receiver_score(wr: &ReceiverStats, w: &ReceiverWeights) -> f64 {
    w.yards_per_reception.apply(wr.yards_per_reception)
        + w.catch_percentage.apply(wr.catch_percentage)
        + w.total_touchdowns.apply(wr.total_touchdowns as f64)
        + w.yards_per_target.apply(wr.yards_per_target)
}

fn defensive_score(d: &DefensiveStats, w: &DefensiveWeights) -> f64 {
    w.tackles_per_game.apply(d.tackles_per_game)
        + w.sacks_per_game.apply(d.sacks_per_game)
        + w.interceptions.apply(d.raw.interceptions as f64)
        + w.passes_defended.apply(d.raw.passes_defended as f64)
        + w.forced_fumbles.apply(d.raw.forced_fumbles as f64)
}

/// Lost fumbles per touch; touches are summed in `u64` so they never saturate.
fn fumble_loss_ratio(fumbles_lost: u32, rush_attempts: u32, receptions: u32) -> f64 {
    let touches = rush_attempts as u64 + receptions as u64;
    ratio(fumbles_lost as f64, touches as f64)
}

/// Share of touches kept, for display alongside the score.
pub fn ball_security_rate(fumbles_lost: u32, rush_attempts: u32, receptions: u32) -> f64 {
    round2((1.0 - fumble_loss_ratio(fumbles_lost, rush_attempts, receptions)) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DefensivePosition, DefensiveRawStats, QuarterbackRawStats, RawStats, ReceiverPosition,
        ReceiverRawStats, RunningBackRawStats,
    };
    use crate::scouting::config::ScoreTerm;
    use proptest::prelude::*;

    fn derive(raw: RawStats, games: u32) -> DerivedStats {
        raw.derive(games)
    }

    #[test]
    fn test_quarterback_score() {
        let stats = derive(
            RawStats::Quarterback(QuarterbackRawStats {
                pass_attempts: 30,
                pass_completions: 20,
                pass_yards: 250,
                pass_touchdowns: 2,
                interceptions: 1,
                ..Default::default()
            }),
            1,
        );

        // 66.67*0.3=20.001, 8.33*2.5=20.825, 2*5=10, min(100.69*0.2, 20)=20
        assert_eq!(scouting_score(&stats), 70.83);
    }

    #[test]
    fn test_quarterback_without_interceptions_doubles_touchdowns() {
        assert_eq!(touchdown_interception_ratio(3, 0), 6.0);
        assert_eq!(touchdown_interception_ratio(3, 2), 1.5);
        assert_eq!(touchdown_interception_ratio(0, 0), 0.0);
    }

    #[test]
    fn test_running_back_score() {
        let stats = derive(
            RawStats::RunningBack(RunningBackRawStats {
                rush_attempts: 180,
                rush_yards: 900,
                rush_touchdowns: 6,
                fumbles: 3,
                fumbles_lost: 2,
                receptions: 20,
                receiving_yards: 160,
                receiving_touchdowns: 1,
                ..Default::default()
            }),
            1,
        );

        // ypr 5.0 -> 40 (cap), td 7 -> 21, ypc 8.0 -> 16, security (1-2/200)*10 = 9.9
        assert_eq!(scouting_score(&stats), 86.9);
    }

    #[test]
    fn test_running_back_without_touches_keeps_security_term() {
        let stats = derive(RawStats::RunningBack(RunningBackRawStats::default()), 0);
        assert_eq!(scouting_score(&stats), 10.0);
    }

    #[test]
    fn test_receiver_score() {
        let stats = derive(
            RawStats::Receiver(ReceiverRawStats {
                receptions: 8,
                receiving_yards: 100,
                receiving_touchdowns: 1,
                targets: 10,
                ..ReceiverRawStats::empty(ReceiverPosition::WR)
            }),
            1,
        );

        // ypr 12.5*1.5=18.75, catch 80*0.25=20, td 4, ypt 10*1.5=15
        assert_eq!(scouting_score(&stats), 57.75);
    }

    #[test]
    fn test_defensive_score() {
        let stats = derive(
            RawStats::Defensive(DefensiveRawStats {
                total_tackles: 120,
                sacks: 12,
                interceptions: 2,
                passes_defended: 4,
                forced_fumbles: 3,
                ..DefensiveRawStats::empty(DefensivePosition::OLB)
            }),
            12,
        );

        // tpg 10 -> 30 (cap), spg 1.0 -> 10, int 10, pd 8, ff 15 -> 10
        assert_eq!(scouting_score(&stats), 68.0);
    }

    #[test]
    fn test_custom_weights_change_score() {
        let stats = derive(
            RawStats::Defensive(DefensiveRawStats {
                interceptions: 2,
                ..DefensiveRawStats::empty(DefensivePosition::CB)
            }),
            10,
        );
        let mut config = ScoutingConfig::default();
        config.defensive.interceptions = ScoreTerm::new(20.0, 50.0);

        assert_eq!(scouting_score(&stats), 10.0);
        assert_eq!(scouting_score_with(&stats, &config), 40.0);
    }

    #[test]
    fn test_total_is_clamped_when_caps_exceed_hundred() {
        let stats = derive(
            RawStats::Defensive(DefensiveRawStats {
                total_tackles: 500,
                sacks: 100,
                interceptions: 50,
                passes_defended: 50,
                forced_fumbles: 50,
                ..DefensiveRawStats::empty(DefensivePosition::DE)
            }),
            1,
        );
        // 30 + 25 + 20 + 15 + 10 = 100 under defaults; inflate caps past that.
        let mut config = ScoutingConfig::default();
        config.defensive.tackles_per_game = ScoreTerm::new(3.0, 80.0);

        assert_eq!(scouting_score(&stats), 100.0);
        assert_eq!(scouting_score_with(&stats, &config), 100.0);
    }

    #[test]
    fn test_ball_security_rate() {
        assert_eq!(ball_security_rate(2, 180, 20), 99.0);
        assert_eq!(ball_security_rate(0, 0, 0), 100.0);
    }

    #[test]
    fn test_ball_security_matches_score_term_for_huge_touch_counts() {
        // u32::MAX + u32::MAX touches would saturate in u32 arithmetic.
        let raw = RunningBackRawStats {
            rush_attempts: u32::MAX,
            receptions: u32::MAX,
            fumbles_lost: u32::MAX,
            ..Default::default()
        };
        let stats = derive(RawStats::RunningBack(raw.clone()), 1);

        // Half the touches were lost: 50% kept, security term 0.5 * 10.
        assert_eq!(ball_security_rate(raw.fumbles_lost, raw.rush_attempts, raw.receptions), 50.0);
        assert_eq!(scouting_score(&stats), 5.0);
    }

    fn any_raw() -> impl Strategy<Value = (RawStats, u32)> {
        let qb = (any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>()).prop_map(
            |(att, cmp, yds, td, int)| {
                RawStats::Quarterback(QuarterbackRawStats {
                    pass_attempts: att,
                    pass_completions: cmp,
                    pass_yards: yds,
                    pass_touchdowns: td,
                    interceptions: int,
                    ..Default::default()
                })
            },
        );
        let rb = (any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>()).prop_map(
            |(att, yds, rec, lost, td)| {
                RawStats::RunningBack(RunningBackRawStats {
                    rush_attempts: att,
                    rush_yards: yds,
                    rush_touchdowns: td,
                    receptions: rec,
                    receiving_yards: yds,
                    fumbles_lost: lost,
                    ..Default::default()
                })
            },
        );
        let wr = (any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>()).prop_map(
            |(rec, yds, tgt, td)| {
                RawStats::Receiver(ReceiverRawStats {
                    receptions: rec,
                    receiving_yards: yds,
                    targets: tgt,
                    receiving_touchdowns: td,
                    ..ReceiverRawStats::empty(ReceiverPosition::TE)
                })
            },
        );
        let def = (any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>()).prop_map(
            |(tk, sk, int, pd, ff)| {
                RawStats::Defensive(DefensiveRawStats {
                    total_tackles: tk,
                    sacks: sk,
                    interceptions: int,
                    passes_defended: pd,
                    forced_fumbles: ff,
                    ..DefensiveRawStats::empty(DefensivePosition::SS)
                })
            },
        );
        (prop_oneof![qb, rb, wr, def], any::<u32>())
    }

    proptest! {
        #[test]
        fn prop_score_always_in_range((raw, games) in any_raw()) {
            let score = scouting_score(&raw.derive(games));
            prop_assert!(score.is_finite());
            prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&score));
        }
    }
}
