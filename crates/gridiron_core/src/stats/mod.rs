//! # Derived-Stat Calculators
//!
//! One pure function per position group. Every rate field is
//! `numerator / denominator` when the denominator is positive and `0.0`
//! otherwise, rounded to two decimals.
//!
//! - `quarterback` - completion %, yards/attempt, yards/completion, passer rating
//! - `running_back` - yards/rush, yards/reception, totals
//! - `receiver` - yards/reception, catch %, yards/target, totals
//! - `defensive` - tackles/game, sacks/game

pub mod defensive;
pub mod quarterback;
pub mod receiver;
pub mod running_back;

pub use defensive::calculate_defensive_stats;
pub use quarterback::{calculate_qb_stats, passer_rating, PASSER_RATING_MAX};
pub use receiver::calculate_receiver_stats;
pub use running_back::calculate_rb_stats;

use crate::models::{DerivedStats, RawStats};

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Same as [`ratio`] for counting stats.
pub fn count_ratio(numerator: u32, denominator: u32) -> f64 {
    ratio(numerator as f64, denominator as f64)
}

impl RawStats {
    /// Run the calculator for this record's group.
    ///
    /// `games_played` only feeds the defensive per-game rates.
    pub fn derive(&self, games_played: u32) -> DerivedStats {
        match self {
            RawStats::Quarterback(raw) => DerivedStats::Quarterback(calculate_qb_stats(raw)),
            RawStats::RunningBack(raw) => DerivedStats::RunningBack(calculate_rb_stats(raw)),
            RawStats::Receiver(raw) => DerivedStats::Receiver(calculate_receiver_stats(raw)),
            RawStats::Defensive(raw) => {
                DerivedStats::Defensive(calculate_defensive_stats(raw, games_played))
            }
        }
    }
}
