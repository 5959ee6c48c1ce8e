//! # gridiron_core - Football Statistics & Scouting-Score Engine
//!
//! Turns one season of raw counting stats into derived rate stats and a
//! 0-100 scouting score.
//!
//! ## Features
//! - Pure, synchronous arithmetic: safe to call from any thread
//! - Zero denominators produce 0, never NaN or infinity
//! - Derived values rounded to two decimals
//! - JSON API for the web layer

pub mod api;
pub mod efficiency;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scouting;
pub mod stats;

pub use api::{chemistry_json, evaluate_json, rank_json, SCHEMA_VERSION};
pub use efficiency::{
    calculate_advanced_metrics, calculate_efficiency_metrics, calculate_team_chemistry,
    AdvancedMetrics, AttemptLine, EfficiencyMetrics, TargetLine, TeamChemistry, VolumeLine,
};
pub use error::{Result, StatsError};
pub use models::{
    DefensivePosition, DefensiveRawStats, DefensiveStats, DerivedStats, Position, PositionGroup,
    QuarterbackRawStats, QuarterbackStats, RawStats, ReceiverPosition, ReceiverRawStats,
    ReceiverStats, RunningBackRawStats, RunningBackStats, SeasonLine,
};
pub use ranking::{
    check_sort_key, compare_players, group_by_position, injury_prone, player_stats,
    top_performers, PlayerComparison, PlayerSeason, SortOrder, StatsQuery,
};
pub use scouting::{scouting_metrics, scouting_score, scouting_score_with, ScoutingConfig};
pub use stats::{
    calculate_defensive_stats, calculate_qb_stats, calculate_rb_stats, calculate_receiver_stats,
    passer_rating,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
