//! # Scouting Module
//!
//! - `config` - weight/cap tables, JSON and env loading
//! - `score` - position-dispatched 0-100 scouting score
//! - `metrics` - scouting profile for a season line

pub mod config;
pub mod metrics;
pub mod score;

pub use config::{
    DefensiveWeights, QuarterbackWeights, ReceiverWeights, RunningBackWeights, ScoreTerm,
    ScoutingConfig, SCOUTING_CONFIG_PATH_ENV,
};
pub use metrics::{scouting_metrics, scouting_metrics_for, ScoutingMetrics};
pub use score::{
    ball_security_rate, scouting_score, scouting_score_with, touchdown_interception_ratio,
    SCORE_MAX, SCORE_MIN,
};
