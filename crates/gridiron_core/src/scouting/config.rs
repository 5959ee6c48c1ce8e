//! Weight and cap tables for the scouting score.
//!
//! Defaults reproduce the standard table. A JSON file named by
//! `GRIDIRON_SCOUTING_CONFIG` replaces them; missing sections keep defaults.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use tracing::{debug, info, warn};

pub const SCOUTING_CONFIG_PATH_ENV: &str = "GRIDIRON_SCOUTING_CONFIG";

/// One weighted term: `min(value * weight, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerm {
    pub weight: f64,
    pub cap: f64,
}

impl ScoreTerm {
    pub const fn new(weight: f64, cap: f64) -> Self {
        Self { weight, cap }
    }

    /// Weighted value, capped from above only.
    pub fn apply(&self, value: f64) -> f64 {
        (value * self.weight).min(self.cap)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(StatsError::InvalidConfig(format!(
                "{name}: weight must be a non-negative number, got {}",
                self.weight
            )));
        }
        if !self.cap.is_finite() || self.cap < 0.0 {
            return Err(StatsError::InvalidConfig(format!(
                "{name}: cap must be a non-negative number, got {}",
                self.cap
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuarterbackWeights {
    pub completion_percentage: ScoreTerm,
    pub yards_per_attempt: ScoreTerm,
    /// Applied to TD/INT, or to TD x 2 with no interceptions.
    pub touchdown_interception_ratio: ScoreTerm,
    pub passer_rating: ScoreTerm,
}

impl Default for QuarterbackWeights {
    fn default() -> Self {
        Self {
            completion_percentage: ScoreTerm::new(0.3, 30.0),
            yards_per_attempt: ScoreTerm::new(2.5, 25.0),
            touchdown_interception_ratio: ScoreTerm::new(5.0, 25.0),
            passer_rating: ScoreTerm::new(0.2, 20.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunningBackWeights {
    pub yards_per_rush: ScoreTerm,
    pub total_touchdowns: ScoreTerm,
    pub yards_per_reception: ScoreTerm,
    /// Applied to `1 - fumblesLost / touches`.
    pub ball_security: ScoreTerm,
}

impl Default for RunningBackWeights {
    fn default() -> Self {
        Self {
            yards_per_rush: ScoreTerm::new(10.0, 40.0),
            total_touchdowns: ScoreTerm::new(3.0, 30.0),
            yards_per_reception: ScoreTerm::new(2.0, 20.0),
            ball_security: ScoreTerm::new(10.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiverWeights {
    pub yards_per_reception: ScoreTerm,
    pub catch_percentage: ScoreTerm,
    pub total_touchdowns: ScoreTerm,
    pub yards_per_target: ScoreTerm,
}

impl Default for ReceiverWeights {
    fn default() -> Self {
        Self {
            yards_per_reception: ScoreTerm::new(1.5, 35.0),
            catch_percentage: ScoreTerm::new(0.25, 25.0),
            total_touchdowns: ScoreTerm::new(4.0, 25.0),
            yards_per_target: ScoreTerm::new(1.5, 15.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefensiveWeights {
    pub tackles_per_game: ScoreTerm,
    pub sacks_per_game: ScoreTerm,
    pub interceptions: ScoreTerm,
    pub passes_defended: ScoreTerm,
    pub forced_fumbles: ScoreTerm,
}

impl Default for DefensiveWeights {
    fn default() -> Self {
        Self {
            tackles_per_game: ScoreTerm::new(3.0, 30.0),
            sacks_per_game: ScoreTerm::new(10.0, 25.0),
            interceptions: ScoreTerm::new(5.0, 20.0),
            passes_defended: ScoreTerm::new(2.0, 15.0),
            forced_fumbles: ScoreTerm::new(5.0, 10.0),
        }
    }
}

/// Scouting weights for every position group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoutingConfig {
    pub quarterback: QuarterbackWeights,
    pub running_back: RunningBackWeights,
    pub receiver: ReceiverWeights,
    pub defensive: DefensiveWeights,
}

impl ScoutingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScoutingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| StatsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        info!(path = %path.display(), "loaded scouting config");
        Ok(config)
    }

    /// Defaults unless `GRIDIRON_SCOUTING_CONFIG` names a file.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(SCOUTING_CONFIG_PATH_ENV) else {
            debug!("{SCOUTING_CONFIG_PATH_ENV} unset, using default scouting weights");
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            warn!("{SCOUTING_CONFIG_PATH_ENV} is blank, using default scouting weights");
            return Ok(Self::default());
        }

        Self::load(Path::new(path))
    }

    pub fn validate(&self) -> Result<()> {
        let q = &self.quarterback;
        q.completion_percentage.validate("quarterback.completionPercentage")?;
        q.yards_per_attempt.validate("quarterback.yardsPerAttempt")?;
        q.touchdown_interception_ratio
            .validate("quarterback.touchdownInterceptionRatio")?;
        q.passer_rating.validate("quarterback.passerRating")?;

        let rb = &self.running_back;
        rb.yards_per_rush.validate("runningBack.yardsPerRush")?;
        rb.total_touchdowns.validate("runningBack.totalTouchdowns")?;
        rb.yards_per_reception.validate("runningBack.yardsPerReception")?;
        rb.ball_security.validate("runningBack.ballSecurity")?;

        let wr = &self.receiver;
        wr.yards_per_reception.validate("receiver.yardsPerReception")?;
        wr.catch_percentage.validate("receiver.catchPercentage")?;
        wr.total_touchdowns.validate("receiver.totalTouchdowns")?;
        wr.yards_per_target.validate("receiver.yardsPerTarget")?;

        let d = &self.defensive;
        d.tackles_per_game.validate("defensive.tacklesPerGame")?;
        d.sacks_per_game.validate("defensive.sacksPerGame")?;
        d.interceptions.validate("defensive.interceptions")?;
        d.passes_defended.validate("defensive.passesDefended")?;
        d.forced_fumbles.validate("defensive.forcedFumbles")?;

        Ok(())
    }
}
