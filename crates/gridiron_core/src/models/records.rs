//! Raw and derived per-season stat records.
//!
//! Derived records embed their raw record, so on the wire a derived record is
//! the raw record plus the computed fields.

use super::position::{DefensivePosition, Position, ReceiverPosition};
use serde::{Deserialize, Serialize};

// ============================================================================
// Quarterback
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterbackRawStats {
    pub pass_attempts: u32,
    pub pass_completions: u32,
    pub pass_yards: u32,
    pub pass_touchdowns: u32,
    pub interceptions: u32,
    pub pass_long: u32,
    pub sacks: u32,
    pub sack_yards: u32,
    pub rush_attempts: u32,
    pub rush_yards: u32,
    pub rush_touchdowns: u32,
    pub rush_long: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterbackStats {
    #[serde(flatten)]
    pub raw: QuarterbackRawStats,
    pub completion_percentage: f64,
    pub yards_per_attempt: f64,
    pub yards_per_completion: f64,
    pub passer_rating: f64,
    /// Placeholder for a proprietary rating; always 0.
    pub qbr: f64,
}

// ============================================================================
// Running back
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningBackRawStats {
    pub rush_attempts: u32,
    pub rush_yards: u32,
    pub rush_touchdowns: u32,
    pub rush_long: u32,
    pub fumbles: u32,
    pub fumbles_lost: u32,
    pub receptions: u32,
    pub receiving_yards: u32,
    pub receiving_touchdowns: u32,
    pub receiving_long: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningBackStats {
    #[serde(flatten)]
    pub raw: RunningBackRawStats,
    pub yards_per_rush: f64,
    pub yards_per_reception: f64,
    pub total_yards: u64,
    pub total_touchdowns: u64,
}

// ============================================================================
// Receiver (WR / TE)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverRawStats {
    pub position: ReceiverPosition,
    pub receptions: u32,
    pub receiving_yards: u32,
    pub receiving_touchdowns: u32,
    pub receiving_long: u32,
    pub targets: u32,
    pub drops: u32,
    pub fumbles: u32,
    pub fumbles_lost: u32,
    pub rush_attempts: u32,
    pub rush_yards: u32,
    pub rush_touchdowns: u32,
}

impl ReceiverRawStats {
    /// Zeroed line for the given receiver tag.
    pub fn empty(position: ReceiverPosition) -> Self {
        Self {
            position,
            receptions: 0,
            receiving_yards: 0,
            receiving_touchdowns: 0,
            receiving_long: 0,
            targets: 0,
            drops: 0,
            fumbles: 0,
            fumbles_lost: 0,
            rush_attempts: 0,
            rush_yards: 0,
            rush_touchdowns: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverStats {
    #[serde(flatten)]
    pub raw: ReceiverRawStats,
    pub yards_per_reception: f64,
    pub catch_percentage: f64,
    pub yards_per_target: f64,
    pub total_yards: u64,
    pub total_touchdowns: u64,
}

// ============================================================================
// Defensive
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefensiveRawStats {
    pub position: DefensivePosition,
    // Tackling
    pub total_tackles: u32,
    pub solo_tackles: u32,
    pub assisted_tackles: u32,
    pub tackles_for_loss: u32,
    // Pass rush
    pub sacks: u32,
    pub quarterback_hits: u32,
    // Coverage
    pub interceptions: u32,
    pub interception_yards: u32,
    pub interception_touchdowns: u32,
    pub passes_defended: u32,
    // Turnovers
    pub fumble_recoveries: u32,
    pub fumble_recovery_yards: u32,
    pub fumble_recovery_touchdowns: u32,
    pub forced_fumbles: u32,
}

impl DefensiveRawStats {
    /// Zeroed line for the given defensive tag.
    pub fn empty(position: DefensivePosition) -> Self {
        Self {
            position,
            total_tackles: 0,
            solo_tackles: 0,
            assisted_tackles: 0,
            tackles_for_loss: 0,
            sacks: 0,
            quarterback_hits: 0,
            interceptions: 0,
            interception_yards: 0,
            interception_touchdowns: 0,
            passes_defended: 0,
            fumble_recoveries: 0,
            fumble_recovery_yards: 0,
            fumble_recovery_touchdowns: 0,
            forced_fumbles: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefensiveStats {
    #[serde(flatten)]
    pub raw: DefensiveRawStats,
    pub tackles_per_game: f64,
    pub sacks_per_game: f64,
}

// ============================================================================
// Variant wrappers
// ============================================================================

/// Raw counting stats for any position group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawStats {
    Quarterback(QuarterbackRawStats),
    RunningBack(RunningBackRawStats),
    Receiver(ReceiverRawStats),
    Defensive(DefensiveRawStats),
}

/// Derived stats for any position group; the input to scouting scores.
///
/// QB and RB lines carry no tag of their own, so the variant fixes the tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DerivedStats {
    Quarterback(QuarterbackStats),
    RunningBack(RunningBackStats),
    Receiver(ReceiverStats),
    Defensive(DefensiveStats),
}

impl DerivedStats {
    pub fn position(&self) -> Position {
        match self {
            DerivedStats::Quarterback(_) => Position::QB,
            DerivedStats::RunningBack(_) => Position::RB,
            DerivedStats::Receiver(r) => r.raw.position.into(),
            DerivedStats::Defensive(d) => d.raw.position.into(),
        }
    }
}
