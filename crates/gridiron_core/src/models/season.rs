//! One player's season line as supplied by the stats store.

use super::position::{DefensivePosition, Position, PositionGroup, ReceiverPosition};
use super::records::{
    DefensiveRawStats, QuarterbackRawStats, RawStats, ReceiverRawStats, RunningBackRawStats,
};
use crate::error::StatsError;
use serde::{Deserialize, Serialize};

/// A player's season: games context plus the position-specific raw stats.
///
/// On the wire `stats` is the raw record for the line's position group;
/// receiver and defensive records may omit `position`, in which case the
/// line's position is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SeasonLineWire")]
pub struct SeasonLine {
    pub player_id: String,
    pub season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub position: Position,
    pub games_played: u32,
    pub games_started: u32,
    pub stats: RawStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeasonLineWire {
    player_id: String,
    season: String,
    #[serde(default)]
    team_id: Option<String>,
    position: Position,
    #[serde(default)]
    games_played: u32,
    #[serde(default)]
    games_started: u32,
    stats: serde_json::Value,
}

impl TryFrom<SeasonLineWire> for SeasonLine {
    type Error = StatsError;

    fn try_from(wire: SeasonLineWire) -> Result<Self, Self::Error> {
        let position = wire.position;
        let mut payload = wire.stats;

        let stats = match position.group() {
            PositionGroup::Quarterback => {
                RawStats::Quarterback(serde_json::from_value::<QuarterbackRawStats>(payload)?)
            }
            PositionGroup::RunningBack => {
                RawStats::RunningBack(serde_json::from_value::<RunningBackRawStats>(payload)?)
            }
            PositionGroup::Receiver => {
                fill_position(&mut payload, position);
                RawStats::Receiver(serde_json::from_value::<ReceiverRawStats>(payload)?)
            }
            PositionGroup::Defensive => {
                fill_position(&mut payload, position);
                RawStats::Defensive(serde_json::from_value::<DefensiveRawStats>(payload)?)
            }
        };

        let line = SeasonLine {
            player_id: wire.player_id,
            season: wire.season,
            team_id: wire.team_id,
            position,
            games_played: wire.games_played,
            games_started: wire.games_started,
            stats,
        };
        line.check_position()?;
        Ok(line)
    }
}

fn fill_position(payload: &mut serde_json::Value, position: Position) {
    if let Some(obj) = payload.as_object_mut() {
        obj.entry("position")
            .or_insert_with(|| serde_json::Value::String(position.as_str().to_string()));
    }
}

impl SeasonLine {
    /// Position carried by the raw stats payload.
    pub fn stats_position(&self) -> Position {
        self.stats.position()
    }

    /// Fails when the line's tag disagrees with its stats payload.
    pub fn check_position(&self) -> Result<(), StatsError> {
        let inner = self.stats_position();
        if inner == self.position {
            Ok(())
        } else {
            Err(StatsError::PositionMismatch {
                position: self.position.to_string(),
                group: inner.group().name(),
            })
        }
    }
}

impl RawStats {
    /// All-zero record for a position.
    pub fn empty(position: Position) -> Self {
        let defensive = |d: DefensivePosition| RawStats::Defensive(DefensiveRawStats::empty(d));
        match position {
            Position::QB => RawStats::Quarterback(QuarterbackRawStats::default()),
            Position::RB => RawStats::RunningBack(RunningBackRawStats::default()),
            Position::WR => RawStats::Receiver(ReceiverRawStats::empty(ReceiverPosition::WR)),
            Position::TE => RawStats::Receiver(ReceiverRawStats::empty(ReceiverPosition::TE)),
            Position::DE => defensive(DefensivePosition::DE),
            Position::DT => defensive(DefensivePosition::DT),
            Position::LB => defensive(DefensivePosition::LB),
            Position::CB => defensive(DefensivePosition::CB),
            Position::S => defensive(DefensivePosition::S),
            Position::OLB => defensive(DefensivePosition::OLB),
            Position::ILB => defensive(DefensivePosition::ILB),
            Position::FS => defensive(DefensivePosition::FS),
            Position::SS => defensive(DefensivePosition::SS),
            Position::NT => defensive(DefensivePosition::NT),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            RawStats::Quarterback(_) => Position::QB,
            RawStats::RunningBack(_) => Position::RB,
            RawStats::Receiver(r) => r.position.into(),
            RawStats::Defensive(d) => d.position.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receiver_line_inherits_position() {
        let line: SeasonLine = serde_json::from_value(json!({
            "playerId": "p1",
            "season": "2024",
            "position": "TE",
            "gamesPlayed": 12,
            "gamesStarted": 10,
            "stats": {
                "receptions": 40, "receivingYards": 500, "receivingTouchdowns": 4,
                "receivingLong": 44, "targets": 55, "drops": 2, "fumbles": 0,
                "fumblesLost": 0, "rushAttempts": 0, "rushYards": 0, "rushTouchdowns": 0
            }
        }))
        .unwrap();

        assert_eq!(line.position, Position::TE);
        assert_eq!(line.stats_position(), Position::TE);
        assert!(line.team_id.is_none());
    }

    #[test]
    fn test_mismatched_payload_position_is_rejected() {
        let result = serde_json::from_value::<SeasonLine>(json!({
            "playerId": "p2",
            "season": "2024",
            "position": "CB",
            "gamesPlayed": 12,
            "gamesStarted": 12,
            "stats": {
                "position": "LB",
                "totalTackles": 80, "soloTackles": 50, "assistedTackles": 30,
                "tacklesForLoss": 6, "sacks": 2, "quarterbackHits": 4,
                "interceptions": 1, "interceptionYards": 10, "interceptionTouchdowns": 0,
                "passesDefended": 5, "fumbleRecoveries": 1, "fumbleRecoveryYards": 0,
                "fumbleRecoveryTouchdowns": 0, "forcedFumbles": 2
            }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_quarterback_line_requires_quarterback_fields() {
        let result = serde_json::from_value::<SeasonLine>(json!({
            "playerId": "p3",
            "season": "2024",
            "position": "QB",
            "stats": { "rushAttempts": 3 }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_record_keeps_position() {
        for p in Position::ALL {
            assert_eq!(RawStats::empty(p).position(), p);
        }
    }

    #[test]
    fn test_serialized_line_parses_back() {
        let line = SeasonLine {
            player_id: "p4".into(),
            season: "2023".into(),
            team_id: Some("t9".into()),
            position: Position::RB,
            games_played: 11,
            games_started: 9,
            stats: RawStats::RunningBack(RunningBackRawStats {
                rush_attempts: 150,
                rush_yards: 700,
                ..Default::default()
            }),
        };

        let text = serde_json::to_string(&line).unwrap();
        let parsed: SeasonLine = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, line);
    }
}
