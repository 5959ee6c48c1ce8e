//! Position tags and position groups.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every position tag the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DE,
    DT,
    LB,
    CB,
    S,
    OLB,
    ILB,
    FS,
    SS,
    NT,
}

/// Coarse grouping that selects the calculator and scouting formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionGroup {
    Quarterback,
    RunningBack,
    Receiver,
    Defensive,
}

impl PositionGroup {
    pub fn name(&self) -> &'static str {
        match self {
            PositionGroup::Quarterback => "quarterback",
            PositionGroup::RunningBack => "running back",
            PositionGroup::Receiver => "receiver",
            PositionGroup::Defensive => "defensive",
        }
    }
}

impl Position {
    pub const ALL: [Position; 14] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DE,
        Position::DT,
        Position::LB,
        Position::CB,
        Position::S,
        Position::OLB,
        Position::ILB,
        Position::FS,
        Position::SS,
        Position::NT,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DE => "DE",
            Position::DT => "DT",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S => "S",
            Position::OLB => "OLB",
            Position::ILB => "ILB",
            Position::FS => "FS",
            Position::SS => "SS",
            Position::NT => "NT",
        }
    }

    /// Anything that is not QB/RB/WR/TE falls into the defensive group.
    pub fn group(&self) -> PositionGroup {
        match self {
            Position::QB => PositionGroup::Quarterback,
            Position::RB => PositionGroup::RunningBack,
            Position::WR | Position::TE => PositionGroup::Receiver,
            _ => PositionGroup::Defensive,
        }
    }

    pub fn is_defensive(&self) -> bool {
        self.group() == PositionGroup::Defensive
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| StatsError::UnknownPosition(tag.to_string()))
    }
}

/// Receiver tag carried on receiver stat lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReceiverPosition {
    WR,
    TE,
}

impl From<ReceiverPosition> for Position {
    fn from(value: ReceiverPosition) -> Self {
        match value {
            ReceiverPosition::WR => Position::WR,
            ReceiverPosition::TE => Position::TE,
        }
    }
}

impl TryFrom<Position> for ReceiverPosition {
    type Error = StatsError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        match value {
            Position::WR => Ok(ReceiverPosition::WR),
            Position::TE => Ok(ReceiverPosition::TE),
            other => Err(StatsError::PositionMismatch {
                position: other.to_string(),
                group: PositionGroup::Receiver.name(),
            }),
        }
    }
}

/// Defensive tag carried on defensive stat lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DefensivePosition {
    DE,
    DT,
    LB,
    CB,
    S,
    OLB,
    ILB,
    FS,
    SS,
    NT,
}

impl From<DefensivePosition> for Position {
    fn from(value: DefensivePosition) -> Self {
        match value {
            DefensivePosition::DE => Position::DE,
            DefensivePosition::DT => Position::DT,
            DefensivePosition::LB => Position::LB,
            DefensivePosition::CB => Position::CB,
            DefensivePosition::S => Position::S,
            DefensivePosition::OLB => Position::OLB,
            DefensivePosition::ILB => Position::ILB,
            DefensivePosition::FS => Position::FS,
            DefensivePosition::SS => Position::SS,
            DefensivePosition::NT => Position::NT,
        }
    }
}

impl TryFrom<Position> for DefensivePosition {
    type Error = StatsError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        match value {
            Position::DE => Ok(DefensivePosition::DE),
            Position::DT => Ok(DefensivePosition::DT),
            Position::LB => Ok(DefensivePosition::LB),
            Position::CB => Ok(DefensivePosition::CB),
            Position::S => Ok(DefensivePosition::S),
            Position::OLB => Ok(DefensivePosition::OLB),
            Position::ILB => Ok(DefensivePosition::ILB),
            Position::FS => Ok(DefensivePosition::FS),
            Position::SS => Ok(DefensivePosition::SS),
            Position::NT => Ok(DefensivePosition::NT),
            other => Err(StatsError::PositionMismatch {
                position: other.to_string(),
                group: PositionGroup::Defensive.name(),
            }),
        }
    }
}
