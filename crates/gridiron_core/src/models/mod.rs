//! Statistic records exchanged with the stats store and the web layer.

pub mod position;
pub mod records;
pub mod season;

pub use position::{DefensivePosition, Position, PositionGroup, ReceiverPosition};
pub use records::{
    DefensiveRawStats, DefensiveStats, DerivedStats, QuarterbackRawStats, QuarterbackStats,
    RawStats, ReceiverRawStats, ReceiverStats, RunningBackRawStats, RunningBackStats,
};
pub use season::SeasonLine;
