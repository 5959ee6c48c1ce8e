use super::{count_ratio, round2};
use crate::models::{ReceiverRawStats, ReceiverStats};

pub fn calculate_receiver_stats(raw: &ReceiverRawStats) -> ReceiverStats {
    ReceiverStats {
        raw: raw.clone(),
        yards_per_reception: round2(count_ratio(raw.receiving_yards, raw.receptions)),
        catch_percentage: round2(count_ratio(raw.receptions, raw.targets) * 100.0),
        yards_per_target: round2(count_ratio(raw.receiving_yards, raw.targets)),
        total_yards: raw.receiving_yards as u64 + raw.rush_yards as u64,
        total_touchdowns: raw.receiving_touchdowns as u64 + raw.rush_touchdowns as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReceiverPosition;

    #[test]
    fn test_wide_receiver_line() {
        let wr = calculate_receiver_stats(&ReceiverRawStats {
            receptions: 70,
            receiving_yards: 1000,
            receiving_touchdowns: 8,
            targets: 110,
            rush_attempts: 4,
            rush_yards: 25,
            rush_touchdowns: 1,
            ..ReceiverRawStats::empty(ReceiverPosition::WR)
        });

        assert_eq!(wr.yards_per_reception, 14.29);
        assert_eq!(wr.catch_percentage, 63.64);
        assert_eq!(wr.yards_per_target, 9.09);
        assert_eq!(wr.total_yards, 1025);
        assert_eq!(wr.total_touchdowns, 9);
    }

    #[test]
    fn test_no_targets() {
        let te = calculate_receiver_stats(&ReceiverRawStats::empty(ReceiverPosition::TE));
        assert_eq!(te.catch_percentage, 0.0);
        assert_eq!(te.yards_per_target, 0.0);
        assert_eq!(te.yards_per_reception, 0.0);
        assert_eq!(te.raw.position, ReceiverPosition::TE);
    }
}
