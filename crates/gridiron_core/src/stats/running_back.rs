use super::{count_ratio, round2};
use crate::models::{RunningBackRawStats, RunningBackStats};

pub fn calculate_rb_stats(raw: &RunningBackRawStats) -> RunningBackStats {
    RunningBackStats {
        raw: raw.clone(),
        yards_per_rush: round2(count_ratio(raw.rush_yards, raw.rush_attempts)),
        yards_per_reception: round2(count_ratio(raw.receiving_yards, raw.receptions)),
        total_yards: raw.rush_yards as u64 + raw.receiving_yards as u64,
        total_touchdowns: raw.rush_touchdowns as u64 + raw.receiving_touchdowns as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rates_and_totals() {
        let rb = calculate_rb_stats(&RunningBackRawStats {
            rush_attempts: 200,
            rush_yards: 950,
            rush_touchdowns: 9,
            receptions: 30,
            receiving_yards: 245,
            receiving_touchdowns: 2,
            ..Default::default()
        });

        assert_eq!(rb.yards_per_rush, 4.75);
        assert_eq!(rb.yards_per_reception, 8.17);
        assert_eq!(rb.total_yards, 1195);
        assert_eq!(rb.total_touchdowns, 11);
    }

    #[test]
    fn test_no_touches() {
        let rb = calculate_rb_stats(&RunningBackRawStats::default());
        assert_eq!(rb.yards_per_rush, 0.0);
        assert_eq!(rb.yards_per_reception, 0.0);
        assert_eq!(rb.total_yards, 0);
    }

    proptest! {
        #[test]
        fn prop_totals_are_plain_sums(
            rush_yards in any::<u32>(),
            rec_yards in any::<u32>(),
            rush_td in any::<u32>(),
            rec_td in any::<u32>(),
            rush_att in 0u32..500,
            receptions in 0u32..200,
        ) {
            let rb = calculate_rb_stats(&RunningBackRawStats {
                rush_attempts: rush_att,
                rush_yards,
                rush_touchdowns: rush_td,
                receptions,
                receiving_yards: rec_yards,
                receiving_touchdowns: rec_td,
                ..Default::default()
            });
            prop_assert_eq!(rb.total_yards, rush_yards as u64 + rec_yards as u64);
            prop_assert_eq!(rb.total_touchdowns, rush_td as u64 + rec_td as u64);
            prop_assert!(rb.yards_per_rush.is_finite());
            prop_assert!(rb.yards_per_reception.is_finite());
            if rush_att == 0 {
                prop_assert_eq!(rb.yards_per_rush, 0.0);
            }
            if receptions == 0 {
                prop_assert_eq!(rb.yards_per_reception, 0.0);
            }
        }
    }
}
