use super::{count_ratio, round2};
use crate::models::{DefensiveRawStats, DefensiveStats};

/// Per-game defensive rates.
///
/// `games_played` comes from the season line, not the defensive record.
pub fn calculate_defensive_stats(raw: &DefensiveRawStats, games_played: u32) -> DefensiveStats {
    DefensiveStats {
        raw: raw.clone(),
        tackles_per_game: round2(count_ratio(raw.total_tackles, games_played)),
        sacks_per_game: round2(count_ratio(raw.sacks, games_played)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DefensivePosition;

    fn linebacker() -> DefensiveRawStats {
        DefensiveRawStats {
            total_tackles: 110,
            sacks: 7,
            ..DefensiveRawStats::empty(DefensivePosition::LB)
        }
    }

    #[test]
    fn test_per_game_rates_divide_by_games() {
        let d = calculate_defensive_stats(&linebacker(), 12);
        assert_eq!(d.tackles_per_game, 9.17);
        assert_eq!(d.sacks_per_game, 0.58);
    }

    #[test]
    fn test_zero_games() {
        let d = calculate_defensive_stats(&linebacker(), 0);
        assert_eq!(d.tackles_per_game, 0.0);
        assert_eq!(d.sacks_per_game, 0.0);
        assert_eq!(d.raw.total_tackles, 110);
    }
}
