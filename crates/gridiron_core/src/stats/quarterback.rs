use super::{count_ratio, round2};
use crate::models::{QuarterbackRawStats, QuarterbackStats};
use tracing::trace;

/// Upper bound of a single passer-rating component.
const COMPONENT_MAX: f64 = 2.375;

/// Rating when all four components sit at [`COMPONENT_MAX`].
pub const PASSER_RATING_MAX: f64 = 4.0 * COMPONENT_MAX / 6.0 * 100.0;

/// NFL passer rating.
///
/// Each component is clamped to `[0, 2.375]` before the sum; zero attempts
/// rate 0.
pub fn passer_rating(
    completions: u32,
    attempts: u32,
    yards: u32,
    touchdowns: u32,
    interceptions: u32,
) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    let att = attempts as f64;

    let a = (completions as f64 / att - 0.3) * 5.0;
    let b = (yards as f64 / att - 3.0) * 0.25;
    let c = (touchdowns as f64 / att) * 20.0;
    let d = COMPONENT_MAX - (interceptions as f64 / att) * 25.0;

    let sum: f64 = [a, b, c, d]
        .iter()
        .map(|component| component.clamp(0.0, COMPONENT_MAX))
        .sum();

    sum / 6.0 * 100.0
}

pub fn calculate_qb_stats(raw: &QuarterbackRawStats) -> QuarterbackStats {
    let completion_percentage = count_ratio(raw.pass_completions, raw.pass_attempts) * 100.0;
    let yards_per_attempt = count_ratio(raw.pass_yards, raw.pass_attempts);
    let yards_per_completion = count_ratio(raw.pass_yards, raw.pass_completions);
    let rating = passer_rating(
        raw.pass_completions,
        raw.pass_attempts,
        raw.pass_yards,
        raw.pass_touchdowns,
        raw.interceptions,
    );

    trace!(attempts = raw.pass_attempts, rating, "derived quarterback line");

    QuarterbackStats {
        raw: raw.clone(),
        completion_percentage: round2(completion_percentage),
        yards_per_attempt: round2(yards_per_attempt),
        yards_per_completion: round2(yards_per_completion),
        passer_rating: round2(rating),
        qbr: 0.0,
    }
}
