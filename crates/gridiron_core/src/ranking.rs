//! # Ranking
//!
//! Filtering, sorting and paging over season lines that were already fetched
//! from the stats store. Lines are derived and scored on the way through.

use crate::error::{Result, StatsError};
use crate::models::{DerivedStats, Position, PositionGroup, RawStats, SeasonLine};
use crate::scouting::{scouting_score_with, ScoutingConfig};
use crate::stats::{count_ratio, round2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Top-performer query. `position` and `season` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub min_games: Option<u32>,
    /// camelCase field of the derived record, or `scoutingScore`,
    /// `gamesPlayed`, `gamesStarted`.
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for StatsQuery {
    fn default() -> Self {
        Self {
            player_id: None,
            season: None,
            team_id: None,
            position: None,
            min_games: None,
            sort_by: None,
            sort_order: SortOrder::Desc,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl StatsQuery {
    pub fn new(position: Position, season: impl Into<String>) -> Self {
        Self {
            position: Some(position),
            season: Some(season.into()),
            ..Self::default()
        }
    }

    fn matches(&self, line: &SeasonLine) -> bool {
        self.position.map_or(true, |p| p == line.position)
            && self.season.as_deref().map_or(true, |s| s == line.season)
            && self.player_id.as_deref().map_or(true, |id| id == line.player_id)
            && self
                .team_id
                .as_deref()
                .map_or(true, |t| line.team_id.as_deref() == Some(t))
            && self.min_games.map_or(true, |min| line.games_played >= min)
    }
}

/// Sort key used when the query names none.
pub fn default_sort_key(group: PositionGroup) -> &'static str {
    match group {
        PositionGroup::Quarterback => "passYards",
        PositionGroup::RunningBack => "rushYards",
        PositionGroup::Receiver => "receivingYards",
        PositionGroup::Defensive => "totalTackles",
    }
}

/// A season line after derivation and scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeason {
    pub player_id: String,
    pub season: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub position: Position,
    pub games_played: u32,
    pub games_started: u32,
    pub scouting_score: f64,
    pub stats: DerivedStats,
}

impl PlayerSeason {
    pub fn from_line(line: &SeasonLine, config: &ScoutingConfig) -> Self {
        let stats = line.stats.derive(line.games_played);
        Self {
            player_id: line.player_id.clone(),
            season: line.season.clone(),
            team_id: line.team_id.clone(),
            position: line.position,
            games_played: line.games_played,
            games_started: line.games_started,
            scouting_score: scouting_score_with(&stats, config),
            stats,
        }
    }
}

/// One entry of a ranking page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLine {
    pub rank: usize,
    pub sort_value: f64,
    #[serde(flatten)]
    pub player: PlayerSeason,
}

/// Sort keys taken from the season line rather than the derived record.
const LINE_SORT_KEYS: [&str; 3] = ["scoutingScore", "gamesPlayed", "gamesStarted"];

fn derived_field(stats: &DerivedStats, key: &str) -> Result<Option<f64>> {
    let value = serde_json::to_value(stats)?;
    Ok(value.get(key).and_then(serde_json::Value::as_f64))
}

/// Fails unless `key` names a numeric stat of `position`'s record.
pub fn check_sort_key(position: Position, key: &str) -> Result<()> {
    if LINE_SORT_KEYS.contains(&key) {
        return Ok(());
    }
    let zeroed = RawStats::empty(position).derive(0);
    match derived_field(&zeroed, key)? {
        Some(_) => Ok(()),
        None => Err(StatsError::UnknownSortKey(key.to_string())),
    }
}

fn sort_value(player: &PlayerSeason, key: &str) -> Result<f64> {
    match key {
        "scoutingScore" => return Ok(player.scouting_score),
        "gamesPlayed" => return Ok(player.games_played as f64),
        "gamesStarted" => return Ok(player.games_started as f64),
        _ => {}
    }

    derived_field(&player.stats, key)?
        .ok_or_else(|| StatsError::UnknownSortKey(key.to_string()))
}

/// Rank lines by a stat, best first unless `sort_order` is ascending.
pub fn top_performers(
    lines: &[SeasonLine],
    query: &StatsQuery,
    config: &ScoutingConfig,
) -> Result<Vec<RankedLine>> {
    let position = query.position.ok_or(StatsError::MissingQueryField("position"))?;
    if query.season.is_none() {
        return Err(StatsError::MissingQueryField("season"));
    }
    let key = query
        .sort_by
        .as_deref()
        .unwrap_or_else(|| default_sort_key(position.group()));
    check_sort_key(position, key)?;

    let mut ranked = Vec::new();
    for line in lines.iter().filter(|l| query.matches(l)) {
        let player = PlayerSeason::from_line(line, config);
        ranked.push(RankedLine {
            rank: 0,
            sort_value: sort_value(&player, key)?,
            player,
        });
    }

    ranked.sort_by(|a, b| match query.sort_order {
        SortOrder::Asc => a.sort_value.total_cmp(&b.sort_value),
        SortOrder::Desc => b.sort_value.total_cmp(&a.sort_value),
    });

    let matched = ranked.len();
    let page: Vec<RankedLine> = ranked
        .into_iter()
        .enumerate()
        .skip(query.offset)
        .take(query.limit)
        .map(|(i, mut r)| {
            r.rank = i + 1;
            r
        })
        .collect();

    debug!(%position, key, matched, returned = page.len(), "ranked top performers");
    Ok(page)
}

/// One player's derived season, if the store returned a line for it.
pub fn player_stats(
    lines: &[SeasonLine],
    player_id: &str,
    season: &str,
    config: &ScoutingConfig,
) -> Option<PlayerSeason> {
    lines
        .iter()
        .find(|l| l.player_id == player_id && l.season == season)
        .map(|l| PlayerSeason::from_line(l, config))
}

/// Side-by-side entry; `season` is `None` when the player has no line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerComparison {
    pub player_id: String,
    pub season: Option<PlayerSeason>,
}

/// Derived seasons for several players, in request order, any positions.
pub fn compare_players<S: AsRef<str>>(
    lines: &[SeasonLine],
    player_ids: &[S],
    season: &str,
    config: &ScoutingConfig,
) -> Vec<PlayerComparison> {
    player_ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            PlayerComparison {
                player_id: id.to_string(),
                season: player_stats(lines, id, season, config),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryRisk {
    pub player_id: String,
    pub position: Position,
    pub games_played: u32,
    pub games_started: u32,
    /// Share of games played without starting, 0..=1.
    pub injury_rate: f64,
}

/// Players who often appear without starting, highest rate first.
pub fn injury_prone(lines: &[SeasonLine], season: &str, min_games_played: u32) -> Vec<InjuryRisk> {
    let mut risks: Vec<InjuryRisk> = lines
        .iter()
        .filter(|l| l.season == season && l.games_played >= min_games_played)
        .map(|l| InjuryRisk {
            player_id: l.player_id.clone(),
            position: l.position,
            games_played: l.games_played,
            games_started: l.games_started,
            injury_rate: round2(count_ratio(
                l.games_played.saturating_sub(l.games_started),
                l.games_played,
            )),
        })
        .collect();

    risks.sort_by(|a, b| b.injury_rate.total_cmp(&a.injury_rate));
    risks
}

/// A team's season lines bucketed by position.
pub fn group_by_position<'a>(
    lines: &'a [SeasonLine],
    team_id: &str,
    season: &str,
) -> BTreeMap<Position, Vec<&'a SeasonLine>> {
    let mut groups: BTreeMap<Position, Vec<&SeasonLine>> = BTreeMap::new();
    for line in lines
        .iter()
        .filter(|l| l.season == season && l.team_id.as_deref() == Some(team_id))
    {
        groups.entry(line.position).or_default().push(line);
    }
    groups
}
