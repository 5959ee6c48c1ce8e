//! Gridiron CLI
//!
//! Evaluate, rank and compare football season lines from JSON files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridiron_core::api::{evaluate, rank, EvaluateRequest, RankRequest};
use gridiron_core::{
    chemistry_json, compare_players, Position, ScoutingConfig, SeasonLine, SortOrder, StatsQuery,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Football season stats and scouting scores", long_about = None)]
struct Cli {
    /// Scouting weight table (JSON); overrides GRIDIRON_SCOUTING_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(value: Order) -> Self {
        match value {
            Order::Asc => SortOrder::Asc,
            Order::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Derive stats, scouting scores and metrics for every line
    Evaluate {
        /// JSON array of season lines
        #[arg(long)]
        input: PathBuf,
    },

    /// Rank lines of one position and season
    Rank {
        /// JSON array of season lines
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        position: String,

        #[arg(long)]
        season: String,

        /// camelCase stat name; defaults to the position's volume stat
        #[arg(long)]
        sort_by: Option<String>,

        #[arg(long, value_enum, default_value = "desc")]
        order: Order,

        #[arg(long, default_value = "10")]
        limit: usize,

        #[arg(long, default_value = "0")]
        offset: usize,

        #[arg(long)]
        min_games: Option<u32>,
    },

    /// Derived seasons for several players side by side
    Compare {
        /// JSON array of season lines
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        season: String,

        /// Player ids, in output order
        #[arg(long = "player", required = true)]
        players: Vec<String>,
    },

    /// QB-receiver chemistry from a chemistry request file
    Chemistry {
        #[arg(long)]
        input: PathBuf,
    },
}

fn read_lines(path: &Path) -> Result<Vec<SeasonLine>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let lines: Vec<SeasonLine> = serde_json::from_str(&content)
        .with_context(|| format!("parsing season lines from {}", path.display()))?;
    debug!(count = lines.len(), path = %path.display(), "loaded season lines");
    Ok(lines)
}

fn load_config(path: Option<&Path>) -> Result<ScoutingConfig> {
    let config = match path {
        Some(p) => ScoutingConfig::load(p)?,
        None => ScoutingConfig::from_env()?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Evaluate { input } => {
            let request = EvaluateRequest {
                schema_version: gridiron_core::SCHEMA_VERSION,
                lines: read_lines(&input)?,
            };
            serde_json::to_string_pretty(&evaluate(&request, &config)?)?
        }

        Commands::Rank {
            input,
            position,
            season,
            sort_by,
            order,
            limit,
            offset,
            min_games,
        } => {
            let position: Position = position.parse()?;
            let query = StatsQuery {
                sort_by,
                sort_order: order.into(),
                limit,
                offset,
                min_games,
                ..StatsQuery::new(position, season)
            };
            let request = RankRequest {
                schema_version: gridiron_core::SCHEMA_VERSION,
                query,
                lines: read_lines(&input)?,
            };
            serde_json::to_string_pretty(&rank(&request, &config)?)?
        }

        Commands::Compare {
            input,
            season,
            players,
        } => {
            let lines = read_lines(&input)?;
            let compared = compare_players(&lines, &players, &season, &config);
            serde_json::to_string_pretty(&compared)?
        }

        Commands::Chemistry { input } => {
            let content = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let compact = chemistry_json(&content)?;
            let value: serde_json::Value = serde_json::from_str(&compact)?;
            serde_json::to_string_pretty(&value)?
        }
    };

    println!("{output}");
    Ok(())
}
