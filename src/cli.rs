use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::api::request::DEFAULT_SEASON;
use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOP};
use crate::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "ftc-statview",
    version,
    about = "EPA and OPR views over the FTC stats API"
)]
pub struct Cli {
    /// Base URL of the stats backend.
    #[arg(long, env = "STATVIEW_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "STATVIEW_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Write summary and figure.json into this directory instead of stdout.
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// EPA history chart, current EPA and world rank for a team.
    Epa {
        #[arg(long, default_value_t = DEFAULT_SEASON)]
        season: u16,
        #[arg(long)]
        team: String,
        /// Only fetch the EPA at this Unix time.
        #[arg(long)]
        at: Option<f64>,
    },
    /// OPR for every team at an event, best first.
    Opr {
        #[arg(long, default_value_t = DEFAULT_SEASON)]
        season: u16,
        #[arg(long)]
        event: String,
        #[arg(long, default_value = "totalPoints")]
        stat: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Season EPA leaderboard, optionally with one team's standing.
    Ranks {
        #[arg(long, default_value_t = DEFAULT_SEASON)]
        season: u16,
        #[arg(long)]
        team: Option<String>,
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },
    /// Bucket and style for a fractional rank (no network).
    Classify {
        #[arg(allow_negative_numbers = true)]
        percentile: f64,
    },
}
