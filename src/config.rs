use std::path::PathBuf;
use std::time::Duration;

use crate::api::endpoints::parse_base_url;
use crate::api::request::{EventCode, OprQuery, Season, Statistic};
use crate::cli::{Cli, Command};
use crate::error::RequestError;
use crate::model::team::TeamId;
use crate::render::OutputFormat;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TOP: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Epa {
        season: Season,
        team: TeamId,
        at: Option<f64>,
    },
    Opr {
        query: OprQuery,
        limit: Option<usize>,
    },
    Ranks {
        season: Season,
        team: Option<TeamId>,
        top: usize,
    },
    Classify {
        percentile: f64,
    },
}

impl Task {
    pub fn view_name(&self) -> &'static str {
        match self {
            Task::Epa { .. } => "epa",
            Task::Opr { .. } => "opr",
            Task::Ranks { .. } => "ranks",
            Task::Classify { .. } => "classify",
        }
    }

    pub fn uses_network(&self) -> bool {
        !matches!(self, Task::Classify { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub format: OutputFormat,
    pub out_dir: Option<PathBuf>,
    pub task: Task,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, RequestError> {
        let task = match cli.command {
            Command::Epa { season, team, at } => {
                if let Some(t) = at {
                    if !t.is_finite() {
                        return Err(RequestError::invalid("time", format!("{t} is not finite")));
                    }
                }
                Task::Epa {
                    season: Season::new(season)?,
                    team: TeamId::parse_number(&team)?,
                    at,
                }
            }
            Command::Opr {
                season,
                event,
                stat,
                limit,
            } => Task::Opr {
                query: OprQuery {
                    season: Season::new(season)?,
                    event: EventCode::parse(&event)?,
                    statistic: Statistic::parse(&stat)?,
                },
                limit,
            },
            Command::Ranks { season, team, top } => Task::Ranks {
                season: Season::new(season)?,
                team: team.as_deref().map(TeamId::parse_number).transpose()?,
                top,
            },
            Command::Classify { percentile } => Task::Classify { percentile },
        };

        if task.uses_network() {
            parse_base_url(&cli.api_url)
                .map_err(|e| RequestError::invalid("api url", e.to_string()))?;
            if cli.timeout_secs == 0 {
                return Err(RequestError::invalid("timeout", "must be at least 1 second"));
            }
        }

        Ok(Self {
            api_url: cli.api_url,
            timeout: Duration::from_secs(cli.timeout_secs),
            format: cli.format,
            out_dir: cli.out,
            task,
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
