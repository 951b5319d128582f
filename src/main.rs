mod api;
mod cli;
mod config;
mod error;
mod logging;
mod model;
mod render;
mod stats;
mod views;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::api::StatsApi;
use crate::api::client::HttpStatsApi;
use crate::cli::Cli;
use crate::config::{RunConfig, Task};
use crate::error::StatViewError;
use crate::model::ranks::RankTable;
use crate::render::json::{render_figure_json, render_unavailable_json, render_view_json};
use crate::render::text::{
    render_classify_text, render_epa_at_text, render_epa_text, render_opr_text,
    render_ranks_text, render_unavailable_text,
};
use crate::render::{OutputFormat, Rendered, emit};
use crate::views::epa::{build_epa_at, build_epa_panel};
use crate::views::opr::build_opr_panel;
use crate::views::ranks::{build_ranks_report, classify_report};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), StatViewError> {
    let config = RunConfig::from_cli(cli)?;
    info!(view = config.task.view_name(), api = %config.api_url, "starting");

    let rendered = match &config.task {
        Task::Classify { percentile } => classify_view(*percentile, config.format),
        task => {
            let api = HttpStatsApi::new(&config.api_url, config.timeout)?;
            debug!(base = %api.base_url(), timeout = ?config.timeout, "stats API client ready");
            dispatch(&api, task, config.format)
        }
    };

    match rendered {
        Ok(rendered) => {
            emit(&rendered, config.format, config.out_dir.as_deref())?;
            Ok(())
        }
        Err(err) if err.is_data_unavailable() => {
            warn!(view = config.task.view_name(), "{err}");
            let rendered = render_unavailable(config.task.view_name(), &err, config.format)?;
            emit(&rendered, config.format, config.out_dir.as_deref())?;
            Err(err)
        }
        Err(err) => Err(err),
    }
}

fn dispatch(
    api: &dyn StatsApi,
    task: &Task,
    format: OutputFormat,
) -> Result<Rendered, StatViewError> {
    match task {
        Task::Epa {
            season,
            team,
            at: Some(time),
        } => {
            let point = build_epa_at(api, *season, team, *time)?;
            finish("epa", &point, None, format, render_epa_at_text)
        }
        Task::Epa {
            season,
            team,
            at: None,
        } => {
            let ranks = match api.epa_ranks(*season) {
                Ok(ranks) => ranks,
                Err(err) => {
                    warn!("world ranks unavailable: {err}");
                    RankTable::new(season.year(), Vec::new())
                }
            };
            let panel = build_epa_panel(api, *season, team, &ranks)?;
            let figure = render_figure_json(&panel.figure)?;
            finish("epa", &panel, Some(figure), format, render_epa_text)
        }
        Task::Opr { query, limit } => {
            let panel = build_opr_panel(api, query, *limit)?;
            let figure = render_figure_json(&panel.figure)?;
            finish("opr", &panel, Some(figure), format, render_opr_text)
        }
        Task::Ranks { season, team, top } => {
            let ranks = api.epa_ranks(*season)?;
            let report = build_ranks_report(*season, &ranks, team.as_ref(), *top)?;
            finish("ranks", &report, None, format, render_ranks_text)
        }
        Task::Classify { percentile } => classify_view(*percentile, format),
    }
}

fn classify_view(percentile: f64, format: OutputFormat) -> Result<Rendered, StatViewError> {
    let report = classify_report(percentile);
    finish("classify", &report, None, format, render_classify_text)
}

fn finish<T: serde::Serialize>(
    view: &'static str,
    body: &T,
    figure: Option<String>,
    format: OutputFormat,
    text: fn(&T) -> String,
) -> Result<Rendered, StatViewError> {
    let summary = match format {
        OutputFormat::Text => text(body),
        OutputFormat::Json => render_view_json(view, body)?,
    };
    Ok(Rendered { summary, figure })
}

fn render_unavailable(
    view: &'static str,
    err: &StatViewError,
    format: OutputFormat,
) -> Result<Rendered, StatViewError> {
    let reason = err.to_string();
    let summary = match format {
        OutputFormat::Text => render_unavailable_text(view, &reason),
        OutputFormat::Json => render_unavailable_json(view, &reason)?,
    };
    Ok(Rendered {
        summary,
        figure: None,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
