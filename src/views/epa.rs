use serde::Serialize;
use tracing::{debug, warn};

use crate::api::StatsApi;
use crate::api::request::Season;
use crate::error::StatViewError;
use crate::model::ranks::RankTable;
use crate::model::team::TeamId;
use crate::render::figure::{Figure, epa_figure, timestamp_label};
use crate::render::{ElementUpdate, format_epa};
use crate::stats::latest::latest_point;
use crate::views::ranks::{TeamStanding, standing};

pub const EPA_ELEMENT: &str = "epa";
pub const RANK_ELEMENT: &str = "rank";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpaPanel {
    pub season: Season,
    pub team: TeamId,
    pub current_epa: f64,
    pub as_of: String,
    pub points: usize,
    pub standing: Option<TeamStanding>,
    pub figure: Figure,
    pub updates: Vec<ElementUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpaAtTime {
    pub season: Season,
    pub team: TeamId,
    pub time: f64,
    pub epa: f64,
    pub updates: Vec<ElementUpdate>,
}

pub fn build_epa_panel(
    api: &dyn StatsApi,
    season: Season,
    team: &TeamId,
    ranks: &RankTable,
) -> Result<EpaPanel, StatViewError> {
    let series = api.epa_history(season, team)?;
    let (as_of, current_epa) = latest_point(&series)?;
    debug!(team = %team, points = series.len(), as_of, "EPA history loaded");

    let standing = match standing(ranks, team) {
        Ok(s) => Some(s),
        Err(err) => {
            warn!("{err}; showing EPA without a world rank");
            None
        }
    };

    let updates = epa_updates(current_epa, standing.as_ref());
    Ok(EpaPanel {
        season,
        team: team.clone(),
        current_epa,
        as_of: timestamp_label(as_of),
        points: series.len(),
        standing,
        figure: epa_figure(&series),
        updates,
    })
}

pub fn build_epa_at(
    api: &dyn StatsApi,
    season: Season,
    team: &TeamId,
    time: f64,
) -> Result<EpaAtTime, StatViewError> {
    let epa = api.epa_at(season, team, time)?;
    Ok(EpaAtTime {
        season,
        team: team.clone(),
        time,
        epa,
        updates: vec![ElementUpdate::text(EPA_ELEMENT, epa_label(epa))],
    })
}

pub fn epa_label(epa: f64) -> String {
    format!("EPA: {}", format_epa(epa))
}

pub fn rank_label(standing: Option<&TeamStanding>) -> String {
    match standing {
        Some(s) => format!("World Rank: #{}", s.rank),
        None => "World Rank: unranked".to_string(),
    }
}

fn epa_updates(epa: f64, standing: Option<&TeamStanding>) -> Vec<ElementUpdate> {
    let mut rank = ElementUpdate::text(RANK_ELEMENT, rank_label(standing));
    if let Some(s) = standing {
        rank.class = Some(s.style.css_classes());
    }
    vec![ElementUpdate::text(EPA_ELEMENT, epa_label(epa)), rank]
}

#[cfg(test)]
#[path = "../../tests/src_inline/views/epa.rs"]
mod tests;
