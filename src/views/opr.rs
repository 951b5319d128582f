use serde::Serialize;
use tracing::{info, warn};

use crate::api::StatsApi;
use crate::api::request::OprQuery;
use crate::error::StatViewError;
use crate::model::team::TeamId;
use crate::render::figure::{Figure, opr_figure};
use crate::stats::rank::rank;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OprRow {
    pub position: usize,
    pub team: TeamId,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OprPanel {
    pub query: OprQuery,
    pub teams_at_event: usize,
    pub rows: Vec<OprRow>,
    pub figure: Figure,
}

pub fn build_opr_panel(
    api: &dyn StatsApi,
    query: &OprQuery,
    limit: Option<usize>,
) -> Result<OprPanel, StatViewError> {
    if !query.statistic.is_known() {
        warn!(
            statistic = query.statistic.as_str(),
            "statistic is not a known 2024 score field; the backend may reject it"
        );
    }

    let scores = api.opr(query)?;
    let order = rank(&scores);
    if order.is_empty() {
        warn!(event = query.event.as_str(), "no OPR values for event");
    }
    let teams_at_event = order.len();
    let ranked: Vec<(TeamId, f64)> = order
        .top(limit.unwrap_or(teams_at_event))
        .iter()
        .filter_map(|team| scores.get(team).map(|value| (team.clone(), value)))
        .collect();
    info!(
        event = query.event.as_str(),
        teams = teams_at_event,
        shown = ranked.len(),
        "OPR ranked"
    );

    let rows = ranked
        .iter()
        .enumerate()
        .map(|(idx, (team, value))| OprRow {
            position: idx + 1,
            team: team.clone(),
            value: *value,
        })
        .collect();

    Ok(OprPanel {
        query: query.clone(),
        teams_at_event,
        rows,
        figure: opr_figure(&ranked),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/views/opr.rs"]
mod tests;
