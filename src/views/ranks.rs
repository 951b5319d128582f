use serde::Serialize;

use crate::api::request::Season;
use crate::error::LookupError;
use crate::model::bucket::{PercentileBucket, StyleDescriptor};
use crate::model::ranks::{RankEntry, RankTable};
use crate::model::team::TeamId;
use crate::stats::classify::{classify, percentile_of, style};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub team: TeamId,
    pub rank: u32,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team: TeamId,
    pub rank: u32,
    pub score: Option<f64>,
    pub ranked_teams: usize,
    pub percentile: f64,
    pub bucket: PercentileBucket,
    pub style: StyleDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RanksReport {
    pub season: Season,
    pub ranked_teams: usize,
    pub leaderboard: Vec<RankRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standing: Option<TeamStanding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifyReport {
    pub percentile: f64,
    pub bucket: PercentileBucket,
    pub style: StyleDescriptor,
}

pub fn standing(ranks: &RankTable, team: &TeamId) -> Result<TeamStanding, LookupError> {
    let RankEntry { rank, score } = *ranks.require(team)?;
    let percentile = percentile_of(rank, ranks.len()).ok_or(LookupError::EmptyTable {
        season: ranks.season(),
    })?;
    let bucket = classify(percentile);
    Ok(TeamStanding {
        team: team.clone(),
        rank,
        score,
        ranked_teams: ranks.len(),
        percentile,
        bucket,
        style: style(bucket),
    })
}

pub fn build_ranks_report(
    season: Season,
    ranks: &RankTable,
    team: Option<&TeamId>,
    top: usize,
) -> Result<RanksReport, LookupError> {
    let standing = team.map(|t| standing(ranks, t)).transpose()?;
    let leaderboard = ranks
        .leaderboard(top)
        .into_iter()
        .map(|(team, entry)| RankRow {
            team: team.clone(),
            rank: entry.rank,
            score: entry.score,
        })
        .collect();
    Ok(RanksReport {
        season,
        ranked_teams: ranks.len(),
        leaderboard,
        standing,
    })
}

pub fn classify_report(percentile: f64) -> ClassifyReport {
    let bucket = classify(percentile);
    ClassifyReport {
        percentile,
        bucket,
        style: style(bucket),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/views/ranks.rs"]
mod tests;
