use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LookupError;
use crate::model::team::TeamId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankEntry {
    pub rank: u32,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRankField {
    Rank(u64),
    Tuple(Vec<Value>),
    Other(Value),
}

impl RawRankField {
    pub fn validate(self) -> Result<RankEntry, String> {
        match self {
            RawRankField::Rank(rank) => Ok(RankEntry {
                rank: rank_from_u64(rank)?,
                score: None,
            }),
            RawRankField::Tuple(items) => {
                let first = items
                    .first()
                    .ok_or_else(|| "rank array is empty".to_string())?;
                let rank = first
                    .as_u64()
                    .ok_or_else(|| format!("rank {first} is not a non-negative integer"))?;
                let score = match items.get(1) {
                    None | Some(Value::Null) => None,
                    Some(v) => Some(
                        v.as_f64()
                            .ok_or_else(|| format!("score {v} is not a number"))?,
                    ),
                };
                Ok(RankEntry {
                    rank: rank_from_u64(rank)?,
                    score,
                })
            }
            RawRankField::Other(v) => Err(format!("expected a rank or [rank, ...], got {v}")),
        }
    }
}

fn rank_from_u64(rank: u64) -> Result<u32, String> {
    if rank == 0 {
        return Err("rank must start at 1".to_string());
    }
    u32::try_from(rank).map_err(|_| format!("rank {rank} is out of range"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    season: u16,
    entries: Vec<(TeamId, RankEntry)>,
}

impl RankTable {
    pub fn new(season: u16, entries: Vec<(TeamId, RankEntry)>) -> Self {
        Self { season, entries }
    }

    pub fn from_raw(season: u16, raw: Vec<(String, RawRankField)>) -> Result<Self, String> {
        let mut entries = Vec::with_capacity(raw.len());
        for (team, field) in raw {
            let entry = field
                .validate()
                .map_err(|reason| format!("team {team}: {reason}"))?;
            let team = TeamId::new(team);
            match entries.iter_mut().find(|(t, _)| *t == team) {
                Some((_, existing)) => *existing = entry,
                None => entries.push((team, entry)),
            }
        }
        Ok(Self::new(season, entries))
    }

    pub fn season(&self) -> u16 {
        self.season
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, team: &TeamId) -> Option<&RankEntry> {
        self.entries
            .iter()
            .find(|(t, _)| t == team)
            .map(|(_, entry)| entry)
    }

    pub fn require(&self, team: &TeamId) -> Result<&RankEntry, LookupError> {
        if self.is_empty() {
            return Err(LookupError::EmptyTable {
                season: self.season,
            });
        }
        self.get(team).ok_or_else(|| LookupError::MissingTeam {
            team: team.clone(),
            season: self.season,
        })
    }

    pub fn leaderboard(&self, n: usize) -> Vec<(&TeamId, &RankEntry)> {
        let mut rows: Vec<(&TeamId, &RankEntry)> =
            self.entries.iter().map(|(t, e)| (t, e)).collect();
        rows.sort_by_key(|(_, e)| e.rank);
        rows.truncate(n);
        rows
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ranks.rs"]
mod tests;
