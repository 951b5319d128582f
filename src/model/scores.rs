use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ordered::OrderedEntries;
use crate::model::team::TeamId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    entries: Vec<(TeamId, f64)>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TeamId, f64)>,
    {
        let mut map = Self::new();
        for (team, score) in entries {
            map.insert(team, score);
        }
        map
    }

    pub fn insert(&mut self, team: TeamId, score: f64) {
        match self.entries.iter_mut().find(|(t, _)| *t == team) {
            Some(slot) => slot.1 = score,
            None => self.entries.push((team, score)),
        }
    }

    pub fn get(&self, team: &TeamId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(t, _)| t == team)
            .map(|(_, score)| *score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(TeamId, f64)> {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for ScoreMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedEntries(entries) = OrderedEntries::<f64>::deserialize(deserializer)?;
        Ok(Self::from_entries(
            entries
                .into_iter()
                .map(|(team, score)| (TeamId::new(team), score)),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedSequence(Vec<TeamId>);

impl RankedSequence {
    pub fn new(teams: Vec<TeamId>) -> Self {
        Self(teams)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamId> {
        self.0.iter()
    }

    pub fn top(&self, n: usize) -> &[TeamId] {
        &self.0[..n.min(self.0.len())]
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
