use crate::model::scores::{RankedSequence, ScoreMap};
use crate::model::team::TeamId;

pub fn rank(scores: &ScoreMap) -> RankedSequence {
    RankedSequence::new(ranked_pairs(scores).into_iter().map(|(t, _)| t).collect())
}

fn ranked_pairs(scores: &ScoreMap) -> Vec<(TeamId, f64)> {
    let mut pairs: Vec<(TeamId, f64)> = scores.iter().cloned().collect();
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
    pairs
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/rank.rs"]
mod tests;
