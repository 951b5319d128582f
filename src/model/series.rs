use serde::{Deserialize, Deserializer};

use crate::model::ordered::OrderedEntries;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<(String, f64)>,
}

impl TimeSeries {
    pub fn from_points<I, K>(points: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            points: points.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, f64)> {
        self.points.iter()
    }

    pub fn chronological(&self) -> Vec<(&str, f64)> {
        let mut out: Vec<(&str, f64)> = self.points.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        out.sort_by(|a, b| match (epoch_seconds(a.0), epoch_seconds(b.0)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        out
    }
}

pub fn epoch_seconds(key: &str) -> Option<f64> {
    key.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedEntries(points) = OrderedEntries::<f64>::deserialize(deserializer)?;
        Ok(Self { points })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/series.rs"]
mod tests;
