use reqwest::Url;

use crate::api::request::{OprQuery, Season};
use crate::error::FetchError;
use crate::model::team::TeamId;

const STATS_PREFIX: [&str; 2] = ["api", "stats"];

#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    EpaHistory { season: Season, team: &'a TeamId },
    EpaAt { season: Season, team: &'a TeamId, time: f64 },
    EpaRanks { season: Season },
    Opr { query: &'a OprQuery },
}

impl Endpoint<'_> {
    pub fn segments(&self) -> Vec<String> {
        let mut out: Vec<String> = STATS_PREFIX.iter().map(|s| s.to_string()).collect();
        match self {
            Endpoint::EpaHistory { season, team } | Endpoint::EpaAt { season, team, .. } => {
                out.extend(["epa".to_string(), season.to_string(), team.to_string()]);
            }
            Endpoint::EpaRanks { season } => {
                out.extend(["epa".to_string(), season.to_string(), "ranks".to_string()]);
            }
            Endpoint::Opr { query } => {
                out.extend([
                    "opr".to_string(),
                    query.season.to_string(),
                    query.event.as_str().to_string(),
                    query.statistic.as_str().to_string(),
                ]);
            }
        }
        out
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::EpaAt { time, .. } => vec![("time", time.to_string())],
            _ => Vec::new(),
        }
    }

    pub fn url(&self, base: &Url) -> Result<Url, FetchError> {
        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| FetchError::BaseUrl {
                url: base.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?;
            path.pop_if_empty();
            path.extend(self.segments());
        }
        let query = self.query();
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::BaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/api/endpoints.rs"]
mod tests;
