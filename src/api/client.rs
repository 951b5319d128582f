use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::api::StatsApi;
use crate::api::decode::{decode_epa_history, decode_epa_ranks, decode_epa_value, decode_scores};
use crate::api::endpoints::{Endpoint, parse_base_url};
use crate::api::request::{OprQuery, Season};
use crate::error::FetchError;
use crate::model::ranks::RankTable;
use crate::model::scores::ScoreMap;
use crate::model::series::TimeSeries;
use crate::model::team::TeamId;

const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpStatsApi {
    base: Url,
    client: Client,
}

impl HttpStatsApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ftc-statview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn get_text(&self, endpoint: &Endpoint<'_>) -> Result<(String, String), FetchError> {
        let url = endpoint.url(&self.base)?;
        let url_str = url.to_string();
        debug!(url = %url_str, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url_str.clone(),
                source,
            })?;
        let status = response.status();
        let body = response.text().map_err(|source| FetchError::Transport {
            url: url_str.clone(),
            source,
        })?;

        if !status.is_success() {
            warn!(url = %url_str, status = status.as_u16(), "stats API request failed");
            return Err(FetchError::Status {
                url: url_str,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        info!(url = %url_str, bytes = body.len(), "stats API response");
        Ok((url_str, body))
    }
}

impl StatsApi for HttpStatsApi {
    fn epa_history(&self, season: Season, team: &TeamId) -> Result<TimeSeries, FetchError> {
        let (url, body) = self.get_text(&Endpoint::EpaHistory { season, team })?;
        decode_epa_history(&url, &body)
    }

    fn epa_at(&self, season: Season, team: &TeamId, time: f64) -> Result<f64, FetchError> {
        let (url, body) = self.get_text(&Endpoint::EpaAt { season, team, time })?;
        decode_epa_value(&url, &body)
    }

    fn epa_ranks(&self, season: Season) -> Result<RankTable, FetchError> {
        let (url, body) = self.get_text(&Endpoint::EpaRanks { season })?;
        decode_epa_ranks(&url, &body, season.year())
    }

    fn opr(&self, query: &OprQuery) -> Result<ScoreMap, FetchError> {
        let (url, body) = self.get_text(&Endpoint::Opr { query })?;
        decode_scores(&url, &body)
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/api/client.rs"]
mod tests;
