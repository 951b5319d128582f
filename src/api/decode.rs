use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;
use crate::model::ordered::OrderedEntries;
use crate::model::ranks::{RankTable, RawRankField};
use crate::model::scores::ScoreMap;
use crate::model::series::TimeSeries;

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| {
        if source.is_data() {
            FetchError::Schema {
                url: url.to_string(),
                reason: source.to_string(),
            }
        } else {
            FetchError::Decode {
                url: url.to_string(),
                source,
            }
        }
    })
}

pub fn decode_epa_history(url: &str, body: &str) -> Result<TimeSeries, FetchError> {
    decode(url, body)
}

/// The `?time=` form answers with a bare number.
pub fn decode_epa_value(url: &str, body: &str) -> Result<f64, FetchError> {
    let value: Value = decode(url, body)?;
    value.as_f64().ok_or_else(|| FetchError::Schema {
        url: url.to_string(),
        reason: format!("expected a number, got {value}"),
    })
}

pub fn decode_epa_ranks(url: &str, body: &str, season: u16) -> Result<RankTable, FetchError> {
    let OrderedEntries(raw) = decode::<OrderedEntries<RawRankField>>(url, body)?;
    RankTable::from_raw(season, raw).map_err(|reason| FetchError::Schema {
        url: url.to_string(),
        reason,
    })
}

pub fn decode_scores(url: &str, body: &str) -> Result<ScoreMap, FetchError> {
    decode(url, body)
}

#[cfg(test)]
#[path = "../../tests/src_inline/api/decode.rs"]
mod tests;
