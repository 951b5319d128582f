use thiserror::Error;

use crate::model::team::TeamId;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid API base URL {url}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },
    #[error("malformed JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected response shape from {url}: {reason}")]
    Schema { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("empty input: {what} has no entries")]
pub struct EmptyInputError {
    pub what: &'static str,
}

impl EmptyInputError {
    pub fn new(what: &'static str) -> Self {
        Self { what }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("team {team} is not ranked in season {season}")]
    MissingTeam { team: TeamId, season: u16 },
    #[error("rank table for season {season} is empty")]
    EmptyTable { season: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl RequestError {
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        RequestError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StatViewError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatViewError {
    /// Errors that mean the backend had nothing usable for this view.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            StatViewError::Fetch(_) | StatViewError::EmptyInput(_) | StatViewError::Lookup(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            StatViewError::Request(_) => 2,
            e if e.is_data_unavailable() => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;
