use std::fmt;

use serde::Serialize;

use crate::error::RequestError;

pub const SUPPORTED_SEASONS: &[u16] = &[2024];
pub const DEFAULT_SEASON: u16 = 2024;

// Best-effort: only the score fields the web client and OPR docs name. The
// backend validates against its own list, so anything else is sent with a
// warning rather than rejected.
pub const KNOWN_STATISTICS_2024: &[&str] = &["totalPoints", "autoSampleNet", "teleopPoints"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Season(u16);

impl Season {
    pub fn new(year: u16) -> Result<Self, RequestError> {
        if !SUPPORTED_SEASONS.contains(&year) {
            return Err(RequestError::invalid(
                "season",
                format!("{year} is not supported (supported: {SUPPORTED_SEASONS:?})"),
            ));
        }
        Ok(Self(year))
    }

    pub fn year(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventCode(String);

impl EventCode {
    pub fn parse(raw: &str) -> Result<Self, RequestError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(RequestError::invalid("event code", "event code is empty"));
        }
        if let Some(bad) = code
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(*c, '\'' | '-' | '(' | ')')))
        {
            return Err(RequestError::invalid(
                "event code",
                format!("{code:?} contains {bad:?}"),
            ));
        }
        if !code.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(RequestError::invalid(
                "event code",
                format!("{code:?} has no letters or digits"),
            ));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Statistic(String);

impl Statistic {
    pub fn parse(raw: &str) -> Result<Self, RequestError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(RequestError::invalid("statistic", "statistic is empty"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(RequestError::invalid(
                "statistic",
                format!("{name:?} contains {bad:?}"),
            ));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_STATISTICS_2024.contains(&self.0.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OprQuery {
    pub season: Season,
    pub event: EventCode,
    pub statistic: Statistic,
}

#[cfg(test)]
#[path = "../../tests/src_inline/api/request.rs"]
mod tests;
