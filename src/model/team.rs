use std::fmt;

use serde::Serialize;

use crate::error::RequestError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn parse_number(raw: &str) -> Result<Self, RequestError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RequestError::invalid("team", "team number is empty"));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RequestError::invalid(
                "team",
                format!("{trimmed:?} is not numeric"),
            ));
        }
        let number: u32 = trimmed
            .parse()
            .map_err(|_| RequestError::invalid("team", format!("{trimmed} is out of range")))?;
        Ok(Self(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for TeamId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}
