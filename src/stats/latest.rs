use crate::error::EmptyInputError;
use crate::model::series::TimeSeries;

/// Value at the greatest timestamp key under string ordering. Keys are
/// compared as text, not numbers; this matches chronological order only
/// while every key has the same width.
pub fn latest(series: &TimeSeries) -> Result<f64, EmptyInputError> {
    latest_point(series).map(|(_, value)| value)
}

pub fn latest_point(series: &TimeSeries) -> Result<(&str, f64), EmptyInputError> {
    series
        .iter()
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(key, value)| (key.as_str(), *value))
        .ok_or(EmptyInputError::new("time series"))
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/latest.rs"]
mod tests;
