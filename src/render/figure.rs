//! Chart descriptors in the shape the Plotly `newPlot(target, data, layout,
//! config)` call takes.

use chrono::{DateTime, SecondsFormat};
use serde::Serialize;

use crate::model::series::{TimeSeries, epoch_seconds};
use crate::model::team::TeamId;

pub const EPA_TARGET: &str = "epaChart";
pub const OPR_TARGET: &str = "oprChart";

pub const BAR_COLOR: &str = "#F3F4F6";
pub const CHART_BACKGROUND: &str = "#1E2939";
pub const FONT_COLOR: &str = "#ffffff";
pub const BAR_CORNER_RADIUS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub target: &'static str,
    pub data: Vec<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PlotConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcornerradius: Option<u32>,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotConfig {
    pub responsive: bool,
}

pub fn epa_figure(series: &TimeSeries) -> Figure {
    let points = series.chronological();
    let x = points.iter().map(|(key, _)| timestamp_label(key)).collect();
    let y = points.iter().map(|(_, value)| *value).collect();
    Figure {
        target: EPA_TARGET,
        data: vec![Trace {
            x,
            y,
            kind: TraceKind::Scatter,
            mode: Some("lines"),
            marker: None,
        }],
        layout: None,
        config: None,
    }
}

pub fn opr_figure(ranked: &[(TeamId, f64)]) -> Figure {
    Figure {
        target: OPR_TARGET,
        data: vec![Trace {
            x: ranked.iter().map(|(team, _)| format!("team {team}")).collect(),
            y: ranked.iter().map(|(_, value)| *value).collect(),
            kind: TraceKind::Bar,
            mode: None,
            marker: Some(Marker {
                color: vec![BAR_COLOR.to_string(); ranked.len()],
            }),
        }],
        layout: Some(Layout {
            plot_bgcolor: CHART_BACKGROUND.to_string(),
            paper_bgcolor: CHART_BACKGROUND.to_string(),
            barcornerradius: Some(BAR_CORNER_RADIUS),
            font: Font {
                color: FONT_COLOR.to_string(),
            },
        }),
        config: Some(PlotConfig { responsive: true }),
    }
}

/// RFC 3339 (UTC) for epoch-second keys; anything else is passed through.
pub fn timestamp_label(key: &str) -> String {
    epoch_seconds(key)
        .and_then(|secs| {
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
            DateTime::from_timestamp(whole as i64, nanos)
        })
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/figure.rs"]
mod tests;
