use serde::Serialize;

use crate::render::figure::Figure;

pub const TOOL_NAME: &str = "ftc-statview";

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    tool: &'static str,
    version: &'static str,
    view: &'static str,
    status: &'static str,
    #[serde(flatten)]
    body: &'a T,
}

#[derive(Serialize)]
struct Unavailable<'a> {
    reason: &'a str,
}

/// `{"tool", "version", "view", "status": "ok", ...body}`.
pub fn render_view_json<T: Serialize>(view: &'static str, body: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope {
        tool: TOOL_NAME,
        version: env!("CARGO_PKG_VERSION"),
        view,
        status: "ok",
        body,
    })
}

pub fn render_unavailable_json(view: &'static str, reason: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope {
        tool: TOOL_NAME,
        version: env!("CARGO_PKG_VERSION"),
        view,
        status: "unavailable",
        body: &Unavailable { reason },
    })
}

pub fn render_figure_json(figure: &Figure) -> serde_json::Result<String> {
    serde_json::to_string_pretty(figure)
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/json.rs"]
mod tests;
