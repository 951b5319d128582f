pub mod figure;
pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementUpdate {
    pub element: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl ElementUpdate {
    pub fn text(element: &'static str, text: impl Into<String>) -> Self {
        Self {
            element,
            text: Some(text.into()),
            class: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub summary: String,
    pub figure: Option<String>,
}

pub fn format_epa(v: f64) -> String {
    // Exact .x5 ties (x.25, x.75) round away from zero, as the web labels
    // do; `{:.1}` alone would round them to even.
    if (v * 4.0).fract() == 0.0 && (v * 2.0).fract() != 0.0 {
        return format!("{:.1}", (v * 10.0).round() / 10.0);
    }
    format!("{:.1}", v)
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn summary_file_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "summary.txt",
        OutputFormat::Json => "summary.json",
    }
}

pub fn emit(
    rendered: &Rendered,
    format: OutputFormat,
    out_dir: Option<&Path>,
) -> std::io::Result<Vec<PathBuf>> {
    let Some(dir) = out_dir else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered.summary.trim_end())?;
        return Ok(Vec::new());
    };

    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let summary_path = dir.join(summary_file_name(format));
    write_text(&summary_path, &rendered.summary)?;
    written.push(summary_path);

    let figure_path = dir.join("figure.json");
    match &rendered.figure {
        Some(figure) => {
            write_text(&figure_path, figure)?;
            written.push(figure_path);
        }
        None => remove_stale(&figure_path)?,
    }

    for path in &written {
        info!(path = %path.display(), "wrote output");
    }
    Ok(written)
}

fn remove_stale(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed figure from an earlier run");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/mod.rs"]
mod tests;
