use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("statview_render_test_{}_{}", std::process::id(), id));
    dir
}

#[test]
fn test_emit_writes_summary_and_figure() {
    let dir = make_temp_dir();
    let rendered = Rendered {
        summary: "EPA: 36.5".to_string(),
        figure: Some("{\"target\":\"epaChart\"}".to_string()),
    };
    let written = emit(&rendered, OutputFormat::Text, Some(&dir)).unwrap();
    assert_eq!(written, vec![dir.join("summary.txt"), dir.join("figure.json")]);

    let summary = std::fs::read_to_string(dir.join("summary.txt")).unwrap();
    assert_eq!(summary, "EPA: 36.5\n");
    let figure = std::fs::read_to_string(dir.join("figure.json")).unwrap();
    assert!(figure.starts_with("{\"target\""));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_emit_json_without_figure() {
    let dir = make_temp_dir();
    let rendered = Rendered {
        summary: "{}\n".to_string(),
        figure: None,
    };
    let written = emit(&rendered, OutputFormat::Json, Some(&dir)).unwrap();
    assert_eq!(written, vec![dir.join("summary.json")]);
    assert!(!dir.join("figure.json").exists());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_formatting() {
    assert_eq!(format_epa(41.26), "41.3");
    assert_eq!(format_f64_3(0.0404), "0.040");
    let update = ElementUpdate::text("epa", "EPA: 1.0");
    let json = serde_json::to_string(&update).unwrap();
    assert_eq!(json, r#"{"element":"epa","text":"EPA: 1.0"}"#);
}

#[test]
fn test_emit_without_figure_removes_earlier_figure() {
    let dir = make_temp_dir();
    let chart = Rendered {
        summary: "EPA: 36.5".to_string(),
        figure: Some("{\"target\":\"epaChart\"}".to_string()),
    };
    emit(&chart, OutputFormat::Text, Some(&dir)).unwrap();
    assert!(dir.join("figure.json").exists());

    let unavailable = Rendered {
        summary: "epa: data unavailable\n".to_string(),
        figure: None,
    };
    let written = emit(&unavailable, OutputFormat::Text, Some(&dir)).unwrap();
    assert_eq!(written, vec![dir.join("summary.txt")]);
    assert!(!dir.join("figure.json").exists());
    let summary = std::fs::read_to_string(dir.join("summary.txt")).unwrap();
    assert_eq!(summary, "epa: data unavailable\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_format_epa_rounds_ties_away_from_zero() {
    assert_eq!(format_epa(0.25), "0.3");
    assert_eq!(format_epa(12.25), "12.3");
    assert_eq!(format_epa(1.75), "1.8");
    assert_eq!(format_epa(-1.25), "-1.3");
    assert_eq!(format_epa(-0.75), "-0.8");
    assert_eq!(format_epa(30.0), "30.0");
    assert_eq!(format_epa(29.96), "30.0");
    assert_eq!(format_epa(33.26), "33.3");
}
