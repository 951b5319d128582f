use super::*;
use crate::api::request::{EventCode, Season, Statistic};
use crate::error::FetchError;
use crate::model::scores::ScoreMap;
use crate::views::fake_api::FakeStatsApi;

fn query(stat: &str) -> OprQuery {
    OprQuery {
        season: Season::new(2024).unwrap(),
        event: EventCode::parse("FTCCMP1OCHO").unwrap(),
        statistic: Statistic::parse(stat).unwrap(),
    }
}

fn api() -> FakeStatsApi {
    let scores: ScoreMap =
        serde_json::from_str(r#"{"16379": 12.5, "11260": 41.2, "7236": 55.0, "5": 41.2}"#).unwrap();
    FakeStatsApi {
        opr: Some(scores),
        ..FakeStatsApi::default()
    }
}

#[test]
fn test_rows_and_chart_follow_rank_order() {
    let api = api();
    let panel = build_opr_panel(&api, &query("totalPoints"), None).unwrap();
    let teams: Vec<&str> = panel.rows.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, vec!["7236", "11260", "5", "16379"]);
    assert_eq!(panel.rows[0].position, 1);
    assert_eq!(panel.teams_at_event, 4);
    assert_eq!(
        panel.figure.data[0].x,
        vec!["team 7236", "team 11260", "team 5", "team 16379"]
    );
    assert_eq!(panel.figure.data[0].y, vec![55.0, 41.2, 41.2, 12.5]);
    assert_eq!(
        api.calls.borrow()[0],
        "/api/stats/opr/2024/FTCCMP1OCHO/totalPoints"
    );
}

#[test]
fn test_limit_trims_rows_and_chart() {
    let panel = build_opr_panel(&api(), &query("autoPoints"), Some(2)).unwrap();
    assert_eq!(panel.rows.len(), 2);
    assert_eq!(panel.figure.data[0].x.len(), 2);
    assert_eq!(panel.teams_at_event, 4);
}

#[test]
fn test_unknown_statistic_is_still_requested() {
    let api = api();
    assert!(build_opr_panel(&api, &query("customMetric"), None).is_ok());
    assert_eq!(api.calls.borrow().len(), 1);
}

#[test]
fn test_empty_event_is_not_an_error() {
    let api = FakeStatsApi {
        opr: Some(ScoreMap::new()),
        ..FakeStatsApi::default()
    };
    let panel = build_opr_panel(&api, &query("totalPoints"), None).unwrap();
    assert!(panel.rows.is_empty());
}

#[test]
fn test_fetch_failure_propagates() {
    let err = build_opr_panel(&FakeStatsApi::default(), &query("totalPoints"), None).unwrap_err();
    assert!(matches!(err, StatViewError::Fetch(FetchError::Status { .. })));
}
