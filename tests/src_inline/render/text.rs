use super::*;
use crate::api::request::{EventCode, OprQuery, Season, Statistic};
use crate::model::ranks::{RankEntry, RankTable};
use crate::model::series::TimeSeries;
use crate::model::team::TeamId;
use crate::render::figure::{epa_figure, opr_figure};
use crate::views::opr::OprRow;
use crate::views::ranks::{build_ranks_report, classify_report, standing};

fn season() -> Season {
    Season::new(2024).unwrap()
}

fn ranks() -> RankTable {
    RankTable::new(
        2024,
        vec![
            (TeamId::new("7236"), RankEntry { rank: 1, score: Some(61.04) }),
            (TeamId::new("11260"), RankEntry { rank: 2, score: None }),
        ],
    )
}

#[test]
fn test_epa_text() {
    let ranks = ranks();
    let panel = EpaPanel {
        season: season(),
        team: TeamId::new("7236"),
        current_epa: 61.04,
        as_of: "2025-01-31T05:00:00Z".to_string(),
        points: 2,
        standing: Some(standing(&ranks, &TeamId::new("7236")).unwrap()),
        figure: epa_figure(&TimeSeries::default()),
        updates: Vec::new(),
    };
    let text = render_epa_text(&panel);
    assert!(text.starts_with("Team 7236 EPA (2024 season)\n"));
    assert!(text.contains("EPA: 61.0\n"));
    assert!(text.contains("World Rank: #1\n"));
    assert!(text.contains("Percentile: 0.500 of 2 teams\n"));
    assert!(text.contains("Bucket: mid (neutral/white)\n"));
}

#[test]
fn test_opr_text_table() {
    let rows = vec![
        OprRow { position: 1, team: TeamId::new("7236"), value: 55.0 },
        OprRow { position: 2, team: TeamId::new("11260"), value: 41.25 },
    ];
    let panel = OprPanel {
        query: OprQuery {
            season: season(),
            event: EventCode::parse("FTCCMP1OCHO").unwrap(),
            statistic: Statistic::parse("totalPoints").unwrap(),
        },
        teams_at_event: 3,
        rows,
        figure: opr_figure(&[]),
    };
    let text = render_opr_text(&panel);
    assert!(text.starts_with("OPR totalPoints at FTCCMP1OCHO (2024 season)\n"));
    assert!(text.contains("Showing 2 of 3 teams\n"));
    assert!(text.contains("1\t7236\t55.000\n"));
    assert!(text.contains("2\t11260\t41.250\n"));
}

#[test]
fn test_ranks_text() {
    let ranks = ranks();
    let team = TeamId::new("11260");
    let report = build_ranks_report(season(), &ranks, Some(&team), 5).unwrap();
    let text = render_ranks_text(&report);
    assert!(text.contains("EPA world ranks (2024 season, 2 teams)\n"));
    assert!(text.contains("Team 11260: World Rank: #2\n"));
    assert!(text.contains("1\t7236\t61.0\n"));
    assert!(text.contains("2\t11260\t-\n"));
}

#[test]
fn test_classify_and_unavailable_text() {
    assert_eq!(
        render_classify_text(&classify_report(0.76)),
        "Percentile 0.760 -> low (red/dark-text)\n"
    );
    assert_eq!(
        render_unavailable_text("epa", "HTTP 500"),
        "epa: data unavailable\nReason: HTTP 500\n"
    );
}
