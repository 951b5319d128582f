use super::*;

fn table(n: u32) -> RankTable {
    let entries = (1..=n)
        .map(|rank| {
            (
                TeamId::from(10_000 + rank),
                RankEntry {
                    rank,
                    score: Some(100.0 - f64::from(rank)),
                },
            )
        })
        .collect();
    RankTable::new(2024, entries)
}

#[test]
fn test_standing_buckets_by_fraction() {
    let ranks = table(200);
    let top = standing(&ranks, &TeamId::from(10_001)).unwrap();
    assert_eq!(top.rank, 1);
    assert_eq!(top.percentile, 0.005);
    assert_eq!(top.bucket, PercentileBucket::Elite);
    assert_eq!(top.style.label(), "blue/white");

    let mid = standing(&ranks, &TeamId::from(10_100)).unwrap();
    assert_eq!(mid.percentile, 0.5);
    assert_eq!(mid.bucket, PercentileBucket::Mid);

    let last = standing(&ranks, &TeamId::from(10_200)).unwrap();
    assert_eq!(last.bucket, PercentileBucket::Low);
}

#[test]
fn test_standing_requires_team() {
    let ranks = table(5);
    let err = standing(&ranks, &TeamId::new("42")).unwrap_err();
    assert!(matches!(err, LookupError::MissingTeam { .. }));
}

#[test]
fn test_report_with_and_without_team() {
    let season = Season::new(2024).unwrap();
    let ranks = table(30);
    let report = build_ranks_report(season, &ranks, None, 10).unwrap();
    assert_eq!(report.ranked_teams, 30);
    assert_eq!(report.leaderboard.len(), 10);
    assert_eq!(report.leaderboard[0].rank, 1);
    assert!(report.standing.is_none());

    let team = TeamId::from(10_003);
    let report = build_ranks_report(season, &ranks, Some(&team), 3).unwrap();
    assert_eq!(report.standing.unwrap().rank, 3);

    let missing = TeamId::new("1");
    assert!(build_ranks_report(season, &ranks, Some(&missing), 3).is_err());
}

#[test]
fn test_classify_report() {
    let report = classify_report(0.2);
    assert_eq!(report.bucket, PercentileBucket::High);
    assert_eq!(report.style.label(), "light-green/dark-text");
}
