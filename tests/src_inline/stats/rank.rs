use super::*;

fn map(pairs: &[(&str, f64)]) -> ScoreMap {
    ScoreMap::from_entries(pairs.iter().map(|(k, v)| (TeamId::new(*k), *v)))
}

fn keys(seq: &RankedSequence) -> Vec<&str> {
    seq.iter().map(|t| t.as_str()).collect()
}

#[test]
fn test_empty_map_ranks_empty() {
    assert!(rank(&ScoreMap::new()).is_empty());
}

#[test]
fn test_descending_order() {
    let scores = map(&[("a", 10.0), ("b", 30.0), ("c", -5.0), ("d", 20.0)]);
    assert_eq!(keys(&rank(&scores)), vec!["b", "d", "a", "c"]);
}

#[test]
fn test_ties_keep_input_order() {
    let scores = map(&[("x", 1.0), ("y", 2.0), ("z", 1.0), ("w", 2.0)]);
    assert_eq!(keys(&rank(&scores)), vec!["y", "w", "x", "z"]);
}

#[test]
fn test_output_is_permutation_with_non_increasing_scores() {
    let scores = map(&[
        ("11260", 41.2),
        ("7236", 55.0),
        ("16379", 12.75),
        ("5", 55.0),
        ("19", 0.0),
        ("8", -3.5),
    ]);
    let ranked = rank(&scores);
    assert_eq!(ranked.len(), scores.len());

    let mut expected: Vec<&str> = scores.iter().map(|(t, _)| t.as_str()).collect();
    let mut got = keys(&ranked);
    expected.sort();
    got.sort();
    assert_eq!(got, expected);

    let values: Vec<f64> = ranked.iter().map(|t| scores.get(t).unwrap()).collect();
    for pair in values.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn test_rank_is_idempotent() {
    let scores = map(&[("a", 3.0), ("b", 3.0), ("c", 7.0)]);
    assert_eq!(rank(&scores), rank(&scores));
}

#[test]
fn test_nan_scores_sort_deterministically() {
    let scores = map(&[("a", 1.0), ("b", f64::NAN), ("c", 2.0)]);
    assert_eq!(keys(&rank(&scores)), vec!["b", "c", "a"]);
}

#[test]
fn test_ranked_pairs_carry_scores() {
    let scores = map(&[("a", 1.0), ("b", 2.0)]);
    assert_eq!(
        ranked_pairs(&scores),
        vec![(TeamId::new("b"), 2.0), (TeamId::new("a"), 1.0)]
    );
}
