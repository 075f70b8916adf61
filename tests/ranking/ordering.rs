//! Sort order, rank indexes, and truncation.

use super::common::{make_ascending_scored, make_candidates, ranks, values};
use mailsuggest::{rank_suggestions, rank_suggestions_default, Candidate, DEFAULT_MAX_SUGGESTIONS};

#[test]
fn test_truncates_fifteen_to_ten() {
    let ranked = rank_suggestions(make_ascending_scored(15), "", 10);
    assert_eq!(ranked.len(), 10);
    assert!(ranked.windows(2).all(|w| w[0].score > w[1].score));
    assert_eq!(ranked[0].value, "user014@example.com");
    assert_eq!(ranked[9].value, "user005@example.com");
}

#[test]
fn test_truncates_shuffled_scores_after_sorting() {
    // 7 is coprime with 15, so (7 * i) % 15 + 1 visits every score 1..=15 once
    let candidates: Vec<Candidate> = (0..15)
        .map(|i| Candidate::scored(format!("c{:02}", i), ((7 * i) % 15 + 1) as f64))
        .collect();
    let expected: Vec<String> = {
        let mut by_score = candidates.clone();
        by_score.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        by_score.iter().take(10).map(|c| c.value.clone()).collect()
    };

    let ranked = rank_suggestions(candidates, "", 10);

    let scores: Vec<f64> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, (6..=15).rev().map(f64::from).collect::<Vec<_>>());
    assert_eq!(values(&ranked), expected);
    assert_eq!(ranks(&ranked), (0..10).collect::<Vec<_>>());
    // lowest scores sit early in the input but must not survive the cut
    assert!(!values(&ranked).contains(&"c00"));
}

#[test]
fn test_empty_input_returns_empty_for_any_max() {
    for max in [0, 1, 10, 1000] {
        assert!(rank_suggestions(Vec::<Candidate>::new(), "q", max).is_empty());
    }
}

#[test]
fn test_rank_indexes_start_at_zero() {
    let ranked = rank_suggestions(make_candidates(&["bob", "bobby", "rob"]), "bob", 10);
    assert_eq!(ranks(&ranked), vec![0, 1, 2]);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let ranked = rank_suggestions(
        make_candidates(&["zed@x.io", "amy@x.io", "kim@x.io"]),
        "@x.io",
        10,
    );
    // all score (8 - 3) / 8
    assert_eq!(values(&ranked), vec!["zed@x.io", "amy@x.io", "kim@x.io"]);
}

#[test]
fn test_stable_ties_among_mixed_scores() {
    let ranked = rank_suggestions(
        vec![
            Candidate::scored("c", 0.5),
            Candidate::scored("a", 0.9),
            Candidate::scored("d", 0.5),
            Candidate::scored("b", 0.9),
        ],
        "",
        10,
    );
    assert_eq!(values(&ranked), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_limit_larger_than_input() {
    let ranked = rank_suggestions(make_candidates(&["a", "b"]), "a", 100);
    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_default_limit_is_ten() {
    assert_eq!(DEFAULT_MAX_SUGGESTIONS, 10);
    assert_eq!(rank_suggestions_default(make_ascending_scored(30), "").len(), 10);
}

#[test]
fn test_wire_shape_is_value_and_rank() {
    let ranked = rank_suggestions(make_candidates(&["ann@example.com"]), "ann", 10);
    let json = serde_json::to_value(&ranked).unwrap();
    assert_eq!(json, serde_json::json!([{"value": "ann@example.com", "data": 0}]));
}
