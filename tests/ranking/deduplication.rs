//! First-occurrence-wins deduplication by value.

use super::common::values;
use mailsuggest::{rank_suggestions, Candidate, ScoreMap};

#[test]
fn test_first_supplied_score_wins() {
    let ranked = rank_suggestions(
        vec![
            Candidate::scored("ann@example.com", 0.2),
            Candidate::scored("ann@example.com", 0.9),
        ],
        "ann",
        10,
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 0.2);
}

#[test]
fn test_first_computed_score_wins_over_later_supplied() {
    let ranked = rank_suggestions(
        vec![
            Candidate::new("ann@example.com"),
            Candidate::scored("ann@example.com", 50.0),
        ],
        "ann",
        10,
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 1.0);
}

#[test]
fn test_dedup_is_case_sensitive_on_value() {
    // values are keys as given; only scoring folds case
    let ranked = rank_suggestions(vec!["Ann@example.com", "ann@example.com"], "ann", 10);
    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_duplicates_do_not_consume_limit() {
    let ranked = rank_suggestions(vec!["a1", "a1", "a1", "a2", "a3"], "a", 3);
    assert_eq!(values(&ranked), vec!["a1", "a2", "a3"]);
}

#[test]
fn test_score_map_reports_retained_score() {
    let mut map = ScoreMap::new();
    map.extend([("x", 0.3), ("y", 0.6), ("x", 0.9)]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.score_of("x"), Some(0.3));
    assert_eq!(map.score_of("missing"), None);
}
