use std::sync::Once;

use wordfreq_core::{count_pairs, count_words, format_ranking, tokenize, TOP_LIMIT};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(report_logging::initialize_for_tests);
}

#[test]
fn word_counts_total_the_sequence_length() {
    init_logging();
    let tokens = tokenize("the cat sat on the mat the end");
    let table = count_words(tokens.iter().copied());
    assert_eq!(table.total(), tokens.len() as u64);
}

#[test]
fn ranking_is_descending_with_first_seen_ties() {
    init_logging();
    let tokens = ["b", "a", "b", "c", "a", "d"];
    let ranked = count_words(tokens).ranked(TOP_LIMIT);

    let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
    // b and a both count 2; b was seen first. c and d both count 1; c first.
    assert_eq!(keys, vec!["b", "a", "c", "d"]);
    for pair in ranked.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

#[test]
fn ranking_keeps_at_most_ten_entries() {
    init_logging();
    let tokens: Vec<String> = (0..25).map(|n| format!("w{n}")).collect();
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let ranked = count_words(refs).ranked(TOP_LIMIT);
    assert_eq!(ranked.len(), 10);
}

#[test]
fn ranking_shorter_than_limit_returns_everything() {
    init_logging();
    let ranked = count_words(["x", "y"]).ranked(TOP_LIMIT);
    assert_eq!(ranked.len(), 2);
}

#[test]
fn find_words_formats_counts_with_tilde() {
    init_logging();
    let tokens = tokenize("word1 word1 word2");
    let ranked = count_words(tokens).ranked(TOP_LIMIT);
    assert_eq!(format_ranking(&ranked), "word1~2  word2~1");
}

#[test]
fn repeated_pair_is_counted_twice() {
    init_logging();
    let ranked = count_pairs(&["a", "b", "a", "b"]).ranked(TOP_LIMIT);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].key, "a b");
    assert_eq!(ranked[0].count, 2);
}

#[test]
fn odd_tail_token_becomes_its_own_key() {
    init_logging();
    let ranked = count_pairs(&["a", "b", "c"]).ranked(TOP_LIMIT);
    let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["a b", "c"]);
}

#[test]
fn empty_token_sequence_ranks_to_nothing() {
    init_logging();
    assert!(count_words([]).ranked(TOP_LIMIT).is_empty());
    assert!(count_pairs(&[]).ranked(TOP_LIMIT).is_empty());
    assert_eq!(format_ranking(&[]), "");
}
