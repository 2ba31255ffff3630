use crate::freq::{count_pairs, count_words, RankedEntry};
use crate::normalize::normalize;
use crate::token::tokenize;

/// How many entries each ranking keeps.
pub const TOP_LIMIT: usize = 10;

/// Ranked word and word-pair frequencies for one page of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    pub words: Vec<RankedEntry>,
    pub pairs: Vec<RankedEntry>,
}

/// Runs the whole text pipeline: normalize, tokenize, count words and
/// pairs, rank each at [`TOP_LIMIT`]. Empty input produces a report
/// with two empty rankings.
pub fn build_report(text: &str) -> FrequencyReport {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    FrequencyReport {
        words: count_words(tokens.iter().copied()).ranked(TOP_LIMIT),
        pairs: count_pairs(&tokens).ranked(TOP_LIMIT),
    }
}

/// Renders ranked entries as `key~count` joined by two spaces.
pub fn format_ranking(entries: &[RankedEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}~{}", entry.key, entry.count))
        .collect::<Vec<_>>()
        .join("  ")
}
