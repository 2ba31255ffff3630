//! Wordfreq core: pure text pipeline from raw page text to ranked frequencies.
mod freq;
mod normalize;
mod report;
mod token;

pub use freq::{count_pairs, count_words, FrequencyTable, RankedEntry};
pub use normalize::normalize;
pub use report::{build_report, format_ranking, FrequencyReport, TOP_LIMIT};
pub use token::tokenize;
