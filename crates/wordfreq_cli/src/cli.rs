use clap::Parser;
use log::LevelFilter;

/// Target used when no URL is given, kept from the tool's origins.
pub const DEFAULT_URL: &str = "https://www.314e.com/";

/// Report the most frequent words and word pairs of one web page.
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, about)]
pub struct Cli {
    /// Page to analyze.
    #[arg(default_value = DEFAULT_URL, env = "WORDFREQ_URL")]
    pub url: String,

    /// Abort the request after this many seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Refuse response bodies larger than this many bytes.
    #[arg(long, default_value_t = 5 * 1024 * 1024)]
    pub max_bytes: u64,

    /// Log progress to stderr; repeat for debug detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
