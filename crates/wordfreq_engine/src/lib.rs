//! Wordfreq engine: the IO side of the pipeline — fetch, decode, extract.
mod decode;
mod extract;
mod fetch;
mod pipeline;
mod types;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::{DivTextExtractor, Extractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use pipeline::{fetch_page_text, PipelineError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
