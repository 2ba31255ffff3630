use report_logging::report_info;
use thiserror::Error;

use crate::decode::{decode_page, DecodeError};
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::types::FetchError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Runs the IO half of the pipeline: one awaited fetch, then decode
/// and extract. Returns the raw div text of the page, which may be
/// empty when the page has no div content.
pub async fn fetch_page_text(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    url: &str,
) -> Result<String, PipelineError> {
    let output = fetcher.fetch(url).await?;
    report_info!(
        "fetched {} ({} bytes, {} redirects)",
        output.metadata.final_url,
        output.metadata.byte_len,
        output.metadata.redirect_count
    );

    let page = decode_page(&output.bytes, output.metadata.content_type.as_deref())?;
    report_info!("decoded page as {}", page.encoding_label);

    let text = extractor.extract(&page.html);
    report_info!("extracted {} bytes of div text", text.len());
    Ok(text)
}
