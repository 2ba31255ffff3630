use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode page as {encoding}")]
    Malformed { encoding: String },
}

/// Decodes a fetched body into UTF-8 text.
///
/// Encoding precedence: byte-order mark, then the `charset` parameter
/// of the Content-Type header, then chardetng detection over the body.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedPage, DecodeError> {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| header_encoding(content_type))
        .unwrap_or_else(|| sniff_encoding(bytes));

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedPage {
        html: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}

fn header_encoding(content_type: Option<&str>) -> Option<&'static Encoding> {
    let label = content_type?.split(';').find_map(|part| {
        let part = part.trim();
        match part.get(..8) {
            Some(prefix) if prefix.eq_ignore_ascii_case("charset=") => {
                Some(part[8..].trim_matches([' ', '"', '\''].as_ref()))
            }
            _ => None,
        }
    })?;
    Encoding::for_label(label.as_bytes())
}

fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
