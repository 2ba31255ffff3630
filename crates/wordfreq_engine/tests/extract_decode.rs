use pretty_assertions::assert_eq;
use wordfreq_engine::{decode_page, DivTextExtractor, Extractor};

#[test]
fn decode_respects_charset_header() {
    let bytes = b"caf\xe9"; // iso-8859-1
    let decoded = decode_page(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.html, "café");
    assert!(
        decoded.encoding_label.eq_ignore_ascii_case("ISO-8859-1")
            || decoded.encoding_label.eq_ignore_ascii_case("windows-1252")
    );
}

#[test]
fn decode_prefers_bom_over_header() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_page(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.html, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_sniffs_when_header_is_silent() {
    let decoded = decode_page("détente".as_bytes(), Some("text/html")).unwrap();
    assert_eq!(decoded.html, "détente");
}

#[test]
fn extractor_walks_divs_in_document_order() {
    let html = r#"
    <html><body>
        <div>first</div>
        <p>ignored paragraph</p>
        <div>second</div>
    </body></html>
    "#;
    let text = DivTextExtractor.extract(html);
    let first = text.find("first").expect("first div text present");
    let second = text.find("second").expect("second div text present");
    assert!(first < second);
}

#[test]
fn adjacent_div_words_do_not_run_together() {
    let html = "<div>alpha</div><div>beta</div>";
    let text = DivTextExtractor.extract(html);
    assert!(!text.contains("alphabeta"));
    assert!(text.contains("alpha"));
    assert!(text.contains("beta"));
}

#[test]
fn nested_divs_contribute_once_per_matching_ancestor() {
    let html = "<div><div>inner</div></div>";
    let text = DivTextExtractor.extract(html);
    assert_eq!(text.matches("inner").count(), 2);
}

#[test]
fn text_outside_divs_is_ignored() {
    let html = "<html><body><h1>title</h1><div>kept</div><span>lost</span></body></html>";
    let text = DivTextExtractor.extract(html);
    assert!(text.contains("kept"));
    assert!(!text.contains("title"));
    assert!(!text.contains("lost"));
}

#[test]
fn divless_document_yields_empty_not_error() {
    assert_eq!(DivTextExtractor.extract("<html><body></body></html>"), "");
    assert_eq!(DivTextExtractor.extract(""), "");
}
