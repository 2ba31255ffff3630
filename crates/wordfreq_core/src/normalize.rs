/// Flattens extracted page text into a single-spaced line.
///
/// Newlines and tabs become spaces, carriage returns are dropped
/// outright, and any run of consecutive spaces collapses to one.
/// A leading or trailing single space is kept; the tokenizer deals
/// with boundaries.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        match c {
            '\r' => {}
            ' ' | '\n' | '\t' => pending_space = true,
            other => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(other);
            }
        }
    }
    if pending_space {
        out.push(' ');
    }
    out
}
