/// Splits a normalized line into word tokens, preserving order.
///
/// Splitting is on the literal space character; case and punctuation
/// are left untouched, so `Word` and `word.` stay distinct tokens.
/// Boundary spaces would otherwise yield empty tokens, which carry no
/// meaning for frequency counting and are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|token| !token.is_empty()).collect()
}
