//! URL character filtering.

/// Punctuation allowed in a URL besides ASCII letters and digits.
const URL_PUNCTUATION: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

/// Removes every character that may not appear in a URL.
///
/// Keeps ASCII letters, digits and [`URL_PUNCTUATION`]; whitespace, control
/// characters and anything non-ASCII are dropped. The result is not checked
/// for well-formedness (see [`super::is_valid_url`]).
pub fn filter_url(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || URL_PUNCTUATION.contains(*c))
        .collect()
}
