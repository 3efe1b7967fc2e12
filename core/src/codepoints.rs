//! Compression of a code-point list into the `glyphs` form field.
//!
//! The server's alphabet gives `-` a meaning only at the very start of the
//! string, so every hyphen-minus in the request is moved to the front. Each
//! occurrence adds its own leading dash; they are not deduplicated.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Code point of `-`, the only value that gets relocated.
pub const HYPHEN_MINUS: u32 = 45;

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Compress `codepoints` into the transport string.
///
/// Values that are not Unicode scalar values become U+FFFD.
pub fn encode_codepoints(codepoints: &[u32]) -> String {
    let mut dashes = 0;
    let mut rest = String::with_capacity(codepoints.len());
    for &cp in codepoints {
        if cp == HYPHEN_MINUS {
            dashes += 1;
        } else {
            rest.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }

    let mut result = "-".repeat(dashes);
    result.push_str(&rest);
    result
}

/// Percent-encode a compressed list for use as a form value.
pub fn percent_encode(compressed: &str) -> String {
    utf8_percent_encode(compressed, URI_COMPONENT).to_string()
}
