//! Percent-decoding and query component normalization.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

use crate::errors::ParseError;

/// Find the first `%` not followed by two hex digits.
fn find_bad_escape(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                // Escape may straddle a multi-byte char; fall back to the lone '%'.
                return Some(text.get(i..end).unwrap_or("%"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    None
}

/// Decode a query component: `+` becomes a space, `%XX` the byte it names.
///
/// Invalid escapes and non UTF-8 results are rejected rather than replaced.
pub fn unescape(query: &str) -> Result<Cow<'_, str>, ParseError> {
    if let Some(escape) = find_bad_escape(query) {
        return Err(ParseError::decode(format!("invalid URL escape \"{escape}\"")));
    }

    if query.contains('+') {
        // Split before decoding so an escaped `%2B` stays a literal plus.
        let mut bytes = Vec::with_capacity(query.len());
        for (i, segment) in query.split('+').enumerate() {
            if i > 0 {
                bytes.push(b' ');
            }
            bytes.extend(percent_decode_str(segment));
        }
        let decoded =
            String::from_utf8(bytes).map_err(|e| ParseError::decode(e.utf8_error().to_string()))?;
        return Ok(Cow::Owned(decoded));
    }

    percent_decode_str(query)
        .decode_utf8()
        .map_err(|e| ParseError::decode(e.to_string()))
}

/// Reduce decoded text to the query part of `?<text>`.
///
/// Control characters make the text unparseable as a URL, and everything from
/// the first `#` is a fragment. The remaining query must not be empty.
pub fn query_component(decoded: &str) -> Result<&str, ParseError> {
    if let Some(c) = decoded.chars().find(char::is_ascii_control) {
        return Err(ParseError::malformed(format!(
            "invalid control character {:#04x} in query",
            u32::from(c)
        )));
    }

    let (query, fragment) = match decoded.split_once('#') {
        Some((query, fragment)) => (query, Some(fragment)),
        None => (decoded, None),
    };

    if let Some(escape) = fragment.and_then(find_bad_escape) {
        return Err(ParseError::malformed(format!(
            "invalid URL escape \"{escape}\" in fragment"
        )));
    }

    if query.is_empty() {
        return Err(ParseError::malformed("no query component"));
    }
    Ok(query)
}
