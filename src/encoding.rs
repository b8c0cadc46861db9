use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// The serializer leaves only the RFC 3986 unreserved characters bare.
// Everything else is emitted as uppercase %XX from the UTF-8 bytes.

/// Strict query percent-encode set
/// All bytes except `A-Z a-z 0-9 - . _ ~` are encoded.
/// Note: space encodes as `%20` (never `+`), so serialized output does not
/// depend on how a value was originally decoded.
pub const STRICT_QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Write a percent-encoded component directly to a buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, STRICT_QUERY_SET) {
        buffer.push_str(chunk);
    }
}

/// Decode a form-urlencoded component: `+` becomes a space, `%XX` becomes
/// its byte value, and the resulting bytes are interpreted as UTF-8.
///
/// # Errors
///
/// Returns an error if a `%` is not followed by exactly two hex digits, or
/// if the decoded bytes are not valid UTF-8.
pub fn decode_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.iter().all(|b| b.is_ascii_hexdigit()))
                    .ok_or(ParseError::InvalidPercentEncoding)?;
                out.push((hex_value(hex[0]) << 4) | hex_value(hex[1]));
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| ParseError::InvalidPercentEncoding)
}

/// Numeric value of a validated ASCII hex digit
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
