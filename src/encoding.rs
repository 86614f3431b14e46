//! Percent-encoding of query values.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode, utf8_percent_encode};

/// Bytes escaped in a query value: everything outside the RFC 3986
/// unreserved set (`ALPHA / DIGIT / "-" / "." / "_" / "~"`).
pub const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a query value with uppercase hex escapes.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes. Space becomes
/// `%20`, never `+`.
///
/// # Examples
///
/// ```
/// use request_uri::encode_query_value;
///
/// assert_eq!(encode_query_value("field<>Value1").to_string(), "field%3C%3EValue1");
/// assert_eq!(encode_query_value("a b").to_string(), "a%20b");
/// ```
#[must_use]
pub fn encode_query_value(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET)
}
