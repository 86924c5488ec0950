//! Parser for `key1=value1;key2=value2` configuration strings.
//!
//! Used for both the host-supplied connection string and the "select
//! statement" configured on the object type.

/// Default separator between pairs.
pub const PAIR_DELIMITER: &str = ";";

/// Default separator between a key and its value.
pub const KEY_VALUE_DELIMITER: &str = "=";

/// Parses a configuration string using the default delimiters.
///
/// `"a=b;c=d"` yields `[("a", "b"), ("c", "d")]`.
pub fn split_configuration_string(input: &str) -> Vec<(String, String)> {
    split_configuration_string_with(input, PAIR_DELIMITER, KEY_VALUE_DELIMITER)
}

/// Parses a configuration string into ordered key/value pairs.
///
/// - Blank segments are skipped.
/// - A lone token is a flag: `"encrypted"` yields `("encrypted", "")`.
/// - Only the first key/value delimiter splits, so `"x=y=z"` yields `("x", "y=z")`.
///
/// Blank delimiters fall back to the defaults. Keys and values are returned
/// as written apart from the segment being trimmed; callers normalise keys.
pub fn split_configuration_string_with(
    input: &str,
    pair_delimiter: &str,
    key_value_delimiter: &str,
) -> Vec<(String, String)> {
    let pair_delimiter = if pair_delimiter.trim().is_empty() {
        PAIR_DELIMITER
    } else {
        pair_delimiter
    };
    let key_value_delimiter = if key_value_delimiter.trim().is_empty() {
        KEY_VALUE_DELIMITER
    } else {
        key_value_delimiter
    };

    input
        .split(pair_delimiter)
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| match segment.trim().split_once(key_value_delimiter) {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (segment.trim().to_string(), String::new()),
        })
        .collect()
}
