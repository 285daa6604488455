use crate::utils::error::{DrillError, Result};

/// Parses one operator line as a signed 32-bit integer.
///
/// Surrounding whitespace is ignored and a single leading `+` or `-` is
/// accepted. `position` is 1-based and only used for error reporting.
pub fn parse_integer(position: usize, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|source| DrillError::ParseError {
            position,
            input: raw.to_string(),
            source,
        })
}
