//! Observability trait for inspecting component state.
//!
//! A screen can be asked for a named property at any time.
//! Queries are read-only: they never touch the frame counter or the buffer.

use std::fmt;

/// A dynamically-typed value returned by a state query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Unsigned byte (memory contents, colour indices).
    U8(u8),
    /// 16-bit unsigned integer (offsets into screen memory).
    U16(u16),
    /// 32-bit unsigned integer (counters).
    U32(u32),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v:#04X}"),
            Value::U16(v) => write!(f, "{v:#06X}"),
            Value::U32(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

/// A component whose state can be inspected by path.
pub trait Observable {
    /// Query a property by dotted path, e.g. `frame_count`,
    /// `attr.3.10.ink` or `memory.0x1800`.
    ///
    /// Returns `None` if the path is not recognised or is out of range.
    fn query(&self, path: &str) -> Option<Value>;

    /// Paths accepted by [`Observable::query`]; placeholders in angle
    /// brackets stand for numeric arguments.
    fn query_paths(&self) -> &'static [&'static str];
}

/// Parse a numeric path segment: decimal, `0x`-prefixed hex or `$`-prefixed hex.
#[must_use]
pub fn parse_number(segment: &str) -> Option<u32> {
    if let Some(hex) = segment
        .strip_prefix("0x")
        .or_else(|| segment.strip_prefix("0X"))
        .or_else(|| segment.strip_prefix('$'))
    {
        u32::from_str_radix(hex, 16).ok()
    } else {
        segment.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_bytes_as_hex() {
        assert_eq!(Value::U8(0x39).to_string(), "0x39");
        assert_eq!(Value::U16(0x1800).to_string(), "0x1800");
        assert_eq!(Value::U32(6144).to_string(), "6144");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn conversions_pick_the_narrowest_variant() {
        assert_eq!(Value::from(7u8), Value::U8(7));
        assert_eq!(Value::from(0x4000u16), Value::U16(0x4000));
        assert_eq!(Value::from(50u32), Value::U32(50));
        assert_eq!(Value::from(false), Value::Bool(false));
    }

    #[test]
    fn parse_number_accepts_all_prefixes() {
        assert_eq!(parse_number("6144"), Some(6144));
        assert_eq!(parse_number("0x1800"), Some(0x1800));
        assert_eq!(parse_number("$1800"), Some(0x1800));
        assert_eq!(parse_number("zz"), None);
    }
}
