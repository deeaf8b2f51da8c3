//! Fail-soft resolution of stored integers.
//!
//! Stored values are strings. A value is read as its leading integer
//! (`"12abc"` is 12, `"3.9"` is 3, `"0x1F"` is 31). Anything that yields
//! no integer, or yields zero, resolves to the caller's default.

/// Resolve the raw stored value for `key` to an integer, or `default`.
///
/// An absent value falls back quietly. A present value that does not parse
/// logs a warning before falling back.
pub fn parse_stored_integer(key: &str, raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    match leading_integer(raw) {
        Some(0) => default,
        Some(value) => value,
        None => {
            tracing::warn!(key, raw, default, "unparseable stored value, using default");
            default
        }
    }
}

/// Parse an optionally signed integer at the start of `raw`, after leading
/// whitespace. A `0x`/`0X` prefix switches to hexadecimal. Returns `None`
/// when there are no digits or the number does not fit in an `i64`.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, body) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let digits = body
        .bytes()
        .take_while(|&b| char::from(b).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&body[..digits], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
