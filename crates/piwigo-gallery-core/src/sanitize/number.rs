//! Integer coercion for the `limit` attribute.

/// Keeps only digits and the sign characters `+` and `-`.
pub fn filter_number_int(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect()
}

/// Reads an optional leading sign followed by digits; anything else is `0`.
///
/// Trailing garbage after the digit run is ignored ("12-3" is 12) and
/// out-of-range values saturate at the `i64` bounds.
pub fn coerce_int(filtered: &str) -> i64 {
    let (negative, rest) = match filtered.as_bytes().first() {
        Some(b'-') => (true, &filtered[1..]),
        Some(b'+') => (false, &filtered[1..]),
        _ => (false, filtered),
    };

    let mut value: i64 = 0;
    for b in rest.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Filters then coerces a raw attribute value.
pub fn sanitize_limit(raw: &str) -> i64 {
    coerce_int(&filter_number_int(raw))
}
