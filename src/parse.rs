// 🔢 Numeric Text Parsing
// Form fields hold free text; these read the leading number out of it the
// way number inputs are read by the forms: whitespace is skipped, the
// longest numeric prefix wins, trailing garbage is ignored.

/// Read a decimal number from the start of `text`.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or the literal `Infinity`. Returns `None` when no digits lead
/// the text.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // "5." is still 5
        end += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Read an integer from the start of `text`, stopping at the first
/// non-digit so `"12.9"` reads as 12.
///
/// Magnitudes beyond `i64` saturate rather than fail.
pub fn parse_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = count_digits(&bytes[start..]);
    if digits == 0 {
        return None;
    }

    let value = s[start..start + digits]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as i64));

    Some(if negative { -value } else { value })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_plain() {
        assert_eq!(parse_decimal("85"), Some(85.0));
        assert_eq!(parse_decimal("89.9"), Some(89.9));
        assert_eq!(parse_decimal("-1"), Some(-1.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
    }

    #[test]
    fn test_decimal_prefix_and_whitespace() {
        assert_eq!(parse_decimal("  72 points"), Some(72.0));
        assert_eq!(parse_decimal("85abc"), Some(85.0));
        assert_eq!(parse_decimal("1e2"), Some(100.0));
        assert_eq!(parse_decimal("1e"), Some(1.0));
        assert_eq!(parse_decimal("2.5e-1x"), Some(0.25));
    }

    #[test]
    fn test_decimal_rejects() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn test_decimal_infinity() {
        assert_eq!(parse_decimal("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_decimal("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_integer_truncates() {
        assert_eq!(parse_integer("12"), Some(12));
        assert_eq!(parse_integer("12.9"), Some(12));
        assert_eq!(parse_integer(" -3"), Some(-3));
        assert_eq!(parse_integer("-0"), Some(0));
        assert_eq!(parse_integer("65 years"), Some(65));
    }

    #[test]
    fn test_integer_rejects() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(".5"), None);
        assert_eq!(parse_integer("-"), None);
    }

    #[test]
    fn test_integer_saturates() {
        assert_eq!(parse_integer("99999999999999999999999"), Some(i64::MAX));
    }
}
