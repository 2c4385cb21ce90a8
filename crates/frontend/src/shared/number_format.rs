//! Locale-aware number formatting.
//!
//! Two conventions are supported, chosen by the locale tag prefix:
//! `es*` uses `.` for thousands (only from five integer digits on), `,` for
//! decimals and a trailing Euro sign; everything else follows `en-US`.

const NBSP: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Separators {
    group: char,
    decimal: char,
    /// Integer digits required before grouping kicks in.
    min_grouping_digits: usize,
}

impl Separators {
    fn for_locale(locale: &str) -> Self {
        if locale.starts_with("es") {
            Separators {
                group: '.',
                decimal: ',',
                min_grouping_digits: 5,
            }
        } else {
            Separators {
                group: ',',
                decimal: '.',
                min_grouping_digits: 4,
            }
        }
    }
}

/// Insert `sep` every three digits from the right.
fn group_digits(digits: &str, sep: char, min_grouping_digits: usize) -> String {
    if digits.len() < min_grouping_digits {
        return digits.to_string();
    }

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" }.to_string())
    } else {
        None
    }
}

/// Absolute value rendered with `decimals` fraction digits, split into
/// grouped integer part and fraction part. The flag tells whether a minus
/// sign is needed.
fn split_fixed(value: f64, decimals: usize, seps: Separators) -> (bool, String, String) {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (fixed, String::new()),
    };
    let is_zero = int_part.chars().chain(frac_part.chars()).all(|c| c == '0');
    let negative = value.is_sign_negative() && !is_zero;
    (
        negative,
        group_digits(&int_part, seps.group, seps.min_grouping_digits),
        frac_part,
    )
}

/// Plain number with up to three fraction digits, trailing zeros dropped.
///
/// ```text
/// format_number(1234.5678, "en-US") == "1,234.568"
/// format_number(1234.5678, "es-ES") == "1234,568"
/// ```
pub fn format_number(num: f64, locale: &str) -> String {
    if let Some(s) = non_finite(num) {
        return s;
    }

    let seps = Separators::for_locale(locale);
    let (negative, int_part, frac_part) = split_fixed(num, 3, seps);
    let frac_part = frac_part.trim_end_matches('0');

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&int_part);
    if !frac_part.is_empty() {
        result.push(seps.decimal);
        result.push_str(frac_part);
    }
    result
}

/// Currency amount with two fraction digits: Euro for `es*`, Dollar otherwise.
pub fn format_currency(amount: f64, locale: &str) -> String {
    if let Some(s) = non_finite(amount) {
        return s;
    }

    let seps = Separators::for_locale(locale);
    let (negative, int_part, frac_part) = split_fixed(amount, 2, seps);
    let sign = if negative { "-" } else { "" };

    if locale.starts_with("es") {
        format!("{sign}{int_part}{}{frac_part}{NBSP}€", seps.decimal)
    } else {
        format!("{sign}${int_part}{}{frac_part}", seps.decimal)
    }
}

/// Cut `text` to `max_chars` characters and append "..." when it is longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

const BYTE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable byte size in base 1024, rounded to two decimals.
///
/// ```text
/// format_bytes(0)    == "0 Bytes"
/// format_bytes(1536) == "1.5 KB"
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    let mut threshold = 1024u64;
    while exponent < BYTE_UNITS.len() - 1 && bytes >= threshold {
        exponent += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, BYTE_UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_per_locale() {
        assert_eq!(format_currency(1234.5, "en-US"), "$1,234.50");
        assert_eq!(format_currency(1234.5, "es-ES"), "1234,50\u{a0}€");
        assert_eq!(format_currency(45231.89, "es-ES"), "45.231,89\u{a0}€");
        assert_eq!(format_currency(1299.99, "en"), "$1,299.99");
        assert_eq!(format_currency(0.0, "en-US"), "$0.00");
        assert_eq!(format_currency(-12.5, "en-US"), "-$12.50");
        assert_eq!(format_currency(-12.5, "es"), "-12,50\u{a0}€");
    }

    #[test]
    fn test_number_grouping() {
        assert_eq!(format_number(1234567.891, "en-US"), "1,234,567.891");
        assert_eq!(format_number(1234567.891, "es-ES"), "1.234.567,891");
        assert_eq!(format_number(1234.0, "en-US"), "1,234");
        assert_eq!(format_number(1234.0, "es-ES"), "1234");
        assert_eq!(format_number(12345.0, "es-ES"), "12.345");
        assert_eq!(format_number(999.0, "en-US"), "999");
    }

    #[test]
    fn test_number_fraction_digits() {
        assert_eq!(format_number(1.23456, "en-US"), "1.235");
        assert_eq!(format_number(1.5, "es-ES"), "1,5");
        assert_eq!(format_number(2.0, "en-US"), "2");
        assert_eq!(format_number(-0.0001, "en-US"), "0");
        assert_eq!(format_number(-42.1, "en-US"), "-42.1");
        assert_eq!(format_number(f64::NAN, "en-US"), "NaN");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Hello world", 5), "Hello...");
        assert_eq!(truncate_text("Hello", 5), "Hello");
        assert_eq!(truncate_text("", 3), "");
        assert_eq!(truncate_text("Ñandú rápido", 5), "Ñandú...");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(format_bytes(3 * 1024u64.pow(4)), "3072 GB");
    }
}
