//! Utilities for date and time formatting
//!
//! All functions take the locale tag and timezone explicitly; the reactive
//! wrappers in `shared::formatters` supply the active preferences.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Pattern used by [`format_date_with_timezone`] callers that have no
/// preference of their own.
pub const DEFAULT_DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

fn is_spanish(locale: &str) -> bool {
    locale.starts_with("es")
}

/// Parse an IANA timezone id against the bundled tz database.
pub fn parse_timezone(id: &str) -> Option<Tz> {
    id.parse::<Tz>().ok()
}

pub fn is_valid_timezone(id: &str) -> bool {
    parse_timezone(id).is_some()
}

/// Calendar date in `tz`.
///
/// `es*` locales: "15 Jan 2024"; everything else: "Jan 15, 2024".
pub fn format_date<T: TimeZone>(date: &DateTime<T>, locale: &str, tz: Tz) -> String {
    let pattern = if is_spanish(locale) {
        "%d %b %Y"
    } else {
        "%b %d, %Y"
    };
    date.with_timezone(&tz).format(pattern).to_string()
}

/// Date and wall-clock time in `tz`.
///
/// `es*` locales: "15 Jan 2024 14:30"; everything else: "Jan 15, 2024 2:30 PM".
pub fn format_date_time<T: TimeZone>(date: &DateTime<T>, locale: &str, tz: Tz) -> String {
    let pattern = if is_spanish(locale) {
        "%d %b %Y %H:%M"
    } else {
        "%b %d, %Y %-I:%M %p"
    };
    date.with_timezone(&tz).format(pattern).to_string()
}

/// Render `date` in `tz` with a strftime `pattern`.
pub fn format_date_with_timezone<T: TimeZone>(date: &DateTime<T>, pattern: &str, tz: Tz) -> String {
    date.with_timezone(&tz).format(pattern).to_string()
}

/// Interpret `naive` as wall-clock time in `from` and express it in `to`.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant; times
/// that do not exist in `from` (DST gap) yield `None`.
pub fn convert_timezone(naive: NaiveDateTime, from: Tz, to: Tz) -> Option<DateTime<Tz>> {
    match from.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&to)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&to)),
        LocalResult::None => None,
    }
}

pub fn current_timestamp(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    FewSeconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl Span {
    fn phrase(self, n: f64) -> String {
        match self {
            Span::FewSeconds => "a few seconds".to_string(),
            Span::Minute => "a minute".to_string(),
            Span::Minutes => format!("{} minutes", n),
            Span::Hour => "an hour".to_string(),
            Span::Hours => format!("{} hours", n),
            Span::Day => "a day".to_string(),
            Span::Days => format!("{} days", n),
            Span::Month => "a month".to_string(),
            Span::Months => format!("{} months", n),
            Span::Year => "a year".to_string(),
            Span::Years => format!("{} years", n),
        }
    }
}

struct Threshold {
    span: Span,
    /// Largest rounded value still described by this span.
    limit: Option<f64>,
    /// Seconds per unit; `None` keeps the unit of the previous threshold.
    unit: Option<f64>,
}

const DAY: f64 = 86_400.0;

const THRESHOLDS: [Threshold; 11] = [
    Threshold { span: Span::FewSeconds, limit: Some(44.0), unit: Some(1.0) },
    Threshold { span: Span::Minute, limit: Some(89.0), unit: None },
    Threshold { span: Span::Minutes, limit: Some(44.0), unit: Some(60.0) },
    Threshold { span: Span::Hour, limit: Some(89.0), unit: None },
    Threshold { span: Span::Hours, limit: Some(21.0), unit: Some(3_600.0) },
    Threshold { span: Span::Day, limit: Some(35.0), unit: None },
    Threshold { span: Span::Days, limit: Some(25.0), unit: Some(DAY) },
    Threshold { span: Span::Month, limit: Some(45.0), unit: None },
    Threshold { span: Span::Months, limit: Some(10.0), unit: Some(DAY * 30.4375) },
    Threshold { span: Span::Year, limit: Some(17.0), unit: None },
    Threshold { span: Span::Years, limit: None, unit: Some(DAY * 365.25) },
];

/// Humanized distance between `date` and `now`: "5 minutes ago", "in a day".
///
/// The result does not depend on any timezone, only on the two instants.
pub fn format_relative_time<T: TimeZone>(date: &DateTime<T>, now: &DateTime<Utc>) -> String {
    let seconds = (date.timestamp_millis() - now.timestamp_millis()) as f64 / 1000.0;
    let is_future = seconds > 0.0;

    let mut value = seconds;
    let mut text = String::new();
    for (i, threshold) in THRESHOLDS.iter().enumerate() {
        if let Some(unit) = threshold.unit {
            value = seconds / unit;
        }
        let rounded = value.abs().round();
        let fits = threshold.limit.map_or(true, |limit| rounded <= limit);
        if fits {
            let span = if rounded <= 1.0 && i > 0 {
                THRESHOLDS[i - 1].span
            } else {
                threshold.span
            };
            text = span.phrase(rounded);
            break;
        }
    }

    if is_future {
        format!("in {}", text)
    } else {
        format!("{} ago", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&fixed(), "en-US", Tz::UTC), "Jan 15, 2024");
        assert_eq!(format_date(&fixed(), "es-ES", Tz::UTC), "15 Jan 2024");
        assert_eq!(format_date(&fixed(), "fr-FR", Tz::UTC), "Jan 15, 2024");
    }

    #[test]
    fn test_format_date_crosses_midnight_in_zone() {
        let late = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        assert_eq!(format_date(&late, "en-US", Tz::Asia__Tokyo), "Jan 16, 2024");
        assert_eq!(format_date(&late, "es", Tz::America__Los_Angeles), "15 Jan 2024");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time(&fixed(), "en-US", Tz::UTC), "Jan 15, 2024 2:30 PM");
        assert_eq!(format_date_time(&fixed(), "es-ES", Tz::UTC), "15 Jan 2024 14:30");
        assert_eq!(
            format_date_time(&fixed(), "en-US", Tz::America__New_York),
            "Jan 15, 2024 9:30 AM"
        );
        assert_eq!(
            format_date_time(&fixed(), "es-MX", Tz::Asia__Tokyo),
            "15 Jan 2024 23:30"
        );
    }

    #[test]
    fn test_format_with_pattern() {
        assert_eq!(
            format_date_with_timezone(&fixed(), DEFAULT_DATE_TIME_PATTERN, Tz::Europe__Madrid),
            "2024-01-15 15:30:00"
        );
    }

    #[test]
    fn test_timezone_validation() {
        assert!(is_valid_timezone("UTC"));
        assert!(is_valid_timezone("America/New_York"));
        assert!(!is_valid_timezone("Invalid/Zone"));
        assert!(!is_valid_timezone(""));
        assert_eq!(parse_timezone("Asia/Kolkata"), Some(Tz::Asia__Kolkata));
    }

    #[test]
    fn test_convert_timezone() {
        let naive = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let converted = convert_timezone(naive, Tz::Europe__London, Tz::Asia__Tokyo).unwrap();
        assert_eq!(converted.format("%Y-%m-%d %H:%M").to_string(), "2024-07-01 20:00");

        // 02:30 does not exist on the spring-forward day in New York
        let gap = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(convert_timezone(gap, Tz::America__New_York, Tz::UTC), None);
    }

    #[test]
    fn test_current_timestamp_is_in_zone() {
        let now = current_timestamp(Tz::Asia__Tokyo);
        assert_eq!(now.timezone(), Tz::Asia__Tokyo);
        assert!((now.with_timezone(&Utc) - Utc::now()).num_seconds().abs() < 5);
    }

    #[test]
    fn test_relative_time_past() {
        let now = fixed();
        let ago = |d: Duration| format_relative_time(&(now - d), &now);

        assert_eq!(ago(Duration::zero()), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(30)), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(50)), "an hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::hours(30)), "a day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(30)), "a month ago");
        assert_eq!(ago(Duration::days(100)), "3 months ago");
        assert_eq!(ago(Duration::days(365)), "a year ago");
        assert_eq!(ago(Duration::days(365 * 3)), "3 years ago");
    }

    #[test]
    fn test_relative_time_future() {
        let now = fixed();
        let ahead = |d: Duration| format_relative_time(&(now + d), &now);

        assert_eq!(ahead(Duration::seconds(10)), "in a few seconds");
        assert_eq!(ahead(Duration::minutes(10)), "in 10 minutes");
        assert_eq!(ahead(Duration::days(2)), "in 2 days");
    }

    #[test]
    fn test_relative_time_ignores_zone_of_input() {
        let now = fixed();
        let earlier = (now - Duration::hours(2)).with_timezone(&Tz::Australia__Sydney);
        assert_eq!(format_relative_time(&earlier, &now), "2 hours ago");
    }
}
