//! Formatting bound to the active locale and timezone.

use crate::shared::date_utils;
use crate::shared::locale::use_locale;
use crate::shared::number_format;
use crate::shared::timezone::use_timezone;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use contracts::shared::preferences::Locale;

/// Snapshot of the preferences the formatters need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formatters {
    pub locale: Locale,
    pub tz: Tz,
}

impl Formatters {
    pub fn new(locale: Locale, tz: Tz) -> Self {
        Self { locale, tz }
    }

    pub fn date<T: TimeZone>(&self, date: &DateTime<T>) -> String {
        date_utils::format_date(date, self.locale.tag(), self.tz)
    }

    pub fn date_time<T: TimeZone>(&self, date: &DateTime<T>) -> String {
        date_utils::format_date_time(date, self.locale.tag(), self.tz)
    }

    pub fn relative_time<T: TimeZone>(&self, date: &DateTime<T>) -> String {
        date_utils::format_relative_time(date, &Utc::now())
    }

    pub fn currency(&self, amount: f64) -> String {
        number_format::format_currency(amount, self.locale.tag())
    }

    pub fn number(&self, num: f64) -> String {
        number_format::format_number(num, self.locale.tag())
    }
}

/// Formatters for the locale and timezone currently in context.
///
/// Reading it inside a reactive closure subscribes to both preferences.
pub fn use_formatters() -> impl Fn() -> Formatters + Copy + 'static {
    let i18n = use_locale();
    let timezone = use_timezone();
    move || Formatters::new(i18n.locale(), timezone.tz())
}
