/// Placeholder timezone; treated as "not chosen yet" when the platform
/// reports something more specific.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Entry of the timezone picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn tz(value: &'static str, label: &'static str) -> TimezoneOption {
    TimezoneOption { value, label }
}

pub const COMMON_TIMEZONES: &[TimezoneOption] = &[
    tz("UTC", "UTC"),
    tz("America/New_York", "Eastern Time (US & Canada)"),
    tz("America/Chicago", "Central Time (US & Canada)"),
    tz("America/Denver", "Mountain Time (US & Canada)"),
    tz("America/Los_Angeles", "Pacific Time (US & Canada)"),
    tz("Europe/London", "London"),
    tz("Europe/Paris", "Paris"),
    tz("Europe/Berlin", "Berlin"),
    tz("Europe/Madrid", "Madrid"),
    tz("Asia/Tokyo", "Tokyo"),
    tz("Asia/Shanghai", "Shanghai"),
    tz("Asia/Kolkata", "India"),
    tz("Australia/Sydney", "Sydney"),
];
