//! UI preference value types shared by the preference stores.
//!
//! Each preference is persisted under its own fixed key in browser storage.
//! Keys carry no version; a value that fails to parse is treated as absent.

pub mod locale;
pub mod theme;
pub mod timezone;

pub use locale::Locale;
pub use theme::{Accent, Mode, ThemeConfig};
pub use timezone::{TimezoneOption, COMMON_TIMEZONES, DEFAULT_TIMEZONE};

/// Storage key of the active locale code.
pub const LOCALE_STORAGE_KEY: &str = "app-locale";

/// Storage key of the JSON-encoded [`ThemeConfig`].
pub const THEME_STORAGE_KEY: &str = "app-theme-config";

/// Storage key of the selected IANA timezone id.
pub const TIMEZONE_STORAGE_KEY: &str = "app-timezone";

/// Storage key of the bearer token injected into API requests.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
