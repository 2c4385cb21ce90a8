use serde::{Deserialize, Serialize};

/// Accent palette applied through the `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accent {
    #[default]
    #[serde(rename = "theme-1")]
    Theme1,
    #[serde(rename = "theme-2")]
    Theme2,
}

impl Accent {
    /// Value used for the `data-theme` attribute and in persisted JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Theme1 => "theme-1",
            Accent::Theme2 => "theme-2",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Accent::Theme1 => Accent::Theme2,
            Accent::Theme2 => Accent::Theme1,
        }
    }

    pub fn all() -> [Accent; 2] {
        [Accent::Theme1, Accent::Theme2]
    }
}

/// Light/dark mode applied as a class on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn all() -> [Mode; 2] {
        [Mode::Light, Mode::Dark]
    }
}

/// Persisted theme preference, stored as `{"theme": "...", "mode": "..."}`.
///
/// Unknown fields are rejected so a blob written by something else is not
/// silently half-trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub theme: Accent,
    pub mode: Mode,
}

impl ThemeConfig {
    pub fn new(theme: Accent, mode: Mode) -> Self {
        Self { theme, mode }
    }

    /// Every class the document root may carry for a theme; cleared before
    /// the active combination is applied.
    pub fn root_classes() -> [&'static str; 4] {
        [
            Accent::Theme1.as_str(),
            Accent::Theme2.as_str(),
            Mode::Dark.as_str(),
            Mode::Light.as_str(),
        ]
    }
}
