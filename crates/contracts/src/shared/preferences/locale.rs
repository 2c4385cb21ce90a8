use serde::{Deserialize, Serialize};

/// Supported UI locales. The set is closed: anything else resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Short code used in storage, URLs and catalog file names.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name of the language in that language, for the switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Full tag handed to number/date formatting.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Es => "es-ES",
        }
    }

    /// Exact match against the supported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Resolve a BCP-47 tag such as `es-MX` by its primary language subtag.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        Self::from_code(&primary)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_is_exact() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("es"), Some(Locale::Es));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn language_tags_resolve_by_primary_subtag() {
        assert_eq!(Locale::from_language_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_language_tag("en_GB"), Some(Locale::En));
        assert_eq!(Locale::from_language_tag("ES"), Some(Locale::Es));
        assert_eq!(Locale::from_language_tag("de-DE"), None);
        assert_eq!(Locale::from_language_tag(""), None);
    }

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
            assert_eq!(locale.to_string(), locale.code());
        }
    }
}
