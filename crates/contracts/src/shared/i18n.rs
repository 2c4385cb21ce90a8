//! Static message catalogs, one flat id → template mapping per locale.
//!
//! Catalogs are generated at build time from `locales/<code>.json`. A locale
//! is not required to translate every id: lookups that miss fall back to the
//! id itself or to the default text supplied by the call site.

use std::borrow::Cow;

use super::preferences::Locale;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/messages_gen.rs"));
}

/// Message catalog of one locale. Entries are sorted by id.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
    entries: &'static [(&'static str, &'static str)],
}

static EN: Messages = Messages {
    locale: Locale::En,
    entries: generated::EN,
};

static ES: Messages = Messages {
    locale: Locale::Es,
    entries: generated::ES,
};

/// Catalog for `locale`.
pub fn messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
    }
}

impl Messages {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Raw template for `id`, if this catalog has one.
    pub fn get(&self, id: &str) -> Option<&'static str> {
        self.entries
            .binary_search_by(|(key, _)| (*key).cmp(id))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Template for `id`, or the id itself when missing.
    pub fn format<'a>(&self, id: &'a str) -> Cow<'a, str> {
        match self.get(id) {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Borrowed(id),
        }
    }

    /// Template for `id`, or `default` when missing.
    pub fn format_or<'a>(&self, id: &str, default: &'a str) -> Cow<'a, str> {
        match self.get(id) {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Borrowed(default),
        }
    }

    /// Template for `id` with `{name}` placeholders replaced from `args`.
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn format_with(&self, id: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.format(id), args)
    }
}

/// Replace `{name}` placeholders in `template`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
