//! Locale preference and the message catalog bound to it.

use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use contracts::shared::i18n::{messages, Messages};
use contracts::shared::preferences::{Locale, LOCALE_STORAGE_KEY};
use leptos::prelude::*;

/// Owner of the locale preference.
#[derive(Debug)]
pub struct LocaleStore<S> {
    storage: S,
    locale: Locale,
}

impl<S: KeyValueStorage> LocaleStore<S> {
    /// Resolve the initial locale: persisted value, then the platform
    /// language when supported, then the default. The result is persisted.
    pub fn load(storage: S, platform_language: Option<&str>) -> Self {
        let persisted = match storage.get(LOCALE_STORAGE_KEY) {
            Ok(value) => value.as_deref().and_then(Locale::from_code),
            Err(e) => {
                log::warn!("Failed to read locale: {}", e);
                None
            }
        };

        let locale = persisted
            .or_else(|| platform_language.and_then(Locale::from_language_tag))
            .unwrap_or(Locale::DEFAULT);

        let store = Self { storage, locale };
        if persisted != Some(locale) {
            store.persist();
        }
        store
    }

    pub fn get(&self) -> Locale {
        self.locale
    }

    pub fn set(&mut self, locale: Locale) {
        self.locale = locale;
        self.persist();
    }

    /// Like `set`, but leaves storage alone when `locale` is already active.
    /// Returns whether anything changed.
    pub fn switch(&mut self, locale: Locale) -> bool {
        if self.locale == locale {
            return false;
        }
        log::debug!("Locale switched to {}", locale);
        self.set(locale);
        true
    }

    pub fn messages(&self) -> &'static Messages {
        messages(self.locale)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.set(LOCALE_STORAGE_KEY, self.locale.code()) {
            log::warn!("Failed to save locale: {}", e);
        }
    }
}

/// Preferred language reported by the browser, e.g. "es-MX".
pub fn platform_language() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

#[derive(Clone, Copy)]
pub struct LocaleContext {
    store: RwSignal<LocaleStore<BrowserStorage>>,
}

impl LocaleContext {
    pub fn locale(&self) -> Locale {
        self.store.with(|s| s.get())
    }

    /// Switch locale; a no-op when it is already active.
    pub fn set_locale(&self, locale: Locale) {
        self.update_store(|s| s.switch(locale));
    }

    /// Run `f` against the store, notifying readers only when it returns true.
    pub fn update_store(&self, f: impl FnOnce(&mut LocaleStore<BrowserStorage>) -> bool) {
        self.store.maybe_update(f);
    }

    pub fn messages(&self) -> &'static Messages {
        self.store.with(|s| s.messages())
    }

    /// Message for `id`, or the id itself when the catalog has none.
    pub fn t(&self, id: &str) -> String {
        self.messages().format(id).into_owned()
    }

    pub fn t_or(&self, id: &str, default: &str) -> String {
        self.messages().format_or(id, default).into_owned()
    }

    pub fn t_with(&self, id: &str, args: &[(&str, &str)]) -> String {
        self.messages().format_with(id, args)
    }
}

#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    let language = platform_language();
    let store = RwSignal::new(LocaleStore::load(BrowserStorage, language.as_deref()));

    // Mirror the active locale on <html lang>.
    Effect::new(move |_| {
        let code = store.with(|s| s.get().code());
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", code);
        }
    });

    provide_context(LocaleContext { store });

    children()
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}

/// Language switcher listing every supported locale.
#[component]
pub fn LocaleSelect() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <select
            class="locale-select"
            title=move || i18n.t("nav.language")
            on:change=move |ev| {
                if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
                    i18n.set_locale(locale);
                }
            }
        >
            {Locale::ALL.into_iter().map(|locale| {
                view! {
                    <option
                        value=locale.code()
                        selected=move || i18n.locale() == locale
                    >
                        {locale.display_name()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
