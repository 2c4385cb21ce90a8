//! Theme preference: accent palette plus light/dark mode.
//!
//! `ThemeStore` owns the value and its persistence; `ThemeProvider` exposes it
//! through context and mirrors every change onto the document root.

mod controls;

pub use controls::ThemeControls;

use crate::shared::storage::{load_json, save_json, BrowserStorage, KeyValueStorage};
use contracts::shared::preferences::{Accent, Mode, ThemeConfig, THEME_STORAGE_KEY};
use leptos::prelude::*;

/// Owner of the theme preference.
///
/// Every mutation is written back to storage; write failures are logged and
/// the in-memory value stays authoritative.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    config: ThemeConfig,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    /// Restore the persisted preference, falling back to the default when it
    /// is missing or fails validation.
    pub fn load(storage: S) -> Self {
        let config = match load_json::<ThemeConfig, _>(&storage, THEME_STORAGE_KEY) {
            Ok(Some(config)) => config,
            Ok(None) => ThemeConfig::default(),
            Err(e) => {
                log::warn!("Ignoring stored theme: {}", e);
                ThemeConfig::default()
            }
        };
        Self { storage, config }
    }

    pub fn get(&self) -> ThemeConfig {
        self.config
    }

    pub fn set_accent(&mut self, theme: Accent) {
        self.config.theme = theme;
        self.persist();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.persist();
    }

    pub fn toggle_accent(&mut self) {
        self.set_accent(self.config.theme.toggled());
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.config.mode.toggled());
    }

    fn persist(&self) {
        if let Err(e) = save_json(&self.storage, THEME_STORAGE_KEY, &self.config) {
            log::warn!("Failed to save theme: {}", e);
        }
    }
}

/// Reset the document root and apply `config`: `data-theme=<accent>` and the
/// mode as a class.
fn apply_to_document(config: ThemeConfig) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    for class in ThemeConfig::root_classes() {
        let _ = classes.remove_1(class);
    }
    let _ = root.remove_attribute("data-theme");

    let _ = root.set_attribute("data-theme", config.theme.as_str());
    let _ = classes.add_1(config.mode.as_str());
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    pub fn config(&self) -> ThemeConfig {
        self.store.with(|s| s.get())
    }

    pub fn accent(&self) -> Accent {
        self.config().theme
    }

    pub fn mode(&self) -> Mode {
        self.config().mode
    }

    pub fn set_accent(&self, theme: Accent) {
        self.store.update(|s| s.set_accent(theme));
    }

    pub fn set_mode(&self, mode: Mode) {
        self.store.update(|s| s.set_mode(mode));
    }

    pub fn toggle_accent(&self) {
        self.store.update(|s| s.toggle_accent());
    }

    pub fn toggle_mode(&self) {
        self.store.update(|s| s.toggle_mode());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let store = RwSignal::new(ThemeStore::load(BrowserStorage));

    Effect::new(move |_| {
        apply_to_document(store.with(|s| s.get()));
    });

    provide_context(ThemeContext { store });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::tests::BrokenStorage;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn empty_storage_gives_default() {
        let store = ThemeStore::load(MemoryStorage::new());
        assert_eq!(store.get(), ThemeConfig::default());
    }

    #[test]
    fn persisted_value_is_restored() {
        let storage =
            MemoryStorage::with_item(THEME_STORAGE_KEY, r#"{"theme":"theme-2","mode":"dark"}"#);
        let store = ThemeStore::load(storage);
        assert_eq!(store.get(), ThemeConfig::new(Accent::Theme2, Mode::Dark));
    }

    #[test]
    fn invalid_persisted_value_falls_back_to_default() {
        for raw in [r#"{"theme":"neon","mode":"dark"}"#, "garbage", "{}"] {
            let store = ThemeStore::load(MemoryStorage::with_item(THEME_STORAGE_KEY, raw));
            assert_eq!(store.get(), ThemeConfig::default(), "accepted {raw}");
        }
    }

    #[test]
    fn toggling_twice_restores_original() {
        let mut store = ThemeStore::load(MemoryStorage::new());
        let original = store.get();

        store.toggle_mode();
        assert_eq!(store.get().mode, Mode::Dark);
        store.toggle_mode();
        assert_eq!(store.get(), original);

        store.toggle_accent();
        assert_eq!(store.get().theme, Accent::Theme2);
        store.toggle_accent();
        assert_eq!(store.get(), original);
    }

    #[test]
    fn mutations_are_persisted() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::load(storage.clone());
        store.set_accent(Accent::Theme2);
        store.set_mode(Mode::Dark);

        assert_eq!(
            storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"theme":"theme-2","mode":"dark"}"#)
        );
        assert_eq!(ThemeStore::load(storage).get(), store.get());
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut store = ThemeStore::load(BrokenStorage);
        assert_eq!(store.get(), ThemeConfig::default());
        store.toggle_mode();
        assert_eq!(store.get().mode, Mode::Dark);
    }
}
