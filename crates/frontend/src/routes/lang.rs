//! Locale-prefixed routes (`/:lang/...`).

use crate::shared::locale::{use_locale, LocaleStore};
use crate::shared::storage::KeyValueStorage;
use contracts::shared::preferences::Locale;
use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_params_map;

/// Where an unsupported language segment is sent.
pub const FALLBACK_LANG_PATH: &str = "/en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangRoute {
    /// Render the nested route with this locale active.
    Enter(Locale),
    Redirect(&'static str),
}

pub fn resolve_lang_segment(segment: &str) -> LangRoute {
    match Locale::from_code(segment) {
        Some(locale) => LangRoute::Enter(locale),
        None => LangRoute::Redirect(FALLBACK_LANG_PATH),
    }
}

/// Make the route's locale active in `store`. Returns whether it changed.
pub fn enter_route<S: KeyValueStorage>(store: &mut LocaleStore<S>, route: LangRoute) -> bool {
    match route {
        LangRoute::Enter(locale) => store.switch(locale),
        LangRoute::Redirect(_) => false,
    }
}

/// Parent of the `/:lang` routes: applies the locale from the URL or
/// redirects when the segment is not a supported locale.
#[component]
pub fn LangGuard() -> impl IntoView {
    let params = use_params_map();
    let i18n = use_locale();

    let route = Memo::new(move |_| {
        let segment = params.read().get("lang").unwrap_or_default();
        resolve_lang_segment(&segment)
    });

    Effect::new(move |_| {
        let route = route.get();
        i18n.update_store(|store| enter_route(store, route));
    });

    move || match route.get() {
        LangRoute::Enter(_) => view! { <Outlet /> }.into_any(),
        LangRoute::Redirect(path) => {
            log::debug!("Unsupported language segment, redirecting to {}", path);
            view! { <Redirect path=path /> }.into_any()
        }
    }
}
