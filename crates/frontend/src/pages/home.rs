use crate::shared::locale::use_locale;
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [&str; 5] = [
    "features.leptos",
    "features.router",
    "features.i18n",
    "features.theme",
    "features.wasm",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="page page--home">
            <h1 class="page__title">{move || i18n.t("app.welcome")}</h1>
            <p class="page__lead">{move || i18n.t("app.description")}</p>

            <h2 class="page__subtitle">{move || i18n.t("features.title")}</h2>
            <ul class="feature-list">
                {FEATURES.into_iter().map(|id| view! {
                    <li>{move || i18n.t(id)}</li>
                }).collect_view()}
            </ul>

            <nav class="page__links">
                <A href="/dashboard">{move || i18n.t("nav.dashboard")}</A>
                <A href="/admin">{move || i18n.t("nav.admin")}</A>
                <A href="/test">{move || i18n.t("nav.test")}</A>
                <A href="/about">{move || i18n.t("nav.about")}</A>
            </nav>
        </section>
    }
}
