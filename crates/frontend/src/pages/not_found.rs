use crate::shared::locale::use_locale;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="page page--centered">
            <h1 class="page__title">"404"</h1>
            <h2 class="page__subtitle">{move || i18n.t("notFound.title")}</h2>
            <p>{move || i18n.t("notFound.description")}</p>
            <A href="/">{move || i18n.t("notFound.back")}</A>
        </section>
    }
}
