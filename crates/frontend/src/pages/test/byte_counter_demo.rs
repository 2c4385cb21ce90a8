use crate::shared::api::{use_api_client, ByteCounter, ByteStats};
use crate::shared::components::ui::Button;
use crate::shared::locale::use_locale;
use crate::shared::number_format::{format_bytes, format_number};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Live view of the session byte counter with a test request.
#[component]
pub fn ByteCounterDemo() -> impl IntoView {
    let i18n = use_locale();
    let api = use_api_client();
    let counter = use_context::<ByteCounter>().expect("ByteCounter not found. Provide it at the application root.");

    let stats = RwSignal::new(counter.snapshot());
    let loading = RwSignal::new(false);

    let refresh = {
        let counter = counter.clone();
        Callback::new(move |_| stats.set(counter.snapshot()))
    };

    let reset = {
        let counter = counter.clone();
        Callback::new(move |_| {
            counter.reset();
            stats.set(counter.snapshot());
        })
    };

    let test_request = Callback::new(move |_| {
        let api = api.clone();
        let counter = counter.clone();
        loading.set(true);
        spawn_local(async move {
            // The endpoint usually does not exist; the bytes are counted anyway.
            if let Err(e) = api.get::<serde_json::Value>("/test-endpoint").await {
                log::debug!("Test request failed: {}", e);
            }
            stats.set(counter.snapshot());
            loading.set(false);
        });
    });

    let tile = move |label: &'static str, class: &'static str, pick: fn(ByteStats) -> u64| {
        view! {
            <div class=format!("tile {}", class)>
                <h4 class="tile__label">{move || i18n.t(label)}</h4>
                <p class="tile__value">{move || format_bytes(pick(stats.get()))}</p>
                <p class="tile__hint">
                    {move || {
                        let locale = i18n.locale();
                        let count = format_number(pick(stats.get()) as f64, locale.tag());
                        i18n.t_with("bytes.count", &[("count", count.as_str())])
                    }}
                </p>
            </div>
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{move || i18n.t("bytes.title")}</h2>
                <p class="card__description">{move || i18n.t("bytes.description")}</p>
            </div>
            <div class="card__content">
                <div class="tile-grid">
                    {tile("bytes.sent", "tile--blue", |s| s.sent)}
                    {tile("bytes.received", "tile--green", |s| s.received)}
                    {tile("bytes.total", "tile--purple", |s| s.total)}
                </div>

                <div class="showcase-row">
                    <Button on_click=test_request disabled=Signal::derive(move || loading.get())>
                        {move || if loading.get() { i18n.t("bytes.testing") } else { i18n.t("bytes.test") }}
                    </Button>
                    <Button variant="secondary" on_click=refresh>{move || i18n.t("bytes.refresh")}</Button>
                    <Button variant="outline" on_click=reset>{move || i18n.t("bytes.reset")}</Button>
                </div>

                <ul class="help-list">
                    <li>{move || i18n.t("bytes.help.interceptors")}</li>
                    <li>{move || i18n.t("bytes.help.scope")}</li>
                    <li>{move || i18n.t("bytes.help.test")}</li>
                    <li>{move || i18n.t("bytes.help.reset")}</li>
                </ul>
            </div>
        </div>
    }
}
