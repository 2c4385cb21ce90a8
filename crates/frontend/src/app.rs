use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::{ApiClient, ApiConfig, ByteCounter};
use crate::shared::locale::LocaleProvider;
use crate::shared::theme::ThemeProvider;
use crate::shared::timezone::TimezoneProvider;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppGlobalContext::new());

    // One counter for the session, shared by the client and the demo page.
    let counter = ByteCounter::new();
    let config = ApiConfig::from_env();
    log::debug!("API base URL: {}", config.base_url);
    provide_context(ApiClient::with_defaults(config, counter.clone()));
    provide_context(counter);

    view! {
        <Title text="ERP Admin"/>
        <ThemeProvider>
            <LocaleProvider>
                <TimezoneProvider>
                    <AppRoutes />
                </TimezoneProvider>
            </LocaleProvider>
        </ThemeProvider>
    }
}
