use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::mock_data::CURRENT_USER;
use leptos::prelude::*;

#[component]
pub fn UserMenu() -> impl IntoView {
    let i18n = use_locale();
    let open = RwSignal::new(false);

    let logout = move |_| {
        log::info!("Logout requested for {}", CURRENT_USER.email);
        open.set(false);
    };

    view! {
        <div class="dropdown">
            <button
                class="top-header__user"
                title=move || i18n.t("header.profile")
                on:click=move |_| open.update(|v| *v = !*v)
            >
                {icon("user")}
                <span>{CURRENT_USER.name}</span>
            </button>
            <Show when=move || open.get()>
                <div class="dropdown__menu">
                    <div class="dropdown__header">
                        <div class="dropdown__text">{CURRENT_USER.name}</div>
                        <div class="dropdown__meta">{CURRENT_USER.email}</div>
                        <div class="dropdown__meta">{CURRENT_USER.role}</div>
                    </div>
                    <a href="/about" class="dropdown__item">
                        {icon("user")}
                        {move || i18n.t("header.profile")}
                    </a>
                    <a href="/settings" class="dropdown__item">
                        {icon("settings")}
                        {move || i18n.t("header.settings")}
                    </a>
                    <button class="dropdown__item" on:click=logout>
                        {icon("log-out")}
                        {move || i18n.t("header.logout")}
                    </button>
                </div>
            </Show>
        </div>
    }
}
