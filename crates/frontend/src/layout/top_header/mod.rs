//! Application top bar: menu button, title, preferences, notifications and
//! the user menu.

mod notifications;
mod user_menu;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::locale::{use_locale, LocaleSelect};
use crate::shared::theme::ThemeControls;
use leptos::prelude::*;
use notifications::NotificationsDropdown;
use user_menu::UserMenu;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_locale();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || i18n.t("nav.toggleMenu")
                    aria-label=move || i18n.t("nav.toggleMenu")
                >
                    {icon("menu")}
                </button>
                <a href="/" class="top-header__title">{move || i18n.t("app.title")}</a>
            </div>

            <div class="top-header__actions">
                <ThemeControls />
                <LocaleSelect />
                <NotificationsDropdown />
                <UserMenu />
            </div>
        </header>
    }
}
