use super::use_theme;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use contracts::shared::preferences::{Accent, Mode};
use leptos::prelude::*;

/// Header buttons switching the accent palette and light/dark mode.
#[component]
pub fn ThemeControls() -> impl IntoView {
    let theme = use_theme();
    let i18n = use_locale();

    view! {
        <div class="theme-controls">
            <button
                class="theme-controls__button"
                title=move || i18n.t("nav.toggleAccent")
                aria-label=move || i18n.t("nav.toggleAccent")
                on:click=move |_| theme.toggle_accent()
            >
                {icon("palette")}
                <span class="theme-controls__label">
                    {move || match theme.accent() {
                        Accent::Theme1 => "1",
                        Accent::Theme2 => "2",
                    }}
                </span>
            </button>
            <button
                class="theme-controls__button"
                title=move || i18n.t("nav.toggleTheme")
                aria-label=move || i18n.t("nav.toggleTheme")
                on:click=move |_| theme.toggle_mode()
            >
                {move || match theme.mode() {
                    Mode::Light => icon("moon"),
                    Mode::Dark => icon("sun"),
                }}
            </button>
        </div>
    }
}
