use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::mock_data;
use contracts::domain::unread_count;
use leptos::prelude::*;

#[component]
pub fn NotificationsDropdown() -> impl IntoView {
    let i18n = use_locale();
    let items = mock_data::notifications();
    let unread = unread_count(&items);
    let open = RwSignal::new(false);

    view! {
        <div class="dropdown">
            <button
                class="top-header__icon-btn"
                title=move || i18n.t("header.notifications")
                on:click=move |_| open.update(|v| *v = !*v)
            >
                {icon("bell")}
                <Show when=move || { unread > 0 }>
                    <span class="top-header__badge">{unread}</span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <div class="dropdown__menu dropdown__menu--wide">
                    <div class="dropdown__header">{move || i18n.t("header.notifications")}</div>
                    {items.iter().map(|n| {
                        let time = n.time.clone();
                        view! {
                            <div class="dropdown__item" class:dropdown__item--unread=n.unread>
                                <span class="dropdown__text">{n.message.clone()}</span>
                                <span class="dropdown__meta">
                                    {move || i18n.t_with("header.notifications.ago", &[("time", time.as_str())])}
                                </span>
                            </div>
                        }
                    }).collect_view()}
                    <div class="dropdown__footer">{move || i18n.t("header.notifications.viewAll")}</div>
                </div>
            </Show>
        </div>
    }
}
