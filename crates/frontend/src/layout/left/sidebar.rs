//! Sidebar component with collapsible menu groups

use super::menu::{group_for_path, is_active, menu_groups, MenuGroup};
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let pathname = location.pathname;

    // Open the group holding the current page.
    Effect::new(move |_| {
        if let Some(id) = group_for_path(&pathname.get()) {
            ctx.expand_group(id);
        }
    });

    // The sidebar overlays the page on narrow screens; hide it after navigating.
    Effect::new(move |previous: Option<String>| {
        let current = pathname.get();
        if closes_on_navigation(previous.as_deref(), &current, viewport_width()) {
            ctx.close_sidebar();
        }
        current
    });

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| view! { <SidebarGroup group=group /> }).collect_view()}
        </nav>
    }
}

/// Widest viewport where the sidebar covers the content.
const OVERLAY_MAX_WIDTH: f64 = 768.0;

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn closes_on_navigation(previous: Option<&str>, current: &str, width: Option<f64>) -> bool {
    let navigated = previous.is_some_and(|p| p != current);
    navigated && width.is_some_and(|w| w < OVERLAY_MAX_WIDTH)
}

#[component]
fn SidebarGroup(group: MenuGroup) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_locale();
    let pathname = use_location().pathname;

    let MenuGroup {
        id,
        label,
        icon: icon_name,
        href,
        items,
    } = group;

    match href {
        Some(href) => view! {
            <a
                href=href
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(&pathname.get(), href)
            >
                {icon(icon_name)}
                <span class="app-sidebar__label">{move || i18n.t(label)}</span>
            </a>
        }
        .into_any(),
        None => view! {
            <div class="app-sidebar__group">
                <button
                    class="app-sidebar__item"
                    aria-expanded=move || ctx.is_expanded(id).to_string()
                    on:click=move |_| ctx.toggle_group(id)
                >
                    {icon(icon_name)}
                    <span class="app-sidebar__label">{move || i18n.t(label)}</span>
                    <span class="app-sidebar__chevron">
                        {move || if ctx.is_expanded(id) { icon("chevron-down") } else { icon("chevron-right") }}
                    </span>
                </button>
                <Show when=move || ctx.is_expanded(id)>
                    <div class="app-sidebar__children">
                        {items.iter().map(|item| {
                            let href = item.href;
                            let label = item.label;
                            view! {
                                <a
                                    href=href
                                    class="app-sidebar__item app-sidebar__item--child"
                                    class:app-sidebar__item--active=move || is_active(&pathname.get(), href)
                                >
                                    {move || i18n.t(label)}
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_close_after_navigation() {
        assert!(closes_on_navigation(Some("/en/users"), "/en/products", Some(375.0)));
        assert!(!closes_on_navigation(Some("/en/users"), "/en/products", Some(1280.0)));
    }

    #[test]
    fn first_render_and_same_path_keep_the_sidebar() {
        assert!(!closes_on_navigation(None, "/en/users", Some(375.0)));
        assert!(!closes_on_navigation(Some("/en/users"), "/en/users", Some(375.0)));
        assert!(!closes_on_navigation(Some("/en/users"), "/en/products", None));
    }
}
