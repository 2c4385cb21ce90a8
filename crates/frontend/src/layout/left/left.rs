use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Left zone of the shell; collapses with the header's menu button.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}
