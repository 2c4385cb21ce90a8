use crate::shared::icons::icon;
use leptos::prelude::*;

/// Section whose body is shown or hidden by clicking its header.
#[component]
pub fn Collapsible(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional)]
    open: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let is_open = RwSignal::new(open);

    view! {
        <div class="collapsible" class:collapsible--open=move || is_open.get()>
            <button
                class="collapsible__header"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| is_open.update(|v| *v = !*v)
            >
                <span class="collapsible__title">{move || title.get()}</span>
                {move || if is_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
            </button>
            <Show when=move || is_open.get()>
                <div class="collapsible__content">{children()}</div>
            </Show>
        </div>
    }
}
