use leptos::prelude::*;

/// Page title block with an optional subtitle and an actions slot.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Action buttons rendered on the right.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            {children.map(|children| view! {
                <div class="page-header__actions">{children()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_slot_may_be_omitted() {
        let props = PageHeaderProps::builder()
            .title(Signal::stored(String::from("Users")))
            .build();
        assert!(props.children.is_none());
    }
}
