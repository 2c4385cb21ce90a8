use leptos::prelude::*;

/// CSS modifier for a button variant; unknown variants render as primary.
pub fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        _ => "button--primary",
    }
}

/// Button component with variants (primary, secondary, outline, ghost) and sizes (sm, md)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "outline" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!(
                "button {} {} {}",
                variant_class(variant.get().as_deref()),
                size_class(),
                additional_class()
            )
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_modifiers() {
        assert_eq!(variant_class(None), "button--primary");
        assert_eq!(variant_class(Some("outline")), "button--outline");
        assert_eq!(variant_class(Some("ghost")), "button--ghost");
        assert_eq!(variant_class(Some("danger")), "button--primary");
    }
}
