use crate::shared::locale::use_locale;
use contracts::domain::OrderStatus;
use leptos::prelude::*;

/// Badge variant used for an order status.
pub fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "success",
        OrderStatus::Processing => "warning",
        OrderStatus::Shipped => "info",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "info", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "info" => "badge--info",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Localized badge for an order status.
#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <Badge variant=status_variant(status)>
            {move || i18n.t(status.message_id())}
        </Badge>
    }
}
