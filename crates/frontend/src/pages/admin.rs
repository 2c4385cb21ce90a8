//! Admin dashboard: stat tiles, recent orders, best sellers and shortcuts.

use crate::shared::components::ui::{Button, OrderStatusBadge};
use crate::shared::components::StatCard;
use crate::shared::formatters::use_formatters;
use crate::shared::locale::use_locale;
use crate::shared::mock_data;
use leptos::prelude::*;

const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("admin.action.newProduct", "📦"),
    ("admin.action.addUser", "👤"),
    ("admin.action.viewReports", "📊"),
    ("admin.action.settings", "⚙️"),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="page page--admin">
            <div class="page__intro">
                <h1 class="page__title">{move || i18n.t("admin.welcome")}</h1>
                <p class="page__lead">{move || i18n.t("admin.subtitle")}</p>
            </div>

            <div class="stat-grid">
                {mock_data::admin_stats()
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat /> })
                    .collect_view()}
            </div>

            <div class="admin-panels">
                <RecentOrders />
                <TopProducts />
            </div>

            <QuickActions />
        </section>
    }
}

#[component]
fn Panel(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{move || i18n.t(title)}</h2>
                <p class="card__description">{move || i18n.t(description)}</p>
            </div>
            <div class="card__content">{children()}</div>
        </div>
    }
}

#[component]
fn RecentOrders() -> impl IntoView {
    let fmt = use_formatters();

    view! {
        <Panel title="admin.recentOrders" description="admin.recentOrders.description">
            <ul class="order-list">
                {mock_data::recent_orders().into_iter().map(|order| {
                    let amount = order.amount;
                    view! {
                        <li class="order-list__row">
                            <div class="order-list__main">
                                <span class="order-list__id">{order.id}</span>
                                <span class="order-list__customer">{order.customer}</span>
                                <span class="order-list__product">{order.product}</span>
                            </div>
                            <div class="order-list__side">
                                <span class="order-list__amount">{move || fmt().currency(amount)}</span>
                                <OrderStatusBadge status=order.status />
                                <span class="order-list__date">{order.date}</span>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </Panel>
    }
}

#[component]
fn TopProducts() -> impl IntoView {
    let i18n = use_locale();
    let fmt = use_formatters();

    view! {
        <Panel title="admin.topProducts" description="admin.topProducts.description">
            <ol class="top-products">
                {mock_data::top_products().into_iter().enumerate().map(|(rank, product)| {
                    let sales = product.sales.to_string();
                    let revenue = product.revenue;
                    view! {
                        <li class="top-products__row">
                            <span class="top-products__rank">{rank + 1}</span>
                            <div class="top-products__main">
                                <span class="top-products__name">{product.name}</span>
                                <span class="top-products__sales">
                                    {move || i18n.t_with("admin.sales", &[("count", sales.as_str())])}
                                </span>
                            </div>
                            <span class="top-products__revenue">{move || fmt().currency(revenue)}</span>
                        </li>
                    }
                }).collect_view()}
            </ol>
        </Panel>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <Panel title="admin.quickActions" description="admin.quickActions.description">
            <div class="quick-actions">
                {QUICK_ACTIONS.into_iter().map(|(label, emoji)| view! {
                    <Button variant="outline" class="quick-actions__button">
                        <span aria-hidden="true">{emoji}</span>
                        <span>{move || i18n.t(label)}</span>
                    </Button>
                }).collect_view()}
            </div>
        </Panel>
    }
}
