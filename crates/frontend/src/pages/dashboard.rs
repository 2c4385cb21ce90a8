use crate::shared::components::PageHeader;
use crate::shared::locale::use_locale;
use leptos::prelude::*;

const TILES: [(&str, &str, &str); 3] = [
    ("dashboard.totalUsers", "1,234", "tile--blue"),
    ("dashboard.totalProducts", "567", "tile--green"),
    ("dashboard.revenue", "$89,123", "tile--purple"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="page">
            <PageHeader title=Signal::derive(move || i18n.t("dashboard.title"))/>
            <div class="tile-grid">
                {TILES.into_iter().map(|(label, value, class)| view! {
                    <div class=format!("tile {}", class)>
                        <h3 class="tile__label">{move || i18n.t(label)}</h3>
                        <p class="tile__value">{value}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
