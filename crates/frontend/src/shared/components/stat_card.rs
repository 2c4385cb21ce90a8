use crate::shared::locale::use_locale;
use contracts::dashboards::{ChangeType, DashboardStat};
use leptos::prelude::*;

fn change_class(change_type: ChangeType) -> &'static str {
    match change_type {
        ChangeType::Positive => "stat-card__change stat-card__change--positive",
        ChangeType::Negative => "stat-card__change stat-card__change--negative",
    }
}

/// Admin dashboard tile: localized title, preformatted value and the change
/// against last month.
#[component]
pub fn StatCard(stat: DashboardStat) -> impl IntoView {
    let i18n = use_locale();
    let DashboardStat {
        title,
        value,
        change,
        change_type,
        icon,
    } = stat;

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{move || i18n.t(&title)}</span>
                <span class="stat-card__icon" aria-hidden="true">{icon}</span>
            </div>
            <div class="stat-card__value">{value}</div>
            <div class=change_class(change_type)>
                {move || i18n.t_with("admin.sinceLastMonth", &[("change", change.as_str())])}
            </div>
        </div>
    }
}
