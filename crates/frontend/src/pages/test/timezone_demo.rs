use crate::shared::formatters::use_formatters;
use crate::shared::locale::use_locale;
use crate::shared::timezone::use_timezone;
use chrono::Utc;
use contracts::shared::preferences::COMMON_TIMEZONES;
use leptos::prelude::*;

#[component]
pub fn TimezoneDemo() -> impl IntoView {
    let i18n = use_locale();
    let timezone = use_timezone();
    let fmt = use_formatters();
    let test_date = Utc::now();

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"🕒 " {move || i18n.t("timezone.title")}</h2>
            </div>
            <div class="card__content">
                <div class="form__group">
                    <label class="form__label" for="timezone-select">{move || i18n.t("timezone.current")}</label>
                    <select
                        id="timezone-select"
                        class="form__select"
                        on:change=move |ev| timezone.set_timezone(&event_target_value(&ev))
                    >
                        {COMMON_TIMEZONES.iter().map(|option| {
                            let value = option.value;
                            view! {
                                <option value=value selected=move || timezone.timezone() == value>
                                    {option.label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <p class="form__hint">
                        {move || i18n.t_with("timezone.detected", &[("zone", timezone.detected().as_str())])}
                    </p>
                </div>

                <dl class="definition-list">
                    <dt>{move || i18n.t("timezone.date")}</dt>
                    <dd>{move || fmt().date(&test_date)}</dd>
                    <dt>{move || i18n.t("timezone.dateTime")}</dt>
                    <dd>{move || fmt().date_time(&test_date)}</dd>
                    <dt>{move || i18n.t("timezone.relative")}</dt>
                    <dd>{move || fmt().relative_time(&test_date)}</dd>
                    <dt>{move || i18n.t("timezone.current")}</dt>
                    <dd class="mono">{move || timezone.timezone()}</dd>
                </dl>
            </div>
        </div>
    }
}
