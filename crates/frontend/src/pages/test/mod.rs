//! Component showcase and live demos of the preference and API plumbing.

mod byte_counter_demo;
mod timezone_demo;

use crate::shared::components::ui::{Badge, Button, Collapsible};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::{current_timestamp, format_date_with_timezone, DEFAULT_DATE_TIME_PATTERN};
use crate::shared::formatters::use_formatters;
use crate::shared::locale::use_locale;
use crate::shared::number_format::truncate_text;
use crate::shared::timezone::use_timezone;
use byte_counter_demo::ByteCounterDemo;
use leptos::prelude::*;
use timezone_demo::TimezoneDemo;

const SAMPLE_TEXT: &str = "Enterprise resource planning integrates core business processes";

#[component]
pub fn TestPage() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="page page--test">
            <PageHeader
                title=Signal::derive(move || i18n.t("test.title"))
                subtitle=Signal::derive(move || Some(i18n.t("test.description")))
            />

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">{move || i18n.t("test.button.section")}</h2>
                </div>
                <div class="card__content showcase-row">
                    <Button>"Primary"</Button>
                    <Button variant="secondary">"Secondary"</Button>
                    <Button variant="outline">"Outline"</Button>
                    <Button variant="ghost">"Ghost"</Button>
                    <Button size="sm">"Small"</Button>
                    <Button disabled=true>"Disabled"</Button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">{move || i18n.t("test.badge.section")}</h2>
                </div>
                <div class="card__content showcase-row">
                    <Badge>"Neutral"</Badge>
                    <Badge variant="primary">"Primary"</Badge>
                    <Badge variant="success">"Success"</Badge>
                    <Badge variant="warning">"Warning"</Badge>
                    <Badge variant="info">"Info"</Badge>
                    <Badge variant="error">"Error"</Badge>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">{move || i18n.t("test.collapsible.section")}</h2>
                </div>
                <div class="card__content">
                    <Collapsible title=Signal::derive(move || i18n.t("test.collapsible.toggle"))>
                        <p>{move || i18n.t("test.collapsible.content")}</p>
                    </Collapsible>
                </div>
            </div>

            <FormattingShowcase />
            <TimezoneDemo />
            <ByteCounterDemo />
        </section>
    }
}

#[component]
fn FormattingShowcase() -> impl IntoView {
    let i18n = use_locale();
    let timezone = use_timezone();
    let fmt = use_formatters();

    let now = move || format_date_with_timezone(&current_timestamp(timezone.tz()), DEFAULT_DATE_TIME_PATTERN, timezone.tz());

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{move || i18n.t("test.formatting.section")}</h2>
            </div>
            <dl class="card__content definition-list">
                <dt>"1234567.891"</dt>
                <dd>{move || fmt().number(1_234_567.891)}</dd>
                <dt>"1234.5"</dt>
                <dd>{move || fmt().currency(1234.5)}</dd>
                <dt>{DEFAULT_DATE_TIME_PATTERN}</dt>
                <dd>{now}</dd>
                <dt>"truncate(32)"</dt>
                <dd>{truncate_text(SAMPLE_TEXT, 32)}</dd>
            </dl>
        </div>
    }
}
