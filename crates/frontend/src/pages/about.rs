use crate::shared::components::ui::Button;
use crate::shared::locale::use_locale;
use crate::shared::meta::{DocumentMeta, MetaTags};
use leptos::prelude::*;

const DESCRIPTION: &str =
    "Learn more about ERP Admin, a modern ERP administration panel built with Rust and WebAssembly.";

fn about_meta(url: Option<String>) -> MetaTags {
    MetaTags {
        title: Some("About Us - ERP Admin".into()),
        description: Some(DESCRIPTION.into()),
        keywords: Some("About ERP Admin, ERP System, Enterprise Resource Planning, Modern ERP".into()),
        author: Some("ERP Admin Team".into()),
        og_title: Some("About ERP Admin".into()),
        og_description: Some(DESCRIPTION.into()),
        og_image: Some("https://erp.example/og-about.jpg".into()),
        og_url: url,
        og_type: Some("website".into()),
        og_site_name: Some("ERP Admin".into()),
        twitter_card: Some("summary_large_image".into()),
        twitter_title: Some("About ERP Admin".into()),
        twitter_description: Some(DESCRIPTION.into()),
        twitter_image: Some("https://erp.example/twitter-about.jpg".into()),
        ..Default::default()
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let i18n = use_locale();
    let url = web_sys::window().and_then(|w| w.location().href().ok());
    let meta = about_meta(url);

    let feedback = RwSignal::new(String::new());
    let send = Callback::new(move |_| {
        let text = feedback.get_untracked();
        if !text.trim().is_empty() {
            log::info!("Feedback submitted ({} chars)", text.chars().count());
            feedback.set(String::new());
        }
    });

    view! {
        <DocumentMeta tags=meta/>
        <section class="page">
            <h1 class="page__title">{move || i18n.t("about.title")}</h1>
            <p class="page__lead">{move || i18n.t("about.description")}</p>

            <div class="card">
                <div class="card__content form">
                    <label class="form__label" for="feedback">{move || i18n.t("about.feedback")}</label>
                    <textarea
                        id="feedback"
                        class="form__textarea"
                        rows=4
                        placeholder=move || i18n.t("about.feedback.placeholder")
                        prop:value=move || feedback.get()
                        on:input=move |ev| feedback.set(event_target_value(&ev))
                    ></textarea>
                    <Button on_click=send>{move || i18n.t("about.send")}</Button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_meta_covers_every_family() {
        let entries = about_meta(Some("https://erp.example/about".into())).entries();
        let keys: Vec<_> = entries.iter().map(|e| e.key).collect();
        assert!(keys.contains(&"description"));
        assert!(keys.contains(&"og:url"));
        assert!(keys.contains(&"twitter:card"));
        assert!(!keys.contains(&"twitter:site"));
    }

    #[test]
    fn missing_url_drops_only_og_url() {
        let with = about_meta(Some("u".into())).entries().len();
        let without = about_meta(None).entries().len();
        assert_eq!(with, without + 1);
    }
}
