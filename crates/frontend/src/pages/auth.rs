use crate::shared::components::ui::Button;
use crate::shared::locale::use_locale;
use contracts::system::auth::{validate_password, validate_username, LoginCredentials};
use leptos::prelude::*;

/// Login form. Submission only logs and alerts; no session is created.
#[component]
pub fn AuthPage() -> impl IntoView {
    let i18n = use_locale();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    // Field errors stay hidden until the field is edited or a submit is
    // attempted.
    let username_touched = RwSignal::new(false);
    let password_touched = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let username_error = move || {
        username_touched
            .get()
            .then(|| validate_username(&username.get()))
            .flatten()
    };
    let password_error = move || {
        password_touched
            .get()
            .then(|| validate_password(&password.get()))
            .flatten()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        username_touched.set(true);
        password_touched.set(true);

        let credentials = LoginCredentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if !credentials.is_valid() {
            return;
        }

        submitting.set(true);
        log::info!("Login credentials submitted for '{}'", credentials.username);
        let message = i18n.t_with("auth.loggingIn", &[("username", credentials.username.as_str())]);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
        submitting.set(false);
    };

    view! {
        <div class="login-container">
            <div class="login-box card">
                <div class="card__header">
                    <h1 class="card__title">{move || i18n.t("auth.title")}</h1>
                    <p class="card__description">{move || i18n.t("auth.description")}</p>
                </div>

                <form class="form" on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="username">{move || i18n.t("auth.username")}</label>
                        <input
                            type="text"
                            id="username"
                            class="form__input"
                            placeholder=move || i18n.t("auth.username.placeholder")
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                username_touched.set(true);
                            }
                            disabled=move || submitting.get()
                        />
                        {move || username_error().map(|e| view! { <p class="form__error">{e}</p> })}
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">{move || i18n.t("auth.password")}</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            placeholder=move || i18n.t("auth.password.placeholder")
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_touched.set(true);
                            }
                            disabled=move || submitting.get()
                        />
                        {move || password_error().map(|e| view! { <p class="form__error">{e}</p> })}
                    </div>

                    <Button button_type="submit" class="form__submit" disabled=Signal::derive(move || submitting.get())>
                        {move || if submitting.get() { i18n.t("auth.submitting") } else { i18n.t("auth.submit") }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
