use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::PageHeader;
use crate::shared::locale::use_locale;
use crate::shared::mock_data;
use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    let i18n = use_locale();
    let users = mock_data::users();

    view! {
        <section class="page">
            <PageHeader title=Signal::derive(move || i18n.t("users.title"))/>
            <table class="table">
                <thead>
                    <tr>
                        <th>{move || i18n.t("users.name")}</th>
                        <th>{move || i18n.t("users.email")}</th>
                        <th>{move || i18n.t("users.role")}</th>
                        <th>{move || i18n.t("users.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {users.into_iter().map(|user| {
                        let variant = if user.role.is_privileged() { "primary" } else { "neutral" };
                        view! {
                            <tr>
                                <td>{user.name}</td>
                                <td>{user.email}</td>
                                <td><Badge variant=variant>{user.role.as_str()}</Badge></td>
                                <td class="table__actions">
                                    <Button variant="outline" size="sm">{move || i18n.t("users.edit")}</Button>
                                    <Button variant="ghost" size="sm">{move || i18n.t("users.delete")}</Button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
