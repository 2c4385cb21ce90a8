use crate::shared::components::PageHeader;
use crate::shared::formatters::use_formatters;
use crate::shared::locale::use_locale;
use crate::shared::mock_data;
use leptos::prelude::*;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let i18n = use_locale();
    let fmt = use_formatters();
    let products = mock_data::products();

    view! {
        <section class="page">
            <PageHeader title=Signal::derive(move || i18n.t("products.title"))/>
            <table class="table">
                <thead>
                    <tr>
                        <th>{move || i18n.t("products.id")}</th>
                        <th>{move || i18n.t("products.name")}</th>
                        <th>{move || i18n.t("products.category")}</th>
                        <th class="table__numeric">{move || i18n.t("products.price")}</th>
                        <th class="table__numeric">{move || i18n.t("products.stock")}</th>
                    </tr>
                </thead>
                <tbody>
                    {products.into_iter().map(|product| {
                        let price = product.price;
                        view! {
                            <tr>
                                <td>{product.id}</td>
                                <td>{product.name}</td>
                                <td>{product.category}</td>
                                <td class="table__numeric">{move || fmt().currency(price)}</td>
                                <td class="table__numeric">{product.stock}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
