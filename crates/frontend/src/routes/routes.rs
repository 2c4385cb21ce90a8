use super::lang::LangGuard;
use crate::layout::AdminLayout;
use crate::pages::{
    about::AboutPage, admin::AdminPage, auth::AuthPage, dashboard::DashboardPage, home::HomePage,
    not_found::NotFoundPage, products::ProductsPage, test::TestPage, users::UsersPage,
};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Route table. Static paths are declared before `/:lang` so that e.g.
/// `/users` never reaches the language guard.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/auth") view=AuthPage />
                <ParentRoute path=path!("") view=AdminLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route path=path!("users") view=UsersPage />
                    <Route path=path!("products") view=ProductsPage />
                    <Route path=path!("admin") view=AdminPage />
                    <Route path=path!("about") view=AboutPage />
                    <Route path=path!("test") view=TestPage />
                </ParentRoute>
                <ParentRoute path=path!("/:lang") view=LangGuard>
                    <Route path=path!("auth") view=AuthPage />
                    <ParentRoute path=path!("") view=AdminLayout>
                        <Route path=path!("") view=HomePage />
                        <Route path=path!("test") view=TestPage />
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
