pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Admin shell:
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |   routed page    |
/// +------------------------------+
/// ```
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::left::Left>
                    <left::sidebar::Sidebar />
                </left::left::Left>
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
