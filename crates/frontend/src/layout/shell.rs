use super::sidebar::Sidebar;
use super::Page;
use crate::dashboards::sales_summary::ui::SalesDashboard;
use crate::domain::customer::ui::list::CustomerList;
use leptos::prelude::*;

#[component]
pub fn Shell() -> impl IntoView {
    // Navigation state shared with the sidebar via context.
    let active_page = RwSignal::new(Page::Dashboard);
    provide_context(active_page);

    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-shell__content">
                {move || match active_page.get() {
                    Page::Dashboard => view! { <SalesDashboard /> }.into_any(),
                    Page::Customers => view! { <CustomerList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
