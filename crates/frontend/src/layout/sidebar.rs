use super::Page;
use crate::shared::icons::icon;
use crate::system::auth::context::{self, use_auth};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let active_page = use_context::<RwSignal<Page>>().expect("Page context not found");
    let (auth_state, set_auth_state) = use_auth();

    let nav_item = move |page: Page, label: &'static str, icon_name: &'static str| {
        view! {
            <button
                class="sidebar__nav-item"
                class:sidebar__nav-item--active=move || active_page.get() == page
                on:click=move |_| active_page.set(page)
            >
                {icon(icon_name)}
                <span>{label}</span>
            </button>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1>"ToyMetrics"</h1>
            </div>

            <nav class="sidebar__nav">
                {nav_item(Page::Dashboard, "Dashboard", "dashboard")}
                {nav_item(Page::Customers, "Clientes", "customers")}
            </nav>

            <div class="sidebar__footer">
                <div class="sidebar__user">
                    {icon("user")}
                    <span>
                        {move || {
                            auth_state
                                .get()
                                .session
                                .map(|session| session.email)
                                .unwrap_or_default()
                        }}
                    </span>
                </div>
                <button
                    class="sidebar__nav-item"
                    on:click=move |_| context::logout(set_auth_state)
                >
                    {icon("logout")}
                    <span>"Sair"</span>
                </button>
            </div>
        </aside>
    }
}
