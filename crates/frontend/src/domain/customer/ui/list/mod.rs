use crate::domain::customer::api;
use crate::domain::customer::ui::details::CustomerDetails;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_brl;
use contracts::domain::customer::{Customer, CustomerFilters};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub birth_date: String,
    pub sales_count: usize,
    pub sales_total: String,
    pub missing_letter: String,
    /// Retained for the edit form (sales survive a patch).
    pub source: Customer,
}

impl From<Customer> for CustomerRow {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.clone(),
            full_name: customer.full_name.clone(),
            email: customer.email.clone(),
            birth_date: format_date(&customer.birth_date),
            sales_count: customer.sales.len(),
            sales_total: format_brl(customer.total_sales()),
            missing_letter: customer.missing_letter.to_string(),
            source: customer,
        }
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CustomerRow>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (name_filter, set_name_filter) = signal(String::new());
    let (email_filter, set_email_filter) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Customer>>(None);

    let fetch = move || {
        let filters = CustomerFilters {
            name: Some(name_filter.get_untracked()).filter(|s| !s.is_empty()),
            email: Some(email_filter.get_untracked()).filter(|s| !s.is_empty()),
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_customers(&filters).await {
                Ok(customers) => {
                    let rows: Vec<CustomerRow> = customers.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // Initial load plus refetch whenever a filter changes.
    Effect::new(move |_| {
        name_filter.track();
        email_filter.track();
        fetch();
    });

    let handle_create_new = move || {
        set_editing.set(None);
        set_show_form.set(true);
    };

    let handle_edit = move |customer: Customer| {
        set_editing.set(Some(customer));
        set_show_form.set(true);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Tem certeza que deseja excluir este cliente?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_customer(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    move || {
        if show_form.get() {
            let on_saved: Rc<dyn Fn(())> = Rc::new(move |_: ()| {
                set_show_form.set(false);
                set_editing.set(None);
                fetch();
            });
            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_: ()| {
                set_show_form.set(false);
                set_editing.set(None);
            });
            return view! {
                <CustomerDetails
                    customer=editing.get()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any();
        }

        view! {
            <div class="page">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">"Clientes"</h1>
                        <p class="header__subtitle">"Gerencie os clientes da loja de brinquedos"</p>
                    </div>
                    <div class="header__actions">
                        <button class="button button--primary" on:click=move |_| handle_create_new()>
                            {icon("plus")}
                            "Novo Cliente"
                        </button>
                    </div>
                </div>

                <div class="filter-panel">
                    <div class="form-group">
                        <label for="filter_name">{icon("search")} "Filtrar por Nome"</label>
                        <input
                            type="text"
                            id="filter_name"
                            placeholder="Digite o nome..."
                            prop:value=move || name_filter.get()
                            on:input=move |ev| set_name_filter.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="filter_email">{icon("search")} "Filtrar por Email"</label>
                        <input
                            type="email"
                            id="filter_email"
                            placeholder="Digite o email..."
                            prop:value=move || email_filter.get()
                            on:input=move |ev| set_email_filter.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="error-message">{e}</div>
                })}

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"Carregando..."</div> }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Cliente"</th>
                                    <th class="table__header-cell">"Contato"</th>
                                    <th class="table__header-cell">"Vendas"</th>
                                    <th class="table__header-cell">"Letra Faltante"</th>
                                    <th class="table__header-cell table__header-cell--actions">"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || items.get().into_iter().map(|row| {
                                    let edit_source = row.source.clone();
                                    let delete_id = row.id.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <div class="table__cell-title">{row.full_name}</div>
                                                <small class="table__cell-muted">
                                                    {format!("Nascimento: {}", row.birth_date)}
                                                </small>
                                            </td>
                                            <td class="table__cell">{row.email}</td>
                                            <td class="table__cell">
                                                <div>{format!("{} compras", row.sales_count)}</div>
                                                <small class="table__cell-muted">
                                                    {format!("Total: {}", row.sales_total)}
                                                </small>
                                            </td>
                                            <td class="table__cell">
                                                {icon("tag")}
                                                <span class="badge">{row.missing_letter}</span>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--secondary button--small"
                                                    title="Editar"
                                                    on:click=move |_| handle_edit(edit_source.clone())
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    title="Excluir"
                                                    on:click=move |_| handle_delete(delete_id.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>

                        <Show when=move || items.get().is_empty()>
                            <div class="empty-state">
                                <h3>"Nenhum cliente encontrado"</h3>
                                <p>
                                    {move || {
                                        let filtered = !name_filter.get().is_empty()
                                            || !email_filter.get().is_empty();
                                        if filtered {
                                            "Tente ajustar os filtros."
                                        } else {
                                            "Comece adicionando um novo cliente."
                                        }
                                    }}
                                </p>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        }
        .into_any()
    }
}
