use super::view_model::CustomerDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::customer::Customer;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CustomerDetails(
    customer: Option<Customer>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(customer);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();
    let is_edit = vm.is_edit_mode();

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>
                    {if is_edit { "Editar Cliente" } else { "Novo Cliente" }}
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="full_name">"Nome Completo"</label>
                    <input
                        type="text"
                        id="full_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().full_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.full_name = event_target_value(&ev));
                            }
                        }
                        placeholder="Digite o nome completo"
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.email = event_target_value(&ev));
                            }
                        }
                        placeholder="cliente@email.com"
                    />
                </div>

                <div class="form-group">
                    <label for="birth_date">"Data de Nascimento"</label>
                    <input
                        type="date"
                        id="birth_date"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().birth_date
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.birth_date = event_target_value(&ev));
                            }
                        }
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid() || vm.saving.get()
                    }
                >
                    {icon("save")}
                    {if is_edit { "Salvar" } else { "Criar" }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
