use contracts::domain::customer::{Customer, CustomerDto};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::customer::api;

/// ViewModel for the customer details form
#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    editing: Option<Customer>,
}

impl CustomerDetailsViewModel {
    pub fn new(editing: Option<Customer>) -> Self {
        let form = RwSignal::new(match &editing {
            Some(customer) => CustomerDto {
                full_name: customer.full_name.clone(),
                email: customer.email.clone(),
                birth_date: customer.birth_date.clone(),
            },
            None => CustomerDto::default(),
        });

        Self {
            form,
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            editing,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        let f = self.form.get();
        !f.full_name.trim().is_empty()
            && !f.email.trim().is_empty()
            && !f.birth_date.trim().is_empty()
    }

    /// Save form data to the server, then hand control back to the list.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let dto = self.form.get();

        if dto.full_name.trim().is_empty() {
            self.error
                .set(Some("Nome completo é obrigatório".to_string()));
            return;
        }
        if dto.email.trim().is_empty() {
            self.error.set(Some("Email é obrigatório".to_string()));
            return;
        }
        if dto.birth_date.trim().is_empty() {
            self.error
                .set(Some("Data de nascimento é obrigatória".to_string()));
            return;
        }

        let editing = self.editing.clone();
        let error = self.error;
        let saving = self.saving;

        saving.set(true);
        spawn_local(async move {
            let result = match editing {
                Some(existing) => {
                    api::update_customer(existing.id.clone(), &dto, existing.sales.clone())
                        .await
                        .map(|_| ())
                }
                None => api::create_customer(&dto).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
