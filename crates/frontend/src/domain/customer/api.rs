//! Customer CRUD gateway. Each operation wraps any transport, status or
//! parse failure into one human-readable message; the bearer credential
//! is attached to every call.

use contracts::domain::customer::aggregate::CustomerWrite;
use contracts::domain::customer::{Customer, CustomerDto, CustomerFilters, CustomersEnvelope, Sale};
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::api_utils::{api_url, authorize};

fn fail<E: std::fmt::Display>(message: &str, err: E) -> String {
    log::warn!("{message}: {err}");
    message.to_string()
}

/// Fetch the customer directory, normalized. Filters become query
/// parameters understood by the backend (`name`, `email`).
pub async fn list_customers(filters: &CustomerFilters) -> Result<Vec<Customer>, String> {
    const MSG: &str = "Erro ao carregar clientes";

    let mut url = api_url("/customers");
    if !filters.is_empty() {
        let query = serde_qs::to_string(filters).map_err(|e| fail(MSG, e))?;
        url = format!("{url}?{query}");
    }

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| fail(MSG, e))?;

    if !response.ok() {
        return Err(fail(MSG, format!("HTTP {}", response.status())));
    }

    let envelope = response
        .json::<CustomersEnvelope>()
        .await
        .map_err(|e| fail(MSG, e))?;

    Ok(envelope.into_customers())
}

/// Backend response to a create; only the assigned id matters here.
#[derive(Debug, Deserialize)]
struct CreatedCustomer {
    #[serde(default)]
    id: Option<Value>,
}

/// Create a customer and assemble its canonical record locally (the
/// backend-assigned id wins when present).
pub async fn create_customer(dto: &CustomerDto) -> Result<Customer, String> {
    const MSG: &str = "Erro ao criar cliente";

    let response = authorize(Request::post(&api_url("/customers")))
        .json(&CustomerWrite::from(dto))
        .map_err(|e| fail(MSG, e))?
        .send()
        .await
        .map_err(|e| fail(MSG, e))?;

    if !response.ok() {
        return Err(fail(MSG, format!("HTTP {}", response.status())));
    }

    let created = response
        .json::<CreatedCustomer>()
        .await
        .map_err(|e| fail(MSG, e))?;

    let id = created.id.and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });

    Ok(Customer::created(id, dto))
}

/// Patch a customer and return the merged record (sales are retained
/// from the caller, the backend does not echo them).
pub async fn update_customer(
    id: String,
    dto: &CustomerDto,
    sales: Vec<Sale>,
) -> Result<Customer, String> {
    const MSG: &str = "Erro ao atualizar cliente";

    let response = authorize(Request::patch(&api_url(&format!("/customers/{id}"))))
        .json(&CustomerWrite::from(dto))
        .map_err(|e| fail(MSG, e))?
        .send()
        .await
        .map_err(|e| fail(MSG, e))?;

    if !response.ok() {
        return Err(fail(MSG, format!("HTTP {}", response.status())));
    }

    Ok(Customer::with_updates(id, dto, sales))
}

pub async fn delete_customer(id: &str) -> Result<(), String> {
    const MSG: &str = "Erro ao deletar cliente";

    let response = authorize(Request::delete(&api_url(&format!("/customers/{id}"))))
        .send()
        .await
        .map_err(|e| fail(MSG, e))?;

    if !response.ok() {
        return Err(fail(MSG, format!("HTTP {}", response.status())));
    }

    Ok(())
}
