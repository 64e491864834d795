use contracts::system::auth::{ApiMessage, LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Authenticate with email and password. Every transport or status
/// failure collapses into the single invalid-credentials message.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| invalid_credentials("serialize", e))?
        .send()
        .await
        .map_err(|e| invalid_credentials("request", e))?;

    if !response.ok() {
        return Err(invalid_credentials(
            "status",
            format!("HTTP {}", response.status()),
        ));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| invalid_credentials("parse", e))
}

fn invalid_credentials<E: std::fmt::Display>(stage: &str, err: E) -> String {
    log::warn!("login failed ({stage}): {err}");
    "Credenciais inválidas".to_string()
}

/// Create a new account. A validation failure surfaces the
/// backend-supplied message when the error body carries one.
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/auth/register"))
        .json(request)
        .map_err(|e| register_failed("serialize", e))?
        .send()
        .await
        .map_err(|e| register_failed("request", e))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiMessage>(&body) {
        Ok(api_message) => {
            log::warn!("register rejected (HTTP {status}): {}", api_message.message);
            Err(api_message.message)
        }
        Err(_) => Err(register_failed("status", format!("HTTP {status}"))),
    }
}

fn register_failed<E: std::fmt::Display>(stage: &str, err: E) -> String {
    log::warn!("register failed ({stage}): {err}");
    "Erro ao criar conta".to_string()
}
