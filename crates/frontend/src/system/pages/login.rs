use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::system::auth::{api, context};

#[component]
pub fn LoginPage(
    /// Confirmation shown after a successful signup
    notice: Option<String>,
    on_signup: Rc<dyn Fn(())>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = context::use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val.clone(), password_val).await {
                Ok(response) => {
                    // switches the route guard over to the main layout
                    context::establish_session(set_auth_state, &email_val, response);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ToyMetrics"</h1>
                <h2>"Sistema de Gestão de Clientes"</h2>

                {notice.map(|message| view! { <div class="success-message">{message}</div> })}

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="login-footer">
                    <span>"Não tem uma conta? "</span>
                    <button class="btn-link" on:click=move |_| (on_signup)(())>
                        "Criar conta"
                    </button>
                </div>
            </div>
        </div>
    }
}
