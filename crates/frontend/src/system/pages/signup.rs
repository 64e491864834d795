use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::system::auth::api;

#[component]
pub fn SignupPage(
    /// Called with the confirmation notice after the account is created
    on_registered: Rc<dyn Fn(String)>,
    on_back: Rc<dyn Fn(())>,
) -> impl IntoView {
    let form = RwSignal::new(RegisterRequest::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_registered_cb = on_registered.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = form.get();
        let on_registered = on_registered_cb.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    (on_registered)(
                        "Conta criada com sucesso! Faça login para continuar.".to_string(),
                    );
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
            <div class="login-box login-box--wide">
                <h1>"ToyMetrics"</h1>
                <h2>"Criar Nova Conta"</h2>

                <button class="btn-link" on:click=move |_| (on_back)(())>
                    "← Voltar para Login"
                </button>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="first_name">"Nome"</label>
                            <input
                                type="text"
                                id="first_name"
                                placeholder="Seu nome"
                                prop:value=move || form.get().first_name
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-group">
                            <label for="last_name">"Sobrenome"</label>
                            <input
                                type="text"
                                id="last_name"
                                placeholder="Seu sobrenome"
                                prop:value=move || form.get().last_name
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                                required
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="username">"Nome de Usuário"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="nomeusuario"
                            prop:value=move || form.get().username
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="seu@email.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="date_of_birth">"Data de Nascimento"</label>
                        <input
                            type="date"
                            id="date_of_birth"
                            prop:value=move || form.get().date_of_birth
                            on:input=move |ev| form.update(|f| f.date_of_birth = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••••••"
                            minlength="6"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            required
                        />
                        <small class="form-hint">"A senha deve ter pelo menos 6 caracteres"</small>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Criando conta..." } else { "Criar Conta" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
