use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::{LoginPage, SignupPage};
use leptos::prelude::*;
use std::rc::Rc;

/// Which unauthenticated screen is visible. Login optionally carries the
/// post-signup confirmation notice.
#[derive(Clone, PartialEq)]
enum AuthScreen {
    Login { notice: Option<String> },
    Signup,
}

#[component]
fn AuthScreens() -> impl IntoView {
    let (screen, set_screen) = signal(AuthScreen::Login { notice: None });

    move || match screen.get() {
        AuthScreen::Login { notice } => {
            let on_signup: Rc<dyn Fn(())> =
                Rc::new(move |_: ()| set_screen.set(AuthScreen::Signup));
            view! { <LoginPage notice=notice on_signup=on_signup /> }.into_any()
        }
        AuthScreen::Signup => {
            let on_registered: Rc<dyn Fn(String)> = Rc::new(move |message: String| {
                set_screen.set(AuthScreen::Login {
                    notice: Some(message),
                })
            });
            let on_back: Rc<dyn Fn(())> =
                Rc::new(move |_: ()| set_screen.set(AuthScreen::Login { notice: None }));
            view! { <SignupPage on_registered=on_registered on_back=on_back /> }.into_any()
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <AuthScreens /> }
        >
            <Shell />
        </Show>
    }
}
