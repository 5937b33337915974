//! Sign-in form. Success persists the session and hands navigation back to
//! the platform wrapper.

use dioxus::prelude::*;

use crate::auth::complete_login;
use crate::components::{Button, ButtonVariant, Input};
use crate::{use_api, use_auth};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let client = use_api();
    let auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let p = password();

            if u.is_empty() {
                error.set(Some("Please enter your username".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match client.login(&u, &p).await {
                Ok(response) => {
                    complete_login(auth, &client, response);
                    on_success.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "login-page",

            h1 { class: "login-brand", "DealDeck" }
            p { class: "login-tagline", "Sign in to the operations dashboard" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-errors", "{err}" }
                }

                Input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
