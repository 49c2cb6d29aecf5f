//! Sign-in form.

use dioxus::prelude::*;

use crate::{use_api, use_session};

#[component]
pub fn LoginPage() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already signed in: go home
    let current = session.clone();
    use_effect(move || {
        if let Some(existing) = current.current() {
            nav.replace(existing.role.home_path());
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email().trim().to_string();
        let secret = password();
        if address.is_empty() || secret.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match api.login(&address, &secret).await {
                Ok(signed_in) => {
                    let home = signed_in.role.home_path();
                    session.sign_in(signed_in);
                    nav.replace(home);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page-container login-page",
            div { class: "card login-card",
                h1 { class: "page-title", "Sign in" }

                if let Some(err) = error() {
                    div { class: "error-banner", role: "alert",
                        span { "{err}" }
                    }
                }

                form { class: "form", onsubmit: on_submit,
                    div { class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
