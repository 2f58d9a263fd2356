//! Login page: email/password form submitting through the session context.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field::TextField;
use crate::net::types::LoginData;
use crate::pages::feedback;
use crate::state::session::Session;

/// Login page — navigates to `/dashboard` on success, shows inline error
/// text on failure. The busy flag suppresses repeated submits until the
/// in-flight attempt settles.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        let data = LoginData {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(data).await {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(e) => error.set(Some(feedback::login_error(&e))),
            }
            // Cleared on every outcome so the form never wedges.
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__hint">
                    "Enter your email and password to sign in to your account"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                    />
                    <TextField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
