//! Registration page: username/email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field::TextField;
use crate::net::types::RegisterData;
use crate::pages::feedback;
use crate::state::session::Session;

/// Registration page — same submit shape as login; a successful signup
/// authenticates immediately and lands on the dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
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

        let data = RegisterData {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(data).await {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(e) => error.set(Some(feedback::register_error(&e))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-card__hint">
                    "Enter a username, email, and password to get started"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Username"
                        name="username"
                        placeholder="Choose a username"
                        value=username
                    />
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
                        placeholder="Choose a password"
                        value=password
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
