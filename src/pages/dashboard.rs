//! Dashboard page showing the authenticated user with a sign-out control.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::feedback;
use crate::state::session::Session;

/// Dashboard page — redirects to `/login` once the initial check settles
/// with no user present.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        if !session.is_loading() && !session.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let busy = RwSignal::new(false);
    let sign_out_error = RwSignal::new(None::<String>);

    let sign_out_navigate = use_navigate();
    let on_sign_out = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        sign_out_error.set(None);

        let navigate = sign_out_navigate.clone();
        leptos::task::spawn_local(async move {
            match session.logout().await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => {
                    // The local user is kept: the server-side session may
                    // still be live, and the user can retry.
                    leptos::logging::warn!("sign out failed: {e}");
                    sign_out_error.set(Some(feedback::logout_error(&e)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-card">
                <h1>"Welcome to your Dashboard!"</h1>
                <p class="dashboard-card__hint">
                    "You have successfully authenticated with our system."
                </p>

                <section class="dashboard-card__section">
                    <h2>"User Information"</h2>
                    <dl class="user-info">
                        <dt>"Username"</dt>
                        <dd>{move || session.user().map(|u| u.username).unwrap_or_default()}</dd>
                        <dt>"Email"</dt>
                        <dd>{move || session.user().map(|u| u.email).unwrap_or_default()}</dd>
                        <dt>"User ID"</dt>
                        <dd>{move || session.user().map(|u| u.id).unwrap_or_default()}</dd>
                    </dl>
                </section>

                <section class="dashboard-card__section">
                    <h2>"Authentication Status"</h2>
                    <p class="dashboard-card__status">
                        "Your session token is stored in an HTTP-only cookie and is \
                         automatically sent with each request."
                    </p>
                </section>

                <Show when=move || sign_out_error.get().is_some()>
                    <p class="dashboard-card__error">
                        {move || sign_out_error.get().unwrap_or_default()}
                    </p>
                </Show>

                <button class="btn" on:click=on_sign_out disabled=move || busy.get()>
                    {move || if busy.get() { "Signing out..." } else { "Sign Out" }}
                </button>
            </div>
        </div>
    }
}
