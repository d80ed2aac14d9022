//! Sign-in screen for both login strategies.
//!
//! Direct mode shows a username/password form; OIDC mode shows a single
//! button that redirects to the identity provider. Either way the session
//! error (bad credentials, failed code exchange) is shown above the controls.

use leptos::prelude::*;

use crate::app::DashboardActions;
use crate::config::DashboardConfig;
use crate::services::auth_strategy::validate_credentials;
use crate::state::session::Session;
use crate::state::ui::UiState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let actions = expect_context::<DashboardActions>();
    let direct = expect_context::<DashboardConfig>().strategy().uses_credentials();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let busy = move || ui.get().signing_in;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => {
                info.set(None);
                actions.login.run(credentials);
            }
            Err(message) => info.set(Some(message.to_owned())),
        }
    };

    let message = move || info.get().or_else(|| session.get().error().map(str::to_owned));

    let controls = if direct {
        view! {
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=busy>
                    {move || if busy() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        }
            .into_any()
    } else {
        view! {
            <button class="login-button login-button--sso" on:click=move |_| actions.start_sso.run(())>
                "Sign in with SSO"
            </button>
        }
            .into_any()
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"VCD IP Manager"</h1>
                <p class="login-card__subtitle">"IP address management for vCloud Director"</p>
                {move || message().map(|text| view! { <div class="login-card__error" role="alert">{text}</div> })}
                {controls}
            </div>
        </div>
    }
}
