//! Error banner with an optional retry button.

use leptos::prelude::*;

/// Shows `message`; renders a retry button when `on_retry` is supplied.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String, #[prop(optional)] on_retry: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <span class="error-message__icon">"\u{26A0}"</span>
            <p class="error-message__text">{message}</p>
            {on_retry.map(|retry| {
                view! {
                    <button class="error-message__retry" on:click=move |_| retry.run(())>
                        "Retry"
                    </button>
                }
            })}
        </div>
    }
}
