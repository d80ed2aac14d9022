//! Centered spinner with a status line.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__message">{message}</p>
        </div>
    }
}
