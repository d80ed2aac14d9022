//! Address chip that copies itself to the clipboard on click.

use std::time::Duration;

use leptos::prelude::*;

use crate::util::browser::copy_to_clipboard;

/// How long the "Copied" confirmation stays visible.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1500);

/// Raise `flag` and drop it again after [`COPIED_FEEDBACK`].
pub fn flash_copied(flag: RwSignal<bool>) {
    flag.set(true);
    #[cfg(feature = "csr")]
    set_timeout(move || flag.set(false), COPIED_FEEDBACK);
}

#[component]
pub fn CopyableIp(#[prop(into)] ip: String, #[prop(optional)] compact: bool) -> impl IntoView {
    let copied = RwSignal::new(false);
    let label = ip.clone();

    let on_click = move |_| {
        if copy_to_clipboard(&ip) {
            flash_copied(copied);
        }
    };

    view! {
        <button
            class="copyable-ip"
            class:copyable-ip--compact=compact
            class:copyable-ip--copied=move || copied.get()
            title="Click to copy"
            on:click=on_click
        >
            <span class="copyable-ip__address">{label}</span>
            <span class="copyable-ip__icon">{move || if copied.get() { "\u{2713}" } else { "\u{29C9}" }}</span>
        </button>
    }
}
