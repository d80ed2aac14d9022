//! Top bar: mobile menu toggle, title, conflict indicator, last update,
//! signed-in user, and the notes/refresh/logout controls.

use leptos::prelude::*;

use crate::app::DashboardActions;
use crate::state::dashboard::DashboardState;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::time::{format_local_time, format_time, relative_time};

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let actions = expect_context::<DashboardActions>();

    let refreshing = move || dashboard.get().refreshing;
    let conflict_count = move || dashboard.get().conflict_count();
    let last_update = move || dashboard.get().snapshot.and_then(|s| s.last_update.clone());
    let user = move || session.get().current_user().map(str::to_owned);

    let toggle_mobile = move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);
    let toggle_notes = move |_| {
        let opening = !ui.get_untracked().notes_open;
        ui.update(|u| u.notes_open = opening);
        if opening {
            actions.load_notes.run(());
        }
    };

    view! {
        <header class="app-header">
            <div class="app-header__left">
                <button class="app-header__menu" on:click=toggle_mobile>
                    {move || if ui.get().mobile_menu_open { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <div class="app-header__title">
                    <h1>"IP Address Management"</h1>
                    <p class="app-header__subtitle">
                        {move || {
                            let tab = ui.get().active_tab;
                            format!("VMware vCloud Director \u{00B7} {}", tab.label())
                        }}
                    </p>
                </div>
            </div>
            <div class="app-header__right">
                <Show when=move || dashboard.get().has_conflicts>
                    <button
                        class="app-header__conflicts"
                        title=move || format!("{} IP conflicts detected", conflict_count())
                        on:click=move |_| actions.toggle_conflicts.run(())
                    >
                        <span class="app-header__conflicts-icon">"\u{26A0}"</span>
                        <span>{conflict_count}</span>
                    </button>
                </Show>
                {move || {
                    last_update()
                        .map(|raw| {
                            let hint = format!(
                                "{} ({})",
                                format_local_time(&raw),
                                relative_time(&raw, chrono::Utc::now()),
                            );
                            view! {
                                <div class="app-header__updated" title=hint>
                                    {format!("Updated: {}", format_time(&raw))}
                                </div>
                            }
                        })
                }}
                {move || {
                    user()
                        .map(|name| {
                            view! {
                                <div class="app-header__user">
                                    <span class="app-header__user-icon">"\u{1F464}"</span>
                                    <span class="app-header__user-name">{name}</span>
                                </div>
                            }
                        })
                }}
                <button
                    class="app-header__notes"
                    class:app-header__notes--active=move || ui.get().notes_open
                    on:click=toggle_notes
                >
                    "Notes"
                </button>
                <button
                    class="app-header__refresh"
                    class:app-header__refresh--spinning=refreshing
                    disabled=refreshing
                    on:click=move |_| actions.refresh.run(())
                >
                    {move || if refreshing() { "Refreshing..." } else { "Refresh" }}
                </button>
                <button class="app-header__logout" title="Sign out" on:click=move |_| actions.logout.run(())>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
