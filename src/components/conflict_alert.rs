//! Dismissible alert listing addresses claimed by more than one cloud.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::DashboardActions;
use crate::net::types::DashboardSnapshot;
use crate::views::conflicts::{ConflictEntry, conflict_entries};

#[component]
pub fn ConflictAlert(snapshot: Arc<DashboardSnapshot>) -> impl IntoView {
    let actions = expect_context::<DashboardActions>();
    let entries = conflict_entries(&snapshot);
    let count = entries.len();

    view! {
        <div class="conflict-alert" role="alert">
            <div class="conflict-alert__header">
                <span class="conflict-alert__icon">"\u{26A0}"</span>
                <h3>{format!("IP conflicts detected: {count}")}</h3>
                <button
                    class="conflict-alert__close"
                    title="Dismiss"
                    on:click=move |_| actions.dismiss_conflicts.run(())
                >
                    "\u{2715}"
                </button>
            </div>
            <p class="conflict-alert__hint">
                "The following addresses are allocated in more than one cloud:"
            </p>
            <div class="conflict-alert__list">{entries.into_iter().map(conflict_entry).collect_view()}</div>
        </div>
    }
}

fn conflict_entry(entry: ConflictEntry) -> impl IntoView {
    let details = entry
        .details
        .into_iter()
        .map(|detail| {
            let clouds = detail
                .clouds
                .into_iter()
                .map(|cloud| view! { <span class="conflict-alert__cloud">{cloud}</span> })
                .collect_view();
            view! {
                <div class="conflict-alert__detail">
                    <div class="conflict-alert__clouds">{clouds}</div>
                    <div class="conflict-alert__meta">
                        <span class="conflict-alert__label">"Organizations: "</span>
                        {detail.organizations}
                    </div>
                    <div class="conflict-alert__meta">
                        <span class="conflict-alert__label">"Pools: "</span>
                        {detail.pools}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="conflict-alert__entry">
            <span class="conflict-alert__ip mono">{entry.ip}</span>
            {details}
        </div>
    }
}
