//! Authenticated dashboard shell: sidebar, header, conflict alert, stats, and
//! the active tab's content.
//!
//! DESIGN
//! ======
//! Tab content is chosen by `views::route`, which yields nothing until a
//! snapshot exists. A failure with no snapshot replaces the content with a
//! retryable error; a failure on top of an existing snapshot keeps the stale
//! data and shows the error as a banner.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::DashboardActions;
use crate::components::allocations_table::AllocationsTable;
use crate::components::conflict_alert::ConflictAlert;
use crate::components::error_message::ErrorMessage;
use crate::components::free_ips::FreeIps;
use crate::components::header::Header;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::notes_panel::NotesPanel;
use crate::components::overview::Overview;
use crate::components::pool_details::PoolDetails;
use crate::components::sidebar::Sidebar;
use crate::components::stats_cards::StatsCards;
use crate::state::dashboard::DashboardState;
use crate::state::ui::UiState;
use crate::views::{RoutedView, route};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let actions = expect_context::<DashboardActions>();

    let snapshot = Memo::new(move |_| dashboard.with(|d| d.snapshot.clone()));
    let tab = Memo::new(move |_| ui.with(|u| u.active_tab));
    let error = Memo::new(move |_| dashboard.with(|d| d.error.clone()));
    let alert_visible = Memo::new(move |_| dashboard.with(DashboardState::conflict_alert_visible));
    let first_load = Memo::new(move |_| dashboard.with(|d| d.loading && d.snapshot.is_none()));

    let content = move || {
        if first_load.get() {
            return view! { <LoadingSpinner message="Loading data..."/> }.into_any();
        }
        let Some(routed) = route(tab.get(), snapshot.get().as_ref()) else {
            return match error.get() {
                Some(message) => view! { <ErrorMessage message=message on_retry=actions.retry/> }.into_any(),
                None => view! {
                    <div class="main-card main-card--empty">
                        <p>"No data available. Please try refreshing."</p>
                    </div>
                }
                    .into_any(),
            };
        };

        let stats = view! { <StatsCards snapshot=Arc::clone(routed.snapshot())/> };
        let body = match routed {
            RoutedView::Overview(s) => view! { <Overview snapshot=s/> }.into_any(),
            RoutedView::Allocations(s) => view! { <AllocationsTable snapshot=s/> }.into_any(),
            RoutedView::Free(s) => view! { <FreeIps snapshot=s/> }.into_any(),
            RoutedView::Pools(s) => view! { <PoolDetails snapshot=s/> }.into_any(),
        };
        view! {
            {stats}
            <div class="main-card">{body}</div>
        }
            .into_any()
    };

    let banner = move || {
        let message = error.get()?;
        snapshot.with(Option::is_some).then(|| view! { <ErrorMessage message=message on_retry=actions.retry/> })
    };

    let alert = move || {
        if !alert_visible.get() {
            return None;
        }
        snapshot.get().map(|s| view! { <ConflictAlert snapshot=s/> })
    };

    view! {
        <div class="app">
            <Sidebar/>
            <div class="main-content" class:main-content--collapsed=move || ui.with(|u| u.sidebar_collapsed)>
                <Header/>
                {alert}
                {banner}
                <div class="content-wrapper">{content}</div>
            </div>
            <Show when=move || ui.with(|u| u.notes_open)>
                <NotesPanel/>
            </Show>
        </div>
    }
}

