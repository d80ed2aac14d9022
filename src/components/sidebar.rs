//! Collapsible navigation sidebar with one entry per tab.
//!
//! On narrow screens the sidebar is an overlay drawer driven by
//! `UiState::mobile_menu_open`; choosing a tab closes it.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::ui::{Tab, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let collapsed = move || ui.get().sidebar_collapsed;
    let has_conflicts = move || dashboard.get().has_conflicts;

    let toggle_collapse = move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);
    let close_mobile = move |_| ui.update(|u| u.mobile_menu_open = false);

    let items = Tab::ALL
        .into_iter()
        .map(|tab| {
            let active = move || ui.get().active_tab == tab;
            view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=active
                    title=tab.label()
                    on:click=move |_| ui.update(|u| u.select_tab(tab))
                >
                    <span class=format!("sidebar__item-icon sidebar__item-icon--{}", tab.id())></span>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__item-text">
                            <span class="sidebar__item-label">{tab.label()}</span>
                            <span class="sidebar__item-description">{tab.description()}</span>
                        </span>
                    </Show>
                    <Show when=move || tab == Tab::Overview && has_conflicts()>
                        <span class="sidebar__badge" title="IP conflicts detected">"!"</span>
                    </Show>
                </button>
            }
        })
        .collect_view();

    view! {
        <Show when=move || ui.get().mobile_menu_open>
            <div class="mobile-overlay" on:click=close_mobile></div>
        </Show>
        <aside
            class="sidebar"
            class:sidebar--collapsed=collapsed
            class:sidebar--mobile-open=move || ui.get().mobile_menu_open
        >
            <div class="sidebar__header">
                <Show when=move || !collapsed()>
                    <div class="sidebar__logo">
                        <span class="sidebar__logo-title">"VCD Manager"</span>
                        <span class="sidebar__logo-subtitle">"IP Management"</span>
                    </div>
                </Show>
                <button class="sidebar__toggle" on:click=toggle_collapse>
                    {move || if collapsed() { "\u{25B6}" } else { "\u{25C0}" }}
                </button>
                <button class="sidebar__close" on:click=close_mobile>
                    "\u{2715}"
                </button>
            </div>
            <nav class="sidebar__nav">
                <Show when=move || !collapsed()>
                    <div class="sidebar__section">"Navigation"</div>
                </Show>
                {items}
            </nav>
        </aside>
    }
}
