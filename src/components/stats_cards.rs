//! Headline totals shown above every tab.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::DashboardSnapshot;
use crate::views::stats::{format_percent, stat_cards};

#[component]
pub fn StatsCards(snapshot: Arc<DashboardSnapshot>) -> impl IntoView {
    let cards = stat_cards(&snapshot)
        .into_iter()
        .map(|card| {
            let usage = card.usage.map(|(percentage, level)| {
                view! {
                    <div class="stat-card__usage">
                        <div class="stat-card__bar">
                            <div
                                class=format!("stat-card__fill {}", level.class())
                                style=format!("width: {:.1}%", percentage.clamp(0.0, 100.0))
                            ></div>
                        </div>
                        <span class="stat-card__percent">{format_percent(percentage)}</span>
                    </div>
                }
            });
            view! {
                <div class=format!("stat-card stat-{}", card.accent)>
                    <div class="stat-card__label">{card.label}</div>
                    <div class="stat-card__value">{card.value}</div>
                    {usage}
                </div>
            }
        })
        .collect_view();

    view! { <div class="stats-grid">{cards}</div> }
}
