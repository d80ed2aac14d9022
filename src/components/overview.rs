//! Overview tab: used-address distribution by cloud plus per-cloud pool cards.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::DashboardSnapshot;
use crate::views::overview::{CloudCard, cloud_cards, cloud_slices};
use crate::views::stats::{format_count, format_percent};

#[component]
pub fn Overview(snapshot: Arc<DashboardSnapshot>) -> impl IntoView {
    let slices = cloud_slices(&snapshot)
        .into_iter()
        .map(|slice| {
            view! {
                <div class="distribution__row">
                    <span class="distribution__name">{slice.name}</span>
                    <div class="distribution__bar">
                        <div class="distribution__fill" style=format!("width: {:.1}%", slice.share)></div>
                    </div>
                    <span class="distribution__value">
                        {format!("{} / {} ({})", format_count(slice.used), format_count(slice.total), format_percent(slice.share))}
                    </span>
                </div>
            }
        })
        .collect_view();

    let cards = cloud_cards(&snapshot).into_iter().map(cloud_card).collect_view();

    view! {
        <div class="overview">
            <section class="overview__section">
                <h2>"IP Usage by Cloud"</h2>
                <div class="distribution">{slices}</div>
            </section>
            <section class="overview__section">
                <h2>"Clouds"</h2>
                <div class="cloud-grid">{cards}</div>
            </section>
        </div>
    }
}

fn cloud_card(card: CloudCard) -> impl IntoView {
    let pools = card
        .pools
        .into_iter()
        .map(|pool| {
            view! {
                <div class="cloud-card__pool">
                    <div class="cloud-card__pool-head">
                        <span class="cloud-card__pool-name">{pool.name.clone()}</span>
                        <span class=format!("cloud-card__pool-percent {}", pool.level.class())>
                            {format_percent(pool.percentage)}
                        </span>
                    </div>
                    <div class="cloud-card__bar">
                        <div
                            class=format!("cloud-card__fill {}", pool.level.class())
                            style=format!("width: {:.1}%", pool.bar_width())
                        ></div>
                    </div>
                    <div class="cloud-card__pool-meta">
                        {format!("{} used \u{00B7} {} free \u{00B7} {}", format_count(pool.used), format_count(pool.free), pool.network)}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="cloud-card">
            <div class="cloud-card__header">
                <h3>{card.name}</h3>
                <span class="cloud-card__summary">
                    {format!("{} pools \u{00B7} {} IPs", card.total_pools, format_count(card.total_ips))}
                </span>
            </div>
            <div class="cloud-card__pools">{pools}</div>
        </div>
    }
}
