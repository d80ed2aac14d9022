//! Pools tab: stacked usage bars for every pool and per-cloud pool tables.
//!
//! Bars are plain CSS widths scaled against the largest pool, so no chart
//! library is involved.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::DashboardSnapshot;
use crate::views::pools::{CloudPoolTable, chart_rows, chart_scale, cloud_tables};
use crate::views::stats::{format_count, format_percent, percentage};

#[component]
pub fn PoolDetails(snapshot: Arc<DashboardSnapshot>) -> impl IntoView {
    let rows = chart_rows(&snapshot);
    let scale = chart_scale(&rows);
    let bars = rows
        .into_iter()
        .map(|row| {
            let used_width = percentage(row.used, scale);
            let free_width = percentage(row.free, scale);
            view! {
                <div class="pool-chart__row" title=format!("{}: {} used, {} free", row.name, row.used, row.free)>
                    <span class="pool-chart__label">{row.name.clone()}</span>
                    <div class="pool-chart__track">
                        <div class="pool-chart__used" style=format!("width: {used_width:.2}%")></div>
                        <div class="pool-chart__free" style=format!("width: {free_width:.2}%")></div>
                    </div>
                    <span class="pool-chart__percent">{format_percent(row.percentage)}</span>
                </div>
            }
        })
        .collect_view();

    let tables = cloud_tables(&snapshot).into_iter().map(pool_table).collect_view();

    view! {
        <div class="pool-details">
            <section class="pool-details__section">
                <h2>"Usage by Pool"</h2>
                <div class="pool-chart__legend">
                    <span class="pool-chart__legend-used">"Used"</span>
                    <span class="pool-chart__legend-free">"Free"</span>
                </div>
                <div class="pool-chart">{bars}</div>
            </section>
            {tables}
        </div>
    }
}

fn pool_table(table: CloudPoolTable) -> impl IntoView {
    let rows = table
        .rows
        .into_iter()
        .map(|pool| {
            view! {
                <tr>
                    <td class="pool-table__name">{pool.name.clone()}</td>
                    <td class="mono">{pool.network.clone()}</td>
                    <td>{format_count(pool.total)}</td>
                    <td>{format_count(pool.used)}</td>
                    <td>{format_count(pool.free)}</td>
                    <td>
                        <div class="pool-table__usage">
                            <div class="pool-table__bar">
                                <div
                                    class=format!("pool-table__fill {}", pool.level.class())
                                    style=format!("width: {:.1}%", pool.bar_width())
                                ></div>
                            </div>
                            <span>{format_percent(pool.percentage)}</span>
                        </div>
                    </td>
                    <td>
                        <span class=format!("status-badge {}", pool.status.class())>{pool.status.label()}</span>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="pool-details__section">
            <div class="pool-details__cloud-head">
                <h2>{table.name}</h2>
                <span class="pool-details__cloud-summary">
                    {format!(
                        "{} IPs \u{00B7} {} used \u{00B7} {} free",
                        format_count(table.total_ips),
                        format_percent(table.usage_percentage),
                        format_count(table.free_ips),
                    )}
                </span>
            </div>
            <table class="pool-table">
                <thead>
                    <tr>
                        <th>"Pool"</th>
                        <th>"Network"</th>
                        <th>"Total"</th>
                        <th>"Used"</th>
                        <th>"Free"</th>
                        <th>"Usage"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
