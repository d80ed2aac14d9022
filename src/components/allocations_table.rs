//! Allocated-IPs tab: searchable, filterable, sortable table with CSV export.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::copyable_ip::CopyableIp;
use crate::net::types::{DashboardSnapshot, IpAllocation};
use crate::state::notes::ALL_CLOUDS;
use crate::util::browser::download_text;
use crate::util::csv::{CSV_MIME, allocations_csv, export_file_name};
use crate::util::time::{format_local_time, today};
use crate::views::allocations::{AllocationQuery, SortField, cloud_names, showing_label, type_class};

#[component]
pub fn AllocationsTable(snapshot: Arc<DashboardSnapshot>) -> impl IntoView {
    let query = RwSignal::new(AllocationQuery::default());
    let total = snapshot.all_allocations.len();

    let cloud_options = cloud_names(&snapshot)
        .into_iter()
        .map(|name| {
            let label = name.to_uppercase();
            view! { <option value=name>{label}</option> }
        })
        .collect_view();

    let headers = SortField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <th class="sortable" on:click=move |_| query.update(|q| q.toggle_sort(field))>
                    {field.label()}
                    " "
                    <span class="sort-indicator">{move || query.with(|q| q.indicator(field))}</span>
                </th>
            }
        })
        .collect_view();

    let export_source = Arc::clone(&snapshot);
    let on_export = move |_| {
        let csv = query.with_untracked(|q| allocations_csv(q.apply(&export_source.all_allocations)));
        let file_name = export_file_name(today());
        if download_text(&file_name, CSV_MIME, &csv) {
            log::info!("exported allocations to {file_name}");
        }
    };

    let rows_source = Arc::clone(&snapshot);
    let visible = Memo::new(move |_| {
        query.with(|q| q.apply(&rows_source.all_allocations).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="allocations">
            <div class="allocations__toolbar">
                <input
                    class="allocations__search"
                    type="search"
                    placeholder="Search by IP, organization, pool or entity..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.search = value);
                    }
                />
                <select
                    class="allocations__cloud"
                    prop:value=move || query.with(|q| q.cloud.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.cloud = value);
                    }
                >
                    <option value=ALL_CLOUDS>"All clouds"</option>
                    {cloud_options}
                </select>
                <button class="allocations__export" on:click=on_export>
                    "Export CSV"
                </button>
            </div>
            <div class="allocations__count">{move || showing_label(visible.with(Vec::len), total)}</div>
            <div class="table-wrapper">
                <table class="allocations__table">
                    <thead>
                        <tr>{headers}</tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="allocations__empty" colspan="6">"No allocations match the current filters."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter().map(allocation_row).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn allocation_row(row: IpAllocation) -> impl IntoView {
    let badge = type_class(&row.allocation_type);
    let detail = row
        .vapp_name
        .clone()
        .or_else(|| row.allocation_date.as_deref().map(format_local_time));
    view! {
        <tr>
            <td>
                <CopyableIp ip=row.ip_address compact=true/>
            </td>
            <td>{row.org_name}</td>
            <td class="allocations__cloud-cell">{row.cloud_name.to_uppercase()}</td>
            <td class="mono">{row.pool_name}</td>
            <td>
                <span class=format!("type-badge {badge}")>{row.allocation_type}</span>
            </td>
            <td>
                <div class="allocations__entity">{row.entity_name.unwrap_or_else(|| "-".to_owned())}</div>
                {detail.map(|text| view! { <div class="allocations__entity-detail">{text}</div> })}
            </td>
        </tr>
    }
}
