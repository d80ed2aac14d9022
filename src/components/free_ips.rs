//! Free-IPs tab: expandable pool cards listing available addresses.

use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;

use crate::components::copyable_ip::{CopyableIp, flash_copied};
use crate::net::types::DashboardSnapshot;
use crate::util::browser::copy_to_clipboard;
use crate::views::free::{FreePoolCard, free_percentage, free_pool_cards};
use crate::views::stats::{format_count, format_percent};

#[component]
pub fn FreeIps(snapshot: Arc<DashboardSnapshot>) -> impl IntoView {
    let expanded = RwSignal::new(HashSet::<String>::new());
    let cards = free_pool_cards(&snapshot);

    let body = if cards.is_empty() {
        view! { <p class="free-ips__empty">"No free addresses in any pool."</p> }.into_any()
    } else {
        cards.into_iter().map(|card| free_pool_card(card, expanded)).collect_view().into_any()
    };

    view! {
        <div class="free-ips">
            <div class="free-ips__summary">
                <span class="free-ips__total">{format!("{} free IPs", format_count(snapshot.free_ips))}</span>
                <span class="free-ips__percent">{format!("{} of all addresses", format_percent(free_percentage(&snapshot)))}</span>
            </div>
            {body}
        </div>
    }
}

fn free_pool_card(card: FreePoolCard, expanded: RwSignal<HashSet<String>>) -> impl IntoView {
    let key = card.key.clone();
    let is_open = {
        let key = key.clone();
        move || expanded.with(|set| set.contains(&key))
    };
    let toggle = move |_| {
        expanded.update(|set| {
            if !set.remove(&key) {
                set.insert(key.clone());
            }
        });
    };

    let copied = RwSignal::new(false);
    let all_text = card.copy_all_text();
    let copy_all = move |_| {
        if copy_to_clipboard(&all_text) {
            flash_copied(copied);
        }
    };

    let listed = card.listed().to_vec();
    let overflow = card.overflow();
    let showing = card.showing_label();
    let chevron_open = is_open.clone();
    let card_open = is_open.clone();

    view! {
        <div class="free-pool" class:free-pool--open=card_open>
            <button class="free-pool__header" on:click=toggle>
                <span class="free-pool__chevron">{move || if chevron_open() { "\u{25BE}" } else { "\u{25B8}" }}</span>
                <span class="free-pool__cloud">{card.cloud_label}</span>
                <span class="free-pool__name">{card.name}</span>
                <span class="free-pool__network mono">{card.network}</span>
                <span class="free-pool__count">{format!("{} free", format_count(card.free_ips))}</span>
            </button>
            <Show when=is_open>
                <div class="free-pool__body">
                    <div class="free-pool__actions">
                        <span class="free-pool__showing">{showing.clone()}</span>
                        <button class="free-pool__copy-all" on:click=copy_all.clone()>
                            {move || if copied.get() { "Copied!" } else { "Copy all" }}
                        </button>
                    </div>
                    <div class="free-pool__addresses">
                        {listed.iter().map(|ip| view! { <CopyableIp ip=ip.clone() compact=true/> }).collect_view()}
                    </div>
                    {overflow
                        .map(|more| {
                            view! { <p class="free-pool__more">{format!("... and {} more", format_count(more))}</p> }
                        })}
                </div>
            </Show>
        </div>
    }
}
