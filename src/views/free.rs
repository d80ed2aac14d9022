//! Free-IPs tab: pools with spare capacity and their available addresses.

#[cfg(test)]
#[path = "free_test.rs"]
mod free_test;

use super::stats::percentage;
use crate::net::types::DashboardSnapshot;

/// Addresses rendered per expanded pool.
pub const MAX_LISTED: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct FreePoolCard {
    /// `<cloud>-<pool>`; also the expansion key.
    pub key: String,
    pub cloud_label: String,
    pub name: String,
    pub network: String,
    pub free_ips: u64,
    pub addresses: Vec<String>,
}

impl FreePoolCard {
    /// The first [`MAX_LISTED`] addresses.
    pub fn listed(&self) -> &[String] {
        &self.addresses[..self.addresses.len().min(MAX_LISTED)]
    }

    /// Count of free addresses beyond the listed ones, when the list was cut.
    pub fn overflow(&self) -> Option<u64> {
        (self.addresses.len() > MAX_LISTED).then(|| self.free_ips.saturating_sub(MAX_LISTED as u64))
    }

    pub fn showing_label(&self) -> String {
        format!("Showing {} of {} IPs", self.listed().len(), self.free_ips)
    }

    /// Clipboard payload for "copy all": every address, one per line.
    pub fn copy_all_text(&self) -> String {
        self.addresses.join("\n")
    }
}

/// Pools with at least one free address, in snapshot order.
pub fn free_pool_cards(snapshot: &DashboardSnapshot) -> Vec<FreePoolCard> {
    snapshot
        .clouds
        .iter()
        .flat_map(|cloud| {
            cloud.pools.iter().filter(|p| p.free_ips > 0).map(move |pool| FreePoolCard {
                key: format!("{}-{}", cloud.cloud_name, pool.name),
                cloud_label: cloud.cloud_name.to_uppercase(),
                name: pool.name.clone(),
                network: pool.network.clone(),
                free_ips: pool.free_ips,
                addresses: pool.free_addresses.clone(),
            })
        })
        .collect()
}

/// Share of all addresses that are free.
pub fn free_percentage(snapshot: &DashboardSnapshot) -> f64 {
    percentage(snapshot.free_ips, snapshot.total_ips)
}
