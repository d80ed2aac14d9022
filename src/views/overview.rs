//! Overview tab: per-cloud usage distribution and pool summary cards.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use super::pools::PoolUsage;
use super::stats::percentage;
use crate::net::types::DashboardSnapshot;

/// Slice of the used-IP distribution chart.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudSlice {
    pub name: String,
    pub used: u64,
    pub total: u64,
    pub free: u64,
    /// This cloud's share of all used addresses.
    pub share: f64,
}

pub fn cloud_slices(snapshot: &DashboardSnapshot) -> Vec<CloudSlice> {
    let used_total: u64 = snapshot.clouds.iter().map(|c| c.used_ips).sum();
    snapshot
        .clouds
        .iter()
        .map(|c| CloudSlice {
            name: c.cloud_name.to_uppercase(),
            used: c.used_ips,
            total: c.total_ips,
            free: c.free_ips,
            share: percentage(c.used_ips, used_total),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudCard {
    pub name: String,
    pub total_pools: u64,
    pub total_ips: u64,
    pub pools: Vec<PoolUsage>,
}

pub fn cloud_cards(snapshot: &DashboardSnapshot) -> Vec<CloudCard> {
    snapshot
        .clouds
        .iter()
        .map(|c| CloudCard {
            name: c.cloud_name.to_uppercase(),
            total_pools: c.total_pools,
            total_ips: c.total_ips,
            pools: c.pools.iter().map(|p| PoolUsage::new(&c.cloud_name, p)).collect(),
        })
        .collect()
}
