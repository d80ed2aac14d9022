//! Conflict alert rows: addresses claimed by more than one cloud.

#[cfg(test)]
#[path = "conflicts_test.rs"]
mod conflicts_test;

use std::cmp::Ordering;
use std::net::IpAddr;

use crate::net::types::DashboardSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictDetail {
    pub clouds: Vec<String>,
    pub organizations: String,
    pub pools: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictEntry {
    pub ip: String,
    pub details: Vec<ConflictDetail>,
}

/// One entry per conflicting address, ordered numerically where the keys parse
/// as IP addresses.
pub fn conflict_entries(snapshot: &DashboardSnapshot) -> Vec<ConflictEntry> {
    let mut entries: Vec<ConflictEntry> = snapshot
        .conflicts
        .iter()
        .map(|(ip, conflicts)| ConflictEntry {
            ip: ip.clone(),
            details: conflicts
                .iter()
                .map(|c| ConflictDetail {
                    clouds: c.clouds.iter().map(|cloud| cloud.to_uppercase()).collect(),
                    organizations: c.organizations.join(", "),
                    pools: c.pools.join(", "),
                })
                .collect(),
        })
        .collect();
    entries.sort_by(|a, b| compare_ips(&a.ip, &b.ip));
    entries
}

fn compare_ips(a: &str, b: &str) -> Ordering {
    match (a.parse::<IpAddr>(), b.parse::<IpAddr>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
