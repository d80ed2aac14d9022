//! Pool analytics: stacked usage chart rows and per-cloud pool tables.

#[cfg(test)]
#[path = "pools_test.rs"]
mod pools_test;

use super::stats::UsageLevel;
use crate::net::types::{CloudStats, DashboardSnapshot, IpPool};

/// Health badge for one pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolStatus {
    Healthy,
    Warning,
    Critical,
}

impl PoolStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 80.0 {
            Self::Critical
        } else if percentage > 50.0 {
            Self::Warning
        } else {
            Self::Healthy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// One pool's usage figures, shared by the overview cards and pool tables.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolUsage {
    /// `<cloud>-<pool>`; unique across the snapshot.
    pub key: String,
    pub name: String,
    pub network: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percentage: f64,
    pub level: UsageLevel,
    pub status: PoolStatus,
}

impl PoolUsage {
    pub fn new(cloud_name: &str, pool: &IpPool) -> Self {
        let percentage = pool.usage_percentage.unwrap_or(0.0);
        Self {
            key: format!("{cloud_name}-{}", pool.name),
            name: pool.name.clone(),
            network: pool.network.clone(),
            total: pool.total_ips,
            used: pool.used_ips,
            free: pool.free_ips,
            percentage,
            level: UsageLevel::from_percentage(percentage),
            status: PoolStatus::from_percentage(percentage),
        }
    }

    /// Bar width in percent, clamped to `0..=100`.
    pub fn bar_width(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}

/// Stacked-bar datum for the usage-by-pool chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    pub name: String,
    pub used: u64,
    pub free: u64,
    pub total: u64,
    pub percentage: f64,
}

pub fn chart_rows(snapshot: &DashboardSnapshot) -> Vec<ChartRow> {
    snapshot
        .clouds
        .iter()
        .flat_map(|cloud| {
            cloud.pools.iter().map(move |pool| ChartRow {
                name: chart_label(&cloud.cloud_name, &pool.name),
                used: pool.used_ips,
                free: pool.free_ips,
                total: pool.total_ips,
                percentage: pool.usage_percentage.unwrap_or(0.0),
            })
        })
        .collect()
}

/// Largest pool total; bars are scaled against it.
pub fn chart_scale(rows: &[ChartRow]) -> u64 {
    rows.iter().map(|r| r.total).max().unwrap_or(0)
}

fn chart_label(cloud_name: &str, pool_name: &str) -> String {
    let short = pool_name.split('/').next().unwrap_or(pool_name);
    format!("{}-{short}", cloud_name.to_uppercase())
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudPoolTable {
    pub name: String,
    pub rows: Vec<PoolUsage>,
    pub total_ips: u64,
    pub usage_percentage: f64,
    pub free_ips: u64,
}

impl CloudPoolTable {
    fn new(cloud: &CloudStats) -> Self {
        Self {
            name: cloud.cloud_name.to_uppercase(),
            rows: cloud.pools.iter().map(|p| PoolUsage::new(&cloud.cloud_name, p)).collect(),
            total_ips: cloud.total_ips,
            usage_percentage: cloud.usage_percentage.unwrap_or(0.0),
            free_ips: cloud.free_ips,
        }
    }
}

pub fn cloud_tables(snapshot: &DashboardSnapshot) -> Vec<CloudPoolTable> {
    snapshot.clouds.iter().map(CloudPoolTable::new).collect()
}
