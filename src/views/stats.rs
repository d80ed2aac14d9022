//! Headline stat cards and shared number formatting.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::DashboardSnapshot;

/// Usage band used to color bars and percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageLevel {
    Low,
    Medium,
    High,
}

impl UsageLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 50.0 {
            Self::Low
        } else if percentage < 80.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    /// CSS color modifier (`stat-<accent>`).
    pub accent: &'static str,
    pub usage: Option<(f64, UsageLevel)>,
}

pub fn stat_cards(snapshot: &DashboardSnapshot) -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Clouds", value: format_count(snapshot.total_clouds), accent: "blue", usage: None },
        StatCard {
            label: "Total IP Addresses",
            value: format_count(snapshot.total_ips),
            accent: "purple",
            usage: None,
        },
        StatCard {
            label: "Used IPs",
            value: format_count(snapshot.used_ips),
            accent: "orange",
            usage: Some((snapshot.usage_percentage, UsageLevel::from_percentage(snapshot.usage_percentage))),
        },
        StatCard { label: "Free IPs", value: format_count(snapshot.free_ips), accent: "green", usage: None },
    ]
}

/// `12345` -> `"12,345"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place with a percent sign.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `part / whole` as a percentage; zero when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 * 100.0 }
}
