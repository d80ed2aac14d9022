//! Allocated-IPs table: search, cloud filter, and column sorting.
//!
//! Filtering and sorting work on borrowed rows; the snapshot itself is never
//! reordered.

#[cfg(test)]
#[path = "allocations_test.rs"]
mod allocations_test;

use crate::net::types::{DashboardSnapshot, IpAllocation};
use crate::state::notes::ALL_CLOUDS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    IpAddress,
    OrgName,
    CloudName,
    PoolName,
    AllocationType,
    EntityName,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::IpAddress,
        SortField::OrgName,
        SortField::CloudName,
        SortField::PoolName,
        SortField::AllocationType,
        SortField::EntityName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::IpAddress => "IP Address",
            Self::OrgName => "Organization",
            Self::CloudName => "Cloud",
            Self::PoolName => "Pool",
            Self::AllocationType => "Type",
            Self::EntityName => "Entity",
        }
    }

    /// Lower-cased sort key; a missing entity sorts as empty.
    fn key(self, row: &IpAllocation) -> String {
        let raw = match self {
            Self::IpAddress => row.ip_address.as_str(),
            Self::OrgName => row.org_name.as_str(),
            Self::CloudName => row.cloud_name.as_str(),
            Self::PoolName => row.pool_name.as_str(),
            Self::AllocationType => row.allocation_type.as_str(),
            Self::EntityName => row.entity_name.as_deref().unwrap_or(""),
        };
        raw.to_lowercase()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationQuery {
    pub search: String,
    /// Exact cloud name or [`ALL_CLOUDS`].
    pub cloud: String,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl Default for AllocationQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            cloud: ALL_CLOUDS.to_owned(),
            sort_field: SortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl AllocationQuery {
    /// Clicking the active column flips direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Indicator for a column header; empty unless it is the active column.
    pub fn indicator(&self, field: SortField) -> &'static str {
        if self.sort_field == field { self.direction.indicator() } else { "" }
    }

    pub fn matches(&self, row: &IpAllocation) -> bool {
        if self.cloud != ALL_CLOUDS && row.cloud_name != self.cloud {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [Some(&row.ip_address), Some(&row.org_name), Some(&row.pool_name), row.entity_name.as_ref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filtered rows in sort order.
    pub fn apply<'a>(&self, rows: &'a [IpAllocation]) -> Vec<&'a IpAllocation> {
        let mut keyed: Vec<(String, &IpAllocation)> = rows
            .iter()
            .filter(|row| self.matches(row))
            .map(|row| (self.sort_field.key(row), row))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        if self.direction == SortDirection::Desc {
            keyed.reverse();
        }
        keyed.into_iter().map(|(_, row)| row).collect()
    }
}

/// Cloud names offered by the filter dropdown.
pub fn cloud_names(snapshot: &DashboardSnapshot) -> Vec<String> {
    snapshot.clouds.iter().map(|c| c.cloud_name.clone()).collect()
}

pub fn showing_label(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} allocations")
}

/// Badge modifier for an allocation type, e.g. `VM_ALLOCATED` -> `type-vm-allocated`.
pub fn type_class(allocation_type: &str) -> String {
    format!("type-{}", allocation_type.to_lowercase().replace('_', "-"))
}
