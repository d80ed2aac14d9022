//! CSV rendering for the allocations table export.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use chrono::NaiveDate;

use crate::net::types::IpAllocation;

pub const CSV_MIME: &str = "text/csv";
const HEADER: [&str; 6] = ["IP Address", "Organization", "Cloud", "Pool", "Type", "Entity"];

/// Header line plus one fully quoted row per allocation, in the given order.
pub fn allocations_csv<'a>(rows: impl IntoIterator<Item = &'a IpAllocation>) -> String {
    let mut lines = vec![HEADER.join(",")];
    lines.extend(rows.into_iter().map(|a| {
        [
            a.ip_address.as_str(),
            a.org_name.as_str(),
            a.cloud_name.as_str(),
            a.pool_name.as_str(),
            a.allocation_type.as_str(),
            a.entity_name.as_deref().unwrap_or(""),
        ]
        .iter()
        .map(|cell| quote(cell))
        .collect::<Vec<_>>()
        .join(",")
    }));
    lines.join("\n")
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("allocated_ips_{}.csv", date.format("%Y-%m-%d"))
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
