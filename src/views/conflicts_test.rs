use super::*;
use crate::test_helpers::{conflict, sample_snapshot};

#[test]
fn no_conflicts_no_entries() {
    assert!(conflict_entries(&sample_snapshot()).is_empty());
}

#[test]
fn entries_sort_numerically_by_ip() {
    let mut snapshot = sample_snapshot();
    for ip in ["10.0.0.12", "10.0.0.5", "9.1.1.1"] {
        snapshot.conflicts.insert(ip.to_owned(), vec![conflict(ip)]);
    }
    let ips: Vec<_> = conflict_entries(&snapshot).into_iter().map(|e| e.ip).collect();
    assert_eq!(ips, ["9.1.1.1", "10.0.0.5", "10.0.0.12"]);
}

#[test]
fn details_join_orgs_and_pools() {
    let mut snapshot = sample_snapshot();
    snapshot.conflicts.insert("10.0.0.5".to_owned(), vec![conflict("10.0.0.5")]);
    let entry = &conflict_entries(&snapshot)[0];
    let detail = &entry.details[0];
    assert_eq!(detail.clouds, ["VCD", "VCD01"]);
    assert_eq!(detail.organizations, "Acme, Globex");
    assert_eq!(detail.pools, "public-1, public-2");
}
