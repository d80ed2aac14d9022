use super::*;
use crate::test_helpers::allocation;

#[test]
fn empty_export_is_header_only() {
    assert_eq!(allocations_csv(std::iter::empty()), "IP Address,Organization,Cloud,Pool,Type,Entity");
}

#[test]
fn rows_are_quoted_in_given_order() {
    let rows = [
        allocation("10.0.0.2", "Globex", "vcd", "pool-a", "NAT", None),
        allocation("10.0.0.1", "Acme", "vcd01", "pool-b", "EDGE", Some("edge-01")),
    ];
    let csv = allocations_csv(&rows);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], r#""10.0.0.2","Globex","vcd","pool-a","NAT","""#);
    assert_eq!(lines[2], r#""10.0.0.1","Acme","vcd01","pool-b","EDGE","edge-01""#);
}

#[test]
fn embedded_quotes_are_doubled() {
    let rows = [allocation("10.0.0.3", "Acme \"East\"", "vcd", "p", "VM_ALLOCATED", None)];
    let csv = allocations_csv(&rows);
    assert!(csv.ends_with(r#""10.0.0.3","Acme ""East""","vcd","p","VM_ALLOCATED","""#));
}

#[test]
fn file_name_carries_date() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(export_file_name(date), "allocated_ips_2025-03-07.csv");
}
