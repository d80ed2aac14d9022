use super::*;
use crate::test_helpers::sample_snapshot;

#[test]
fn usage_level_bands() {
    assert_eq!(UsageLevel::from_percentage(0.0), UsageLevel::Low);
    assert_eq!(UsageLevel::from_percentage(49.9), UsageLevel::Low);
    assert_eq!(UsageLevel::from_percentage(50.0), UsageLevel::Medium);
    assert_eq!(UsageLevel::from_percentage(79.9), UsageLevel::Medium);
    assert_eq!(UsageLevel::from_percentage(80.0), UsageLevel::High);
}

#[test]
fn cards_follow_snapshot_totals() {
    let cards = stat_cards(&sample_snapshot());
    let labels: Vec<_> = cards.iter().map(|c| c.label).collect();
    assert_eq!(labels, ["Total Clouds", "Total IP Addresses", "Used IPs", "Free IPs"]);
    assert_eq!(cards[0].value, "2");
    assert_eq!(cards[1].value, "24");
    assert_eq!(cards[3].value, "9");

    let (pct, level) = cards[2].usage.unwrap();
    assert!((pct - 62.5).abs() < 1e-9);
    assert_eq!(level, UsageLevel::Medium);
    assert!(cards[0].usage.is_none());
}

#[test]
fn counts_get_thousands_separators() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn percent_helpers() {
    assert_eq!(format_percent(62.5), "62.5%");
    assert_eq!(format_percent(100.0 / 3.0), "33.3%");
    assert!((percentage(1, 4) - 25.0).abs() < 1e-9);
    assert!(percentage(5, 0).abs() < f64::EPSILON);
}
