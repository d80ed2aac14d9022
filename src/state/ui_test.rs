use super::*;

#[test]
fn parse_known_tab_ids() {
    assert_eq!(Tab::parse("overview"), Tab::Overview);
    assert_eq!(Tab::parse("allocations"), Tab::Allocations);
    assert_eq!(Tab::parse("free"), Tab::Free);
    assert_eq!(Tab::parse("pools"), Tab::Pools);
}

#[test]
fn parse_unknown_falls_back_to_overview() {
    assert_eq!(Tab::parse("notes"), Tab::Overview);
    assert_eq!(Tab::parse(""), Tab::Overview);
    assert_eq!(Tab::parse("POOLS"), Tab::Overview);
}

#[test]
fn ids_round_trip_through_parse() {
    for tab in Tab::ALL {
        assert_eq!(Tab::parse(tab.id()), tab);
    }
}

#[test]
fn ui_state_default_starts_booting_on_overview() {
    let ui = UiState::default();
    assert_eq!(ui.active_tab, Tab::Overview);
    assert!(ui.booting);
    assert!(!ui.mobile_menu_open);
}

#[test]
fn select_tab_closes_mobile_menu() {
    let mut ui = UiState { mobile_menu_open: true, ..UiState::default() };
    ui.select_tab(Tab::Free);
    assert_eq!(ui.active_tab, Tab::Free);
    assert!(!ui.mobile_menu_open);
}
