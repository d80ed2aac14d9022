//! Local UI chrome state (active tab, sidebar, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and dashboard state
//! so layout controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Main content tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Allocations,
    Free,
    Pools,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Allocations, Tab::Free, Tab::Pools];

    /// Parse a tab identifier; anything unrecognized falls back to `Overview`.
    pub fn parse(id: &str) -> Self {
        match id {
            "allocations" => Self::Allocations,
            "free" => Self::Free,
            "pools" => Self::Pools,
            _ => Self::Overview,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Allocations => "allocations",
            Self::Free => "free",
            Self::Pools => "pools",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Allocations => "Allocated IPs",
            Self::Free => "Free IPs",
            Self::Pools => "Pool Details",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Overview => "General statistics",
            Self::Allocations => "Used addresses",
            Self::Free => "Available pool",
            Self::Pools => "Detailed analysis",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
    pub notes_open: bool,
    /// True until the startup session check resolves.
    pub booting: bool,
    pub signing_in: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { active_tab: Tab::Overview, sidebar_collapsed: false, mobile_menu_open: false, notes_open: false, booting: true, signing_in: false }
    }
}

impl UiState {
    /// Switch tabs; the mobile menu closes on selection.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.mobile_menu_open = false;
    }
}
