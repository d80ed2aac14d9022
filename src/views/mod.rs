//! Read-only view models derived from the dashboard snapshot.
//!
//! DESIGN
//! ======
//! Each tab's content is computed by pure functions here and rendered by a
//! thin component, so ordering, filtering, and thresholds are testable
//! without a DOM. [`route`] picks the view for the active tab.


pub mod allocations;
pub mod conflicts;
pub mod free;
pub mod overview;
pub mod pools;
pub mod stats;

use std::sync::Arc;

use crate::net::types::DashboardSnapshot;
use crate::state::ui::Tab;

/// The view selected for a tab, bound to the snapshot it renders.
#[derive(Clone, Debug, PartialEq)]
pub enum RoutedView {
    Overview(Arc<DashboardSnapshot>),
    Allocations(Arc<DashboardSnapshot>),
    Free(Arc<DashboardSnapshot>),
    Pools(Arc<DashboardSnapshot>),
}

impl RoutedView {
    pub fn tab(&self) -> Tab {
        match self {
            Self::Overview(_) => Tab::Overview,
            Self::Allocations(_) => Tab::Allocations,
            Self::Free(_) => Tab::Free,
            Self::Pools(_) => Tab::Pools,
        }
    }

    pub fn snapshot(&self) -> &Arc<DashboardSnapshot> {
        match self {
            Self::Overview(s) | Self::Allocations(s) | Self::Free(s) | Self::Pools(s) => s,
        }
    }
}

/// Nothing renders until a snapshot has loaded.
pub fn route(tab: Tab, snapshot: Option<&Arc<DashboardSnapshot>>) -> Option<RoutedView> {
    let snapshot = Arc::clone(snapshot?);
    Some(match tab {
        Tab::Overview => RoutedView::Overview(snapshot),
        Tab::Allocations => RoutedView::Allocations(snapshot),
        Tab::Free => RoutedView::Free(snapshot),
        Tab::Pools => RoutedView::Pools(snapshot),
    })
}

/// [`route`] from a raw tab identifier; unknown identifiers show the overview.
pub fn route_id(id: &str, snapshot: Option<&Arc<DashboardSnapshot>>) -> Option<RoutedView> {
    route(Tab::parse(id), snapshot)
}
