//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components read shared signals from context and call back into the
//! session controller only through [`crate::app::DashboardActions`], so none
//! of them owns network or storage concerns. Derived values come from
//! `crate::views`; components only lay them out.

pub mod allocations_table;
pub mod conflict_alert;
pub mod copyable_ip;
pub mod error_message;
pub mod free_ips;
pub mod header;
pub mod loading_spinner;
pub mod notes_panel;
pub mod overview;
pub mod pool_details;
pub mod sidebar;
pub mod stats_cards;
