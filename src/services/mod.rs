//! Orchestration services between the UI and the network layer.
//!
//! DESIGN
//! ======
//! `session` owns the authentication lifecycle and dashboard loading;
//! `notes` extends it with note CRUD. `auth_strategy` and `navigator` are the
//! seams that keep the controller free of browser globals.

pub mod auth_strategy;
pub mod navigator;
pub mod notes;
pub mod session;
