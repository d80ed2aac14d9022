//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `dashboard`, `notes`, `ui`) so
//! components depend on small focused models. `token_store` is the only
//! module that touches durable browser storage.

pub mod dashboard;
pub mod notes;
pub mod session;
pub mod token_store;
pub mod ui;
