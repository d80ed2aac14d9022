//! Networking modules for the dashboard REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` binds typed endpoints to a per-session bearer, `transport` is the
//! HTTP seam, `types` defines the wire schema, and `error` the failure
//! taxonomy shared by every call site.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
