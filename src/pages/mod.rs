//! Page modules for the two top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The root component picks a page from the session phase; each page owns its
//! screen-level orchestration and delegates rendering details to
//! `components`.

pub mod dashboard;
pub mod login;
