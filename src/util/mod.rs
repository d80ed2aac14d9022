//! Utility helpers shared across dashboard UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and formatting concerns from component
//! logic so they can be tested without a DOM.

pub mod browser;
pub mod csv;
pub mod time;
