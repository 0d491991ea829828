//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod actions;
pub mod budget;
pub mod export;

// Re-export all handlers for use in router
pub use actions::*;
pub use budget::*;
pub use export::*;
