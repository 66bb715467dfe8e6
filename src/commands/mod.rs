//! Command implementations for the addjars CLI

pub mod completions;
pub mod list;
pub mod sync;
pub mod version;
