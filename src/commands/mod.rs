//! Command implementations for remok CLI

pub mod completions;
pub mod helpers;
pub mod list;
pub mod plan;
pub mod script;
pub mod version;
