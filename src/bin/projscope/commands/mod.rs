//! Command implementations

pub mod completions;
pub mod dist;
pub mod entry;
pub mod field;
pub mod locate;
pub mod show;
