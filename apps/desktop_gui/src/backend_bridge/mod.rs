//! Worker thread that runs lookups off the UI thread.

pub mod commands;
pub mod runtime;
