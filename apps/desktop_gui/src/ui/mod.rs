//! UI layer for the desktop GUI: app shell and theme.

pub mod app;
pub mod theme;

pub use app::PokedexApp;
