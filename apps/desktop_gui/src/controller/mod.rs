//! Controller layer: UI events, search state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod search;
