//! Passes run by the simulation each tick.
//!
//! Systems are free functions over borrowed state. They do not own state;
//! everything lives in the registries, the hecs world and the event queue.

pub mod drain;
pub mod snapshot;
