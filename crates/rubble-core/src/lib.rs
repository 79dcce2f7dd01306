//! Core types and definitions for the rubble simulation.
//!
//! This crate defines the vocabulary shared by the simulation: identities,
//! flags, events, bullet-class data, configuration and frame reports.
//! It has no dependency on the ECS or any runtime.

pub mod bullet_class;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod flags;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
