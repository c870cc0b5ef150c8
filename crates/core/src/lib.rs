//! Majlis Core Library
//!
//! Models, room state transitions, and invariant guards for the Majlis
//! voice room. This crate is purely synchronous; the application shell
//! owns timing and observation.

pub mod error;
pub mod invariants;
pub mod models;
pub mod room;

pub use error::{Error, Result};
pub use models::*;
pub use room::RoomState;
