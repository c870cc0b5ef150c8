//! Data models for Majlis

mod seat;
mod user;

pub use seat::*;
pub use user::*;
