//! Error types for Majlis Core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid seat index {index}, room has {count} seats")]
    InvalidSeatIndex { index: usize, count: usize },

    #[error("Seat {index} is not held by the requesting user")]
    NotOccupant { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
