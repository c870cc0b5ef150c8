//! Seat model - one slot in the speaking grid

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of seats in a room. Fixed at startup, never resized.
pub const SEAT_COUNT: usize = 8;

/// One of the fixed speaking positions in the room.
///
/// `display_name` and `occupied_at` are set together with `occupant` and
/// cleared together with it. `muted` defaults to true and only carries
/// meaning while the seat is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Position in the grid, equal to the seat's index. Immutable.
    pub id: usize,
    pub occupant: Option<Uuid>,
    pub display_name: Option<String>,
    pub muted: bool,
    pub occupied_at: Option<DateTime<Utc>>,
}

impl Seat {
    /// Create an empty seat at the given position
    pub fn empty(id: usize) -> Self {
        Self {
            id,
            occupant: None,
            display_name: None,
            muted: true,
            occupied_at: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}
