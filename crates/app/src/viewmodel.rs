//! View projection for the room screen
//!
//! Pure functions from a [`RoomState`] snapshot to displayable rows.
//! Nothing here mutates state; the shell renders whatever these return.

use majlis_core::RoomState;
use uuid::Uuid;

/// One row of the seat grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatItem {
    pub index: usize,
    /// Occupant's name, or the "Seat N" placeholder when empty
    pub label: String,
    pub occupied: bool,
    pub muted: bool,
    pub is_you: bool,
}

/// Project the seat grid for display
pub fn seat_items(room: &RoomState, current_user: Option<Uuid>) -> Vec<SeatItem> {
    room.seats()
        .iter()
        .map(|seat| SeatItem {
            index: seat.id,
            label: seat
                .display_name
                .clone()
                // Placeholder labels are 1-based, matching the on-screen grid
                .unwrap_or_else(|| format!("Seat {}", seat.id + 1)),
            occupied: seat.is_occupied(),
            muted: seat.muted,
            is_you: seat.occupant.is_some() && seat.occupant == current_user,
        })
        .collect()
}

/// Header line: room title plus how many seats are taken
pub fn header_line(room: &RoomState) -> String {
    format!("{} ({}/{} seated)", room.room_name(), room.occupied_count(), room.seats().len())
}

/// Banner text for the gift overlay, if one is showing
pub fn gift_banner(room: &RoomState) -> Option<String> {
    room.active_gift().map(|gift| format!("Gift sent: {gift}!"))
}
