//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible seat states during
//! development. These checks are compiled out in release builds.

use crate::models::{Seat, SEAT_COUNT};
use crate::room::RoomState;

/// Validate that a seat's fields are internally consistent
pub fn assert_seat_invariants(seat: &Seat) {
    debug_assert!(
        seat.id < SEAT_COUNT,
        "Seat id {} out of range 0..{}",
        seat.id,
        SEAT_COUNT
    );

    // Name travels with the occupant
    debug_assert_eq!(
        seat.occupant.is_some(),
        seat.display_name.is_some(),
        "Seat {} has occupant {:?} but display_name {:?}",
        seat.id,
        seat.occupant,
        seat.display_name
    );

    debug_assert_eq!(
        seat.occupant.is_some(),
        seat.occupied_at.is_some(),
        "Seat {} has occupant {:?} but occupied_at {:?}",
        seat.id,
        seat.occupant,
        seat.occupied_at
    );
}

/// Validate that a room's state is internally consistent
pub fn assert_room_invariants(room: &RoomState) {
    debug_assert_eq!(
        room.seats().len(),
        SEAT_COUNT,
        "Room has {} seats, expected {}",
        room.seats().len(),
        SEAT_COUNT
    );

    for (index, seat) in room.seats().iter().enumerate() {
        debug_assert_eq!(
            seat.id, index,
            "Seat at position {} has id {}",
            index, seat.id
        );
        assert_seat_invariants(seat);
    }

    debug_assert!(
        !room.room_name().trim().is_empty(),
        "Room has empty name"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_empty_seat_valid() {
        assert_seat_invariants(&Seat::empty(0));
    }

    #[test]
    fn test_occupied_seat_valid() {
        let seat = Seat {
            id: 3,
            occupant: Some(Uuid::new_v4()),
            display_name: Some("Nour".to_string()),
            muted: true,
            occupied_at: Some(Utc::now()),
        };
        assert_seat_invariants(&seat);
    }

    #[test]
    #[should_panic(expected = "display_name")]
    fn test_occupant_without_name_panics() {
        let seat = Seat {
            id: 0,
            occupant: Some(Uuid::new_v4()),
            display_name: None,
            muted: true,
            occupied_at: Some(Utc::now()),
        };
        assert_seat_invariants(&seat);
    }

    #[test]
    fn test_fresh_room_valid() {
        let room = RoomState::new("Test Room");
        assert_room_invariants(&room);
    }

    #[test]
    fn test_room_stays_valid_across_operations() {
        let mut room = RoomState::new("Test Room");
        let user = UserProfile::new("A");
        room.occupy_seat(0, &user).unwrap();
        room.toggle_mute(0).unwrap();
        room.show_gift("Rose");
        assert_room_invariants(&room);
    }
}
