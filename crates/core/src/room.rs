//! Room state - the seat grid and gift overlay
//!
//! All transitions are synchronous mutations on a single container.
//! Timing for the transient gift overlay (when to call [`RoomState::clear_gift`])
//! belongs to the application shell, not to this module.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::invariants::assert_room_invariants;
use crate::models::{Seat, UserProfile, SEAT_COUNT};

/// The one mutable state container behind the room screen.
///
/// Created once at application start with all seats empty. The view layer
/// reads every field and re-renders on any change; it never mutates state
/// except through the operations below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomState {
    seats: Vec<Seat>,
    room_name: String,
    active_gift: Option<String>,
}

impl RoomState {
    /// Create a room with `SEAT_COUNT` empty seats
    pub fn new(room_name: impl Into<String>) -> Self {
        let state = Self {
            seats: (0..SEAT_COUNT).map(Seat::empty).collect(),
            room_name: room_name.into(),
            active_gift: None,
        };
        assert_room_invariants(&state);
        state
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, index: usize) -> Result<&Seat> {
        self.seats.get(index).ok_or(Error::InvalidSeatIndex {
            index,
            count: SEAT_COUNT,
        })
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    pub fn active_gift(&self) -> Option<&str> {
        self.active_gift.as_deref()
    }

    /// Number of currently occupied seats
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    fn seat_mut(&mut self, index: usize) -> Result<&mut Seat> {
        self.seats.get_mut(index).ok_or(Error::InvalidSeatIndex {
            index,
            count: SEAT_COUNT,
        })
    }

    /// Take the seat at `index` for `profile`.
    ///
    /// Returns `Ok(true)` if the seat was empty and is now held by the
    /// user, `Ok(false)` if it was already occupied (the request is
    /// silently ignored, occupancy is never reassigned). Nothing stops a
    /// user from holding several seats at once.
    pub fn occupy_seat(&mut self, index: usize, profile: &UserProfile) -> Result<bool> {
        let seat = self.seat_mut(index)?;
        if seat.is_occupied() {
            debug!(index, "Seat already occupied, ignoring");
            return Ok(false);
        }

        seat.occupant = Some(profile.id);
        seat.display_name = Some(profile.display_name.clone());
        seat.occupied_at = Some(Utc::now());

        info!(index, user_id = %profile.id, "Seat taken");
        assert_room_invariants(self);
        Ok(true)
    }

    /// Flip the mute flag of the seat at `index`.
    ///
    /// Returns `Ok(true)` if a flag was flipped, `Ok(false)` if the seat
    /// is empty (no-op).
    pub fn toggle_mute(&mut self, index: usize) -> Result<bool> {
        let seat = self.seat_mut(index)?;
        if !seat.is_occupied() {
            debug!(index, "Toggle mute on empty seat, ignoring");
            return Ok(false);
        }

        seat.muted = !seat.muted;
        info!(index, muted = seat.muted, "Mute toggled");
        assert_room_invariants(self);
        Ok(true)
    }

    /// Vacate the seat at `index`.
    ///
    /// Only the current occupant may leave a seat; anyone else gets
    /// [`Error::NotOccupant`]. The seat returns to its empty state with
    /// `muted` reset to true, so the next occupant starts muted.
    pub fn leave_seat(&mut self, index: usize, user_id: Uuid) -> Result<()> {
        let seat = self.seat_mut(index)?;
        if seat.occupant != Some(user_id) {
            return Err(Error::NotOccupant { index });
        }

        seat.occupant = None;
        seat.display_name = None;
        seat.occupied_at = None;
        seat.muted = true;

        info!(index, user_id = %user_id, "Seat vacated");
        assert_room_invariants(self);
        Ok(())
    }

    /// Show a gift overlay. Overwrites any gift already showing.
    pub fn show_gift(&mut self, kind: impl Into<String>) {
        let kind = kind.into();
        info!(gift = %kind, "Gift shown");
        self.active_gift = Some(kind);
    }

    /// Hide the gift overlay, whatever it currently shows
    pub fn clear_gift(&mut self) {
        if self.active_gift.take().is_some() {
            debug!("Gift cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(name: &str) -> UserProfile {
        UserProfile::new(name)
    }

    #[test]
    fn test_new_room_all_seats_empty() {
        let room = RoomState::new("R");
        assert_eq!(room.room_name(), "R");
        assert_eq!(room.seats().len(), SEAT_COUNT);
        assert_eq!(room.occupied_count(), 0);
        assert!(room.active_gift().is_none());
        for (i, seat) in room.seats().iter().enumerate() {
            assert_eq!(seat.id, i);
            assert!(!seat.is_occupied());
            assert!(seat.muted);
        }
    }

    #[test]
    fn test_occupy_empty_seat() {
        let mut room = RoomState::new("R");
        let nour = make_user("Nour");

        assert!(room.occupy_seat(2, &nour).unwrap());

        let seat = room.seat(2).unwrap();
        assert_eq!(seat.occupant, Some(nour.id));
        assert_eq!(seat.display_name.as_deref(), Some("Nour"));
        assert!(seat.muted);
        assert!(seat.occupied_at.is_some());

        // All other seats untouched
        for seat in room.seats().iter().filter(|s| s.id != 2) {
            assert_eq!(*seat, Seat::empty(seat.id));
        }
    }

    #[test]
    fn test_reoccupy_is_noop() {
        let mut room = RoomState::new("R");
        let first = make_user("First");
        let second = make_user("Second");

        assert!(room.occupy_seat(3, &first).unwrap());
        assert!(!room.occupy_seat(3, &second).unwrap());

        let seat = room.seat(3).unwrap();
        assert_eq!(seat.occupant, Some(first.id));
        assert_eq!(seat.display_name.as_deref(), Some("First"));
    }

    #[test]
    fn test_user_can_hold_multiple_seats() {
        let mut room = RoomState::new("R");
        let user = make_user("Greedy");

        assert!(room.occupy_seat(0, &user).unwrap());
        assert!(room.occupy_seat(5, &user).unwrap());
        assert_eq!(room.occupied_count(), 2);
    }

    #[test]
    fn test_toggle_mute_involution() {
        let mut room = RoomState::new("R");
        room.occupy_seat(1, &make_user("A")).unwrap();

        assert!(room.seat(1).unwrap().muted);
        assert!(room.toggle_mute(1).unwrap());
        assert!(!room.seat(1).unwrap().muted);
        assert!(room.toggle_mute(1).unwrap());
        assert!(room.seat(1).unwrap().muted);
    }

    #[test]
    fn test_toggle_mute_empty_seat_noop() {
        let mut room = RoomState::new("R");
        assert!(!room.toggle_mute(4).unwrap());
        assert_eq!(*room.seat(4).unwrap(), Seat::empty(4));
    }

    #[test]
    fn test_occupy_preserves_mute_state() {
        // Leaving resets muted, so a fresh occupant always starts muted
        let mut room = RoomState::new("R");
        let a = make_user("A");
        room.occupy_seat(0, &a).unwrap();
        room.toggle_mute(0).unwrap();
        room.leave_seat(0, a.id).unwrap();

        room.occupy_seat(0, &make_user("B")).unwrap();
        assert!(room.seat(0).unwrap().muted);
    }

    #[test]
    fn test_leave_seat_by_occupant() {
        let mut room = RoomState::new("R");
        let user = make_user("A");
        room.occupy_seat(6, &user).unwrap();

        room.leave_seat(6, user.id).unwrap();
        assert_eq!(*room.seat(6).unwrap(), Seat::empty(6));
    }

    #[test]
    fn test_leave_seat_by_stranger_rejected() {
        let mut room = RoomState::new("R");
        let user = make_user("A");
        let stranger = make_user("B");
        room.occupy_seat(6, &user).unwrap();

        let err = room.leave_seat(6, stranger.id).unwrap_err();
        assert_eq!(err, Error::NotOccupant { index: 6 });
        assert_eq!(room.seat(6).unwrap().occupant, Some(user.id));
    }

    #[test]
    fn test_leave_empty_seat_rejected() {
        let mut room = RoomState::new("R");
        let err = room.leave_seat(0, Uuid::new_v4()).unwrap_err();
        assert_eq!(err, Error::NotOccupant { index: 0 });
    }

    #[test]
    fn test_out_of_range_index() {
        let mut room = RoomState::new("R");
        let user = make_user("A");

        for index in [SEAT_COUNT, SEAT_COUNT + 1, usize::MAX] {
            assert!(matches!(
                room.occupy_seat(index, &user),
                Err(Error::InvalidSeatIndex { .. })
            ));
            assert!(matches!(
                room.toggle_mute(index),
                Err(Error::InvalidSeatIndex { .. })
            ));
            assert!(matches!(
                room.leave_seat(index, user.id),
                Err(Error::InvalidSeatIndex { .. })
            ));
            assert!(matches!(
                room.seat(index),
                Err(Error::InvalidSeatIndex { .. })
            ));
        }
    }

    #[test]
    fn test_gift_show_and_clear() {
        let mut room = RoomState::new("R");
        assert!(room.active_gift().is_none());

        room.show_gift("Rose");
        assert_eq!(room.active_gift(), Some("Rose"));

        room.show_gift("Crown");
        assert_eq!(room.active_gift(), Some("Crown"));

        room.clear_gift();
        assert!(room.active_gift().is_none());

        // Clearing an idle overlay is harmless
        room.clear_gift();
        assert!(room.active_gift().is_none());
    }

    #[test]
    fn test_room_name_never_mutated() {
        let mut room = RoomState::new("Friends Lounge");
        let user = make_user("A");
        room.occupy_seat(0, &user).unwrap();
        room.toggle_mute(0).unwrap();
        room.show_gift("Rose");
        room.clear_gift();
        room.leave_seat(0, user.id).unwrap();
        assert_eq!(room.room_name(), "Friends Lounge");
    }
}
