//! Application state management
//!
//! [`RoomHandle`] is the one explicitly-constructed state container for
//! the room screen. It wraps the core [`RoomState`] behind a mutex,
//! republishes a snapshot to watch subscribers after every mutation, and
//! owns the one-shot timer that hides a triggered gift.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use majlis_core::{Result, RoomState, UserProfile};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Shared handle to the room state.
///
/// Cheap to clone; all clones point at the same room. Constructed once
/// at application start and lives for the process lifetime.
#[derive(Clone)]
pub struct RoomHandle {
    room: Arc<Mutex<RoomState>>,
    tx: Arc<watch::Sender<RoomState>>,
    /// Pending gift-clear timer, replaced on every trigger
    gift_timer: Arc<Mutex<Option<JoinHandle<()>>>>,
    gift_duration: Duration,
}

impl RoomHandle {
    pub fn new(room_name: impl Into<String>, gift_duration: Duration) -> Self {
        let room = RoomState::new(room_name);
        let (tx, _rx) = watch::channel(room.clone());
        Self {
            room: Arc::new(Mutex::new(room)),
            tx: Arc::new(tx),
            gift_timer: Arc::new(Mutex::new(None)),
            gift_duration,
        }
    }

    /// Subscribe to state changes. Every mutation publishes a snapshot.
    pub fn subscribe(&self) -> watch::Receiver<RoomState> {
        self.tx.subscribe()
    }

    /// Current state, copied out
    pub fn snapshot(&self) -> RoomState {
        self.room.lock().unwrap().clone()
    }

    pub fn occupy_seat(&self, index: usize, profile: &UserProfile) -> Result<bool> {
        let taken = self.room.lock().unwrap().occupy_seat(index, profile)?;
        self.publish();
        Ok(taken)
    }

    pub fn toggle_mute(&self, index: usize) -> Result<bool> {
        let toggled = self.room.lock().unwrap().toggle_mute(index)?;
        self.publish();
        Ok(toggled)
    }

    pub fn leave_seat(&self, index: usize, user_id: Uuid) -> Result<()> {
        self.room.lock().unwrap().leave_seat(index, user_id)?;
        self.publish();
        Ok(())
    }

    /// Show a gift and schedule it to disappear after the configured
    /// duration.
    ///
    /// Re-triggering while a gift is showing replaces the label and
    /// cancels the earlier clear timer, so each gift gets a full display
    /// window regardless of what was showing before.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger_gift(&self, kind: impl Into<String>) {
        self.room.lock().unwrap().show_gift(kind);
        self.publish();

        let mut timer = self.gift_timer.lock().unwrap();
        if let Some(previous) = timer.take() {
            debug!("Cancelling pending gift clear");
            previous.abort();
        }

        let handle = self.clone();
        let duration = self.gift_duration;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            handle.room.lock().unwrap().clear_gift();
            handle.publish();
        }));
    }

    fn publish(&self) {
        let snapshot = self.room.lock().unwrap().clone();
        self.tx.send_replace(snapshot);
    }
}
