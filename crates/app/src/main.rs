//! Majlis - voice room screen shell
//!
//! Builds the room state once at startup, subscribes a logging observer
//! to it, and drives a short local session. There is no networking: the
//! room is a single-process, in-memory screen.

use majlis_core::UserProfile;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod state;
mod viewmodel;

use config::AppConfig;
use state::RoomHandle;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Majlis");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // The local identity is a constant for the whole session
    let current_user = UserProfile::new(config.user_display_name.clone());
    info!(user_id = %current_user.id, name = %current_user.display_name, "Local user");

    let room = RoomHandle::new(config.room_name.clone(), config.gift_duration());

    // Observer: re-render (log) the screen on every state change
    let mut rx = room.subscribe();
    let user_id = current_user.id;
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            info!("{}", viewmodel::header_line(&snapshot));
            for item in viewmodel::seat_items(&snapshot, Some(user_id)) {
                if item.occupied {
                    debug!(
                        index = item.index,
                        label = %item.label,
                        muted = item.muted,
                        is_you = item.is_you,
                        "Seat"
                    );
                }
            }
            if let Some(banner) = viewmodel::gift_banner(&snapshot) {
                info!("{banner}");
            }
        }
    });

    // Local session: take a seat, open the mic, send a gift
    if let Err(e) = room.occupy_seat(0, &current_user) {
        error!("Could not take a seat: {}", e);
    }
    if let Err(e) = room.toggle_mute(0) {
        error!("Could not toggle the mic: {}", e);
    }
    room.trigger_gift("Golden Crown");

    info!("Room is live, press Ctrl-C to leave");
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }

    info!("Shutting down");
}
