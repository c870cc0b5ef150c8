//! User identity model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity shown in the room, supplied by the application shell.
///
/// There is no account system: the shell hands the room a profile with a
/// stable id and a display name, and the room treats both as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub display_name: String,
}

impl UserProfile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
        }
    }
}
