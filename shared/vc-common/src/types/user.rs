//! User Types

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

bitflags! {
    /// Public account flags assigned by the platform.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct UserFlags: u32 {
        /// Platform staff account
        const STAFF        = 1 << 0;
        /// Early supporter badge
        const EARLY_SUPPORTER = 1 << 1;
        /// Bot reviewed and verified by the platform
        const VERIFIED_BOT = 1 << 2;
        /// Developer of a verified bot
        const VERIFIED_BOT_DEVELOPER = 1 << 3;
    }
}

impl Default for UserFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// User snapshot as seen by the moderation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Uuid,
    /// Username (unique).
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Whether this is an automated (bot) account.
    #[serde(default)]
    pub bot: bool,
    /// Public flags, `None` when they could not be fetched.
    #[serde(default)]
    pub public_flags: Option<UserFlags>,
}

impl User {
    /// Create a human user with no public flags.
    #[must_use]
    pub fn new(id: Uuid, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id,
            display_name: username.clone(),
            username,
            bot: false,
            public_flags: Some(UserFlags::empty()),
        }
    }

    /// Create a bot account with the given public flags.
    #[must_use]
    pub fn bot(id: Uuid, username: impl Into<String>, flags: UserFlags) -> Self {
        Self {
            bot: true,
            public_flags: Some(flags),
            ..Self::new(id, username)
        }
    }
}
