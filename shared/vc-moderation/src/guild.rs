//! Capability set checked by the moderation rules.
//!
//! Bit layout matches the platform's stored role permissions:
//! - bits 0-4: content
//! - bits 5-9: voice, including the voice moderation flags
//! - bits 10-14: member moderation
//! - bits 15-23: guild management
//! - bit 63: administrator

use bitflags::bitflags;

bitflags! {
    /// Permissions a member holds, at guild scope or inside one channel.
    ///
    /// The moderation layer treats the set as an opaque capability set: it only
    /// ever asks whether a flag is contained.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct GuildPermissions: u64 {
        // === Content (bits 0-4) ===
        // Member-facing; no moderation check reads these.
        const SEND_MESSAGES      = 1 << 0;
        const EMBED_LINKS        = 1 << 1;
        const ATTACH_FILES       = 1 << 2;
        const USE_EMOJI          = 1 << 3;
        const ADD_REACTIONS      = 1 << 4;

        // === Voice (bits 5-9) ===
        const VOICE_CONNECT      = 1 << 5;
        const VOICE_SPEAK        = 1 << 6;
        /// Server-mute in voice; also gates inviting someone to speak on a stage
        const VOICE_MUTE_OTHERS  = 1 << 7;
        /// Server-deafen in voice
        const VOICE_DEAFEN_OTHERS = 1 << 8;
        /// Drag members into another voice channel
        const VOICE_MOVE_MEMBERS = 1 << 9;

        // === Moderation (bits 10-14) ===
        /// Delete messages written by someone else
        const MANAGE_MESSAGES    = 1 << 10;
        /// Put lower-ranked members in timeout
        const TIMEOUT_MEMBERS    = 1 << 11;
        /// Kick lower-ranked members
        const KICK_MEMBERS       = 1 << 12;
        /// Ban lower-ranked members
        const BAN_MEMBERS        = 1 << 13;
        /// Change nicknames of lower-ranked members
        const MANAGE_NICKNAMES   = 1 << 14;

        // === Guild Management (bits 15-23) ===
        /// Delete or edit channels and categories; edit stages
        const MANAGE_CHANNELS    = 1 << 15;
        /// Manage threads someone else started; required to delete any thread
        const MANAGE_THREADS     = 1 << 16;
        /// Delete, edit, or assign roles below your own
        const MANAGE_ROLES       = 1 << 17;
        /// Guild settings; revoking invites
        const MANAGE_GUILD       = 1 << 18;
        /// Rename or delete this guild's emoji and stickers
        const MANAGE_EMOJIS_AND_STICKERS = 1 << 19;
        /// Edit or delete this guild's webhooks
        const MANAGE_WEBHOOKS    = 1 << 20;
        /// Edit or cancel scheduled events
        const MANAGE_EVENTS      = 1 << 21;
        const VIEW_AUDIT_LOG     = 1 << 22;
        const CREATE_INVITE      = 1 << 23;

        // === Administrator (bit 63) ===
        /// Grants every permission and bypasses channel overrides
        const ADMINISTRATOR      = 1 << 63;
    }
}

impl GuildPermissions {
    // === Preset Combinations ===

    /// What @everyone gets in a fresh guild. Carries no moderation power.
    pub const EVERYONE_DEFAULT: Self = Self::SEND_MESSAGES
        .union(Self::EMBED_LINKS)
        .union(Self::ATTACH_FILES)
        .union(Self::USE_EMOJI)
        .union(Self::ADD_REACTIONS)
        .union(Self::VOICE_CONNECT)
        .union(Self::VOICE_SPEAK)
        .union(Self::CREATE_INVITE);

    /// Moderator preset: voice moderation, message cleanup, timeouts, kicks,
    /// nicknames and threads.
    pub const MODERATOR_DEFAULT: Self = Self::EVERYONE_DEFAULT
        .union(Self::VOICE_MUTE_OTHERS)
        .union(Self::VOICE_DEAFEN_OTHERS)
        .union(Self::VOICE_MOVE_MEMBERS)
        .union(Self::MANAGE_MESSAGES)
        .union(Self::TIMEOUT_MEMBERS)
        .union(Self::KICK_MEMBERS)
        .union(Self::MANAGE_NICKNAMES)
        .union(Self::MANAGE_THREADS)
        .union(Self::VIEW_AUDIT_LOG);

    /// Officer preset: moderator plus bans and channel, role, asset, webhook
    /// and event management. Never `MANAGE_GUILD`.
    pub const OFFICER_DEFAULT: Self = Self::MODERATOR_DEFAULT
        .union(Self::BAN_MEMBERS)
        .union(Self::MANAGE_CHANNELS)
        .union(Self::MANAGE_ROLES)
        .union(Self::MANAGE_EMOJIS_AND_STICKERS)
        .union(Self::MANAGE_WEBHOOKS)
        .union(Self::MANAGE_EVENTS);

    /// Whether every flag in `permission` is held.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_moderation::GuildPermissions;
    ///
    /// let perms = GuildPermissions::KICK_MEMBERS | GuildPermissions::MANAGE_MESSAGES;
    /// assert!(perms.has(GuildPermissions::KICK_MEMBERS));
    /// assert!(!perms.has(GuildPermissions::BAN_MEMBERS));
    /// ```
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }

    /// Whether this set carries the administrator capability.
    #[must_use]
    pub const fn is_administrator(self) -> bool {
        self.contains(Self::ADMINISTRATOR)
    }
}

impl Default for GuildPermissions {
    fn default() -> Self {
        Self::empty()
    }
}
