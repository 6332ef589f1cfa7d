//! Entity snapshots consumed by the moderation checks.
//!
//! Every snapshot is supplied by the caller and read once. Attributes the
//! platform may fail to resolve are `Option`s; a check that needs a `None`
//! attribute denies.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vc_common::User;

use crate::guild::GuildPermissions;
use crate::rank::Rank;
use crate::resolver::ScopedPermissions;

/// Guild the action takes place in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Option<Uuid>,
}

/// A guild member, acting or acted upon.
#[derive(Debug, Clone)]
pub struct Member {
    pub user: User,
    /// Assigned roles, excluding @everyone.
    pub role_ids: Vec<Uuid>,
    /// Effective guild-scope permissions.
    pub permissions: Option<GuildPermissions>,
    /// Rank of the highest assigned role.
    pub top_role: Option<Rank>,
}

impl Member {
    #[must_use]
    pub fn new(user: User, permissions: GuildPermissions, top_role: Rank) -> Self {
        Self {
            user,
            role_ids: Vec::new(),
            permissions: Some(permissions),
            top_role: Some(top_role),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.user.id
    }
}

/// Integration markers on a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTags {
    /// Bot the role was created for.
    pub bot_id: Option<Uuid>,
    /// Integration that manages the role.
    pub integration_id: Option<Uuid>,
    /// Role granted to premium subscribers (boosters).
    pub premium_subscriber: bool,
}

impl RoleTags {
    /// Whether the platform manages membership of this role.
    #[must_use]
    pub const fn is_managed(&self) -> bool {
        self.bot_id.is_some() || self.integration_id.is_some()
    }
}

/// Guild role with permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRole {
    pub id: Uuid,
    pub guild_id: Uuid,
    pub name: String,
    pub permissions: GuildPermissions,
    /// Lower number = higher rank.
    pub position: i32,
    /// The @everyone role.
    pub is_default: bool,
    #[serde(default)]
    pub tags: RoleTags,
    pub created_at: DateTime<Utc>,
}

/// Channel permission override for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelOverride {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub role_id: Uuid,
    pub allow_permissions: GuildPermissions,
    pub deny_permissions: GuildPermissions,
}

/// Kind of a guild channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Text,
    Voice,
    Category,
    Stage,
    Forum,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Category => "category",
            Self::Stage => "stage",
            Self::Forum => "forum",
        };
        f.write_str(name)
    }
}

/// A guild channel.
#[derive(Debug, Clone)]
pub struct Channel {
    pub id: Uuid,
    pub guild_id: Uuid,
    pub kind: ChannelKind,
    /// Resolves a member's permissions inside this channel.
    pub scope: Option<Arc<dyn ScopedPermissions>>,
}

impl Channel {
    /// Channel without a permission resolver.
    #[must_use]
    pub const fn new(id: Uuid, guild_id: Uuid, kind: ChannelKind) -> Self {
        Self {
            id,
            guild_id,
            kind,
            scope: None,
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Arc<dyn ScopedPermissions>) -> Self {
        self.scope = Some(scope);
        self
    }
}

/// A thread. Its permissions are those of the parent channel.
#[derive(Debug, Clone)]
pub struct Thread {
    pub id: Uuid,
    pub guild_id: Uuid,
    /// Member who started the thread.
    pub owner_id: Option<Uuid>,
    pub parent: Option<Channel>,
}

/// Who wrote a message or created an object.
#[derive(Debug, Clone)]
pub enum Author {
    /// Still a member of the guild.
    Member(Member),
    /// Not (or no longer) a member: webhooks, departed users.
    User(User),
}

impl Author {
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Member(member) => member.user.id,
            Self::User(user) => user.id,
        }
    }

    #[must_use]
    pub const fn as_member(&self) -> Option<&Member> {
        match self {
            Self::Member(member) => Some(member),
            Self::User(_) => None,
        }
    }
}

/// A message in a guild channel.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub author: Option<Author>,
    pub channel: Option<Channel>,
}

/// Custom emoji uploaded to a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub id: Uuid,
    pub name: String,
    pub guild_id: Option<Uuid>,
}

/// Sticker uploaded to a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    pub id: Uuid,
    pub name: String,
    pub guild_id: Option<Uuid>,
}

/// Incoming webhook bound to a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: Uuid,
    pub name: String,
    pub guild_id: Option<Uuid>,
    pub channel_id: Option<Uuid>,
}

/// Guild invite link.
#[derive(Debug, Clone)]
pub struct Invite {
    pub code: String,
    /// Guild the invite points to, when the platform reported it.
    pub guild_id: Option<Uuid>,
    pub inviter: Option<Author>,
}

/// Scheduled guild event.
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub id: Uuid,
    pub guild_id: Uuid,
    pub name: String,
    pub creator_id: Option<Uuid>,
    pub creator: Option<Author>,
}
