//! Reasons a moderation check denies.

use crate::guild::GuildPermissions;
use crate::models::ChannelKind;
use crate::rank::Rank;

/// Why a moderation action is not allowed.
///
/// Missing data and resolver faults are denials like any other: nothing here
/// ever grants an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    /// Actor lacks a guild-scope permission.
    #[error("Missing permission: {0:?}")]
    MissingPermission(GuildPermissions),

    /// Actor lacks a permission in the scoped channel.
    #[error("Missing channel permission: {0:?}")]
    MissingScopedPermission(GuildPermissions),

    /// Target is the guild owner.
    #[error("Cannot moderate guild owner")]
    CannotModerateOwner,

    /// Target is the actor.
    #[error("Cannot moderate yourself")]
    CannotModerateSelf,

    /// Target ranks at or above the actor.
    #[error(
        "Cannot act on position {} (your position: {})",
        .target.position(),
        .actor.position()
    )]
    RoleHierarchy { actor: Rank, target: Rank },

    /// Target member holds the administrator permission.
    #[error("Cannot moderate an administrator")]
    TargetIsAdministrator,

    /// Target is the @everyone role.
    #[error("Cannot modify the default role")]
    DefaultRole,

    /// Target role is managed by a bot or integration.
    #[error("Role is managed by an integration")]
    ManagedRole,

    /// Target role is the premium subscriber role.
    #[error("Role is reserved for premium subscribers")]
    PremiumSubscriberRole,

    /// Target belongs to another guild.
    #[error("Target belongs to another guild")]
    GuildMismatch,

    /// Channel is not of the kind the action applies to.
    #[error("Expected a {expected} channel, got {actual}")]
    WrongChannelKind {
        expected: ChannelKind,
        actual: ChannelKind,
    },

    /// Target kind does not fit the action.
    #[error("Action {action} cannot target a {target}")]
    TargetMismatch {
        action: &'static str,
        target: &'static str,
    },

    /// A required attribute could not be resolved.
    #[error("Missing attribute: {0}")]
    Incomplete(&'static str),

    /// A scoped permission resolver failed.
    #[error("Permission resolution failed: {0}")]
    Resolve(#[from] vc_common::Error),
}

impl Denial {
    /// Whether the denial stems from missing information rather than a rule.
    #[must_use]
    pub const fn is_fail_closed(&self) -> bool {
        matches!(self, Self::Incomplete(_) | Self::Resolve(_))
    }
}
