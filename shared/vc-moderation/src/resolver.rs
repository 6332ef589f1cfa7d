//! Permission resolution.
//!
//! Computes effective permissions for a member in a guild or channel context,
//! and defines the seams through which callers hand scoped resolvers to the
//! checks.

use std::fmt;

use uuid::Uuid;
use vc_common::{Error, User};

use crate::guild::GuildPermissions;
use crate::models::{Channel, ChannelOverride, Guild, GuildRole, Member, Thread};
use crate::rank::{self, Rank};

/// Resolves a member's effective permissions inside one channel.
///
/// Implementations may reach out to the platform and fail; the checks turn
/// any error into a denial.
pub trait ScopedPermissions: fmt::Debug + Send + Sync {
    fn permissions_for(&self, member: &Member) -> vc_common::Result<GuildPermissions>;
}

/// Anything that can be passed as the scoped context of a check.
pub trait PermissionScope {
    /// Id of the channel or thread.
    fn scope_id(&self) -> Uuid;

    /// The resolver for this scope, if it exposes one.
    fn resolver(&self) -> Option<&dyn ScopedPermissions>;

    /// Effective permissions of `member` in this scope.
    fn permissions_for(&self, member: &Member) -> vc_common::Result<GuildPermissions> {
        self.resolver()
            .ok_or_else(|| Error::NoResolver(self.scope_id()))?
            .permissions_for(member)
    }
}

impl PermissionScope for Channel {
    fn scope_id(&self) -> Uuid {
        self.id
    }

    fn resolver(&self) -> Option<&dyn ScopedPermissions> {
        self.scope.as_deref()
    }
}

impl PermissionScope for Thread {
    fn scope_id(&self) -> Uuid {
        self.id
    }

    fn resolver(&self) -> Option<&dyn ScopedPermissions> {
        self.parent.as_ref().and_then(|parent| parent.scope.as_deref())
    }
}

/// Scoped context handed to a check: a channel or a thread.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    Channel(&'a Channel),
    Thread(&'a Thread),
}

impl<'a> From<&'a Channel> for Scope<'a> {
    fn from(channel: &'a Channel) -> Self {
        Self::Channel(channel)
    }
}

impl<'a> From<&'a Thread> for Scope<'a> {
    fn from(thread: &'a Thread) -> Self {
        Self::Thread(thread)
    }
}

impl PermissionScope for Scope<'_> {
    fn scope_id(&self) -> Uuid {
        match self {
            Self::Channel(channel) => channel.scope_id(),
            Self::Thread(thread) => thread.scope_id(),
        }
    }

    fn resolver(&self) -> Option<&dyn ScopedPermissions> {
        match self {
            Self::Channel(channel) => channel.resolver(),
            Self::Thread(thread) => thread.resolver(),
        }
    }
}

/// Compute guild permissions for a user.
///
/// Resolution order:
/// 1. Guild owner has all permissions
/// 2. Start with @everyone role permissions
/// 3. Add permissions from assigned roles (by position)
/// 4. `ADMINISTRATOR` grants everything and ignores overrides
/// 5. Apply channel overrides if channel context provided
pub fn compute_guild_permissions(
    user_id: Uuid,
    guild_owner_id: Uuid,
    everyone_permissions: GuildPermissions,
    user_roles: &[GuildRole],
    channel_overrides: Option<&[ChannelOverride]>,
) -> GuildPermissions {
    // Guild owner has everything
    if guild_owner_id == user_id {
        return GuildPermissions::all();
    }

    let mut perms = everyone_permissions;

    let mut sorted_roles: Vec<_> = user_roles.iter().collect();
    sorted_roles.sort_by_key(|r| r.position);

    for role in sorted_roles {
        perms |= role.permissions;
    }

    if perms.is_administrator() {
        return GuildPermissions::all();
    }

    if let Some(overrides) = channel_overrides {
        let role_ids: Vec<Uuid> = user_roles.iter().map(|r| r.id).collect();
        perms = apply_overrides(perms, &role_ids, overrides);
    }

    perms
}

/// Apply role overrides on top of a base permission set.
///
/// Allows and denies from every matching role are merged; deny wins regardless
/// of role iteration order.
fn apply_overrides<'a>(
    base: GuildPermissions,
    role_ids: &[Uuid],
    overrides: impl IntoIterator<Item = &'a ChannelOverride>,
) -> GuildPermissions {
    let mut role_allow = GuildPermissions::empty();
    let mut role_deny = GuildPermissions::empty();

    for ovr in overrides
        .into_iter()
        .filter(|o| role_ids.contains(&o.role_id))
    {
        role_allow |= ovr.allow_permissions;
        role_deny |= ovr.deny_permissions;
    }

    (base | role_allow) & !role_deny
}

/// Build a member snapshot from the member's roles.
///
/// The member's rank is that of its highest role, or of @everyone when it has
/// none. Permissions stay unresolved when the guild owner is unknown.
pub fn resolve_member(
    user: User,
    guild: &Guild,
    everyone: &GuildRole,
    roles: &[GuildRole],
) -> Member {
    let permissions = guild.owner_id.map(|owner_id| {
        compute_guild_permissions(user.id, owner_id, everyone.permissions, roles, None)
    });
    let top_role = rank::highest(roles).or_else(|| Some(Rank::of(everyone)));

    Member {
        user,
        role_ids: roles.iter().map(|r| r.id).collect(),
        permissions,
        top_role,
    }
}

/// Channel overrides table, usable as a channel's scoped resolver.
///
/// Only overrides recorded for `channel_id` apply; the table may hold rows
/// for other channels.
#[derive(Debug, Clone)]
pub struct ChannelOverrides {
    channel_id: Uuid,
    guild_owner_id: Uuid,
    overrides: Vec<ChannelOverride>,
}

impl ChannelOverrides {
    #[must_use]
    pub const fn new(
        channel_id: Uuid,
        guild_owner_id: Uuid,
        overrides: Vec<ChannelOverride>,
    ) -> Self {
        Self {
            channel_id,
            guild_owner_id,
            overrides,
        }
    }
}

impl ScopedPermissions for ChannelOverrides {
    fn permissions_for(&self, member: &Member) -> vc_common::Result<GuildPermissions> {
        if member.id() == self.guild_owner_id {
            return Ok(GuildPermissions::all());
        }

        let base = member
            .permissions
            .ok_or(Error::Incomplete("member permissions"))?;
        if base.is_administrator() {
            return Ok(GuildPermissions::all());
        }

        let overrides = self
            .overrides
            .iter()
            .filter(|o| o.channel_id == self.channel_id);
        Ok(apply_overrides(base, &member.role_ids, overrides))
    }
}
