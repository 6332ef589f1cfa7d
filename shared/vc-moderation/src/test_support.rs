//! Fixture builders shared by the unit tests.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use vc_common::User;

use crate::guild::GuildPermissions;
use crate::models::{Channel, ChannelKind, Guild, GuildRole, Member, RoleTags};
use crate::rank::Rank;
use crate::resolver::ScopedPermissions;

pub fn user(name: &str) -> User {
    User::new(Uuid::now_v7(), name)
}

pub fn role_with(position: i32, permissions: GuildPermissions) -> GuildRole {
    GuildRole {
        id: Uuid::now_v7(),
        guild_id: Uuid::now_v7(),
        name: format!("role-{position}"),
        permissions,
        position,
        is_default: false,
        tags: RoleTags::default(),
        created_at: Utc::now(),
    }
}

pub fn role_at(position: i32) -> GuildRole {
    role_with(position, GuildPermissions::empty())
}

/// Member whose top role is `top`.
pub fn member(permissions: GuildPermissions, top: &GuildRole) -> Member {
    let mut member = Member::new(user("member"), permissions, Rank::of(top));
    member.role_ids = vec![top.id];
    member
}

pub fn guild_owned_by(owner_id: Uuid) -> Guild {
    Guild {
        id: Uuid::now_v7(),
        name: "Test Guild".to_string(),
        owner_id: Some(owner_id),
    }
}

/// Resolver returning the same permissions for everyone.
#[derive(Debug)]
pub struct StaticScope(pub GuildPermissions);

impl ScopedPermissions for StaticScope {
    fn permissions_for(&self, _member: &Member) -> vc_common::Result<GuildPermissions> {
        Ok(self.0)
    }
}

/// Resolver that cannot reach the platform.
#[derive(Debug)]
pub struct FailingScope;

impl ScopedPermissions for FailingScope {
    fn permissions_for(&self, _member: &Member) -> vc_common::Result<GuildPermissions> {
        Err(vc_common::Error::Unavailable("gateway timeout".to_string()))
    }
}

/// Channel whose resolver grants `permissions`.
pub fn channel(guild: &Guild, kind: ChannelKind, permissions: GuildPermissions) -> Channel {
    Channel::new(Uuid::now_v7(), guild.id, kind).with_scope(Arc::new(StaticScope(permissions)))
}

/// Channel whose resolver always fails.
pub fn failing_channel(guild: &Guild, kind: ChannelKind) -> Channel {
    Channel::new(Uuid::now_v7(), guild.id, kind).with_scope(Arc::new(FailingScope))
}
