//! Moderation checks, one module per rule family.
//!
//! Every check comes in two forms: `check_*` returns the first [`Denial`] it
//! hits, and the matching predicate (`kickable`, `bannable`, ...) collapses
//! that into a plain `bool`.

mod asset;
mod bot;
mod channel;
mod event;
mod invite;
mod member;
mod message;
mod role;
mod stage;
mod thread;
mod voice;

pub use asset::{
    check_manage_emoji, check_manage_sticker, check_manage_webhook, emoji_manageable,
    sticker_manageable, webhook_manageable,
};
pub use bot::bot_verified;
pub use channel::{
    check_delete_channel, check_delete_thread, check_edit_channel, deletable, editable,
    thread_deletable,
};
pub use event::{check_manage_event, event_manageable};
pub use invite::{check_manage_invite, invite_manageable};
pub use member::{
    bannable, check_ban, check_kick, check_manage_nickname, check_timeout, kickable, manageable,
    mutable,
};
pub use message::{check_delete_message, message_deletable};
pub use role::{
    check_assign_role, check_delete_role, check_edit_role, role_assignable, role_deletable,
    role_editable,
};
pub use stage::{check_manage_stage, check_stage_speak, stage_manageable, stage_speakable};
pub use thread::{check_manage_thread, thread_manageable};
pub use voice::{
    check_voice_deafen, check_voice_move, check_voice_mute, voice_deafenable, voice_manageable,
    voice_mutable,
};

pub(crate) use member::check_hierarchy_gated;
pub(crate) use voice::check_voice_action;

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Guild, Member};
use crate::rank::Rank;
use crate::resolver::PermissionScope;

/// Collapse a check into a yes/no answer, recording why it said no.
pub(crate) fn allowed(action: ModerationAction, result: Result<(), Denial>) -> bool {
    match result {
        Ok(()) => true,
        Err(denial) if denial.is_fail_closed() => {
            tracing::debug!(%action, reason = %denial, "moderation check failed closed");
            false
        }
        Err(denial) => {
            tracing::trace!(%action, reason = %denial, "moderation check denied");
            false
        }
    }
}

fn guild_permissions(member: &Member) -> Result<GuildPermissions, Denial> {
    member
        .permissions
        .ok_or(Denial::Incomplete("member permissions"))
}

fn top_role(member: &Member) -> Result<Rank, Denial> {
    member.top_role.ok_or(Denial::Incomplete("member top role"))
}

/// Actor must hold `permission` at guild scope.
fn require_permission(actor: &Member, permission: GuildPermissions) -> Result<(), Denial> {
    if guild_permissions(actor)?.has(permission) {
        Ok(())
    } else {
        Err(Denial::MissingPermission(permission))
    }
}

/// Actor must hold `permission` inside `scope`.
pub(crate) fn require_scoped(
    scope: &dyn PermissionScope,
    actor: &Member,
    permission: GuildPermissions,
) -> Result<(), Denial> {
    if scope.permissions_for(actor)?.has(permission) {
        Ok(())
    } else {
        Err(Denial::MissingScopedPermission(permission))
    }
}

/// Deny when `target` sits at or above the actor.
fn require_outranks(actor: &Member, target: Rank) -> Result<(), Denial> {
    let actor = top_role(actor)?;
    if target.dominates(&actor) {
        Err(Denial::RoleHierarchy { actor, target })
    } else {
        Ok(())
    }
}

fn require_not_owner(target: &Member, guild: &Guild) -> Result<(), Denial> {
    let owner_id = guild.owner_id.ok_or(Denial::Incomplete("guild owner"))?;
    if target.id() == owner_id {
        Err(Denial::CannotModerateOwner)
    } else {
        Ok(())
    }
}

fn require_not_self(target: &Member, actor: &Member) -> Result<(), Denial> {
    if target.id() == actor.id() {
        Err(Denial::CannotModerateSelf)
    } else {
        Ok(())
    }
}

fn require_not_admin(target: &Member) -> Result<(), Denial> {
    if guild_permissions(target)?.is_administrator() {
        Err(Denial::TargetIsAdministrator)
    } else {
        Ok(())
    }
}

/// Deny when the object is scoped to another guild (or to none known).
fn require_same_guild(
    object_guild_id: Option<uuid::Uuid>,
    guild: &Guild,
    what: &'static str,
) -> Result<(), Denial> {
    match object_guild_id {
        Some(id) if id == guild.id => Ok(()),
        Some(_) => Err(Denial::GuildMismatch),
        None => Err(Denial::Incomplete(what)),
    }
}
