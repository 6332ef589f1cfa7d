//! Hierarchy-gated member actions: kick, ban, timeout, nickname.
//!
//! Rules:
//! 1. Actor must hold the action's permission (and in the scoped channel, when given)
//! 2. Cannot act on the guild owner or on yourself
//! 3. Cannot act on someone with a higher/equal role
//! 4. Cannot act on an administrator (nickname management skips this)

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Guild, Member};
use crate::policy::ModerationPolicy;
use crate::resolver::PermissionScope;

use super::{
    allowed, require_not_admin, require_not_owner, require_not_self, require_outranks,
    require_permission, require_scoped, top_role,
};

pub(crate) fn check_hierarchy_gated(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    permission: GuildPermissions,
    scope: Option<&dyn PermissionScope>,
    exclude_admins: bool,
) -> Result<(), Denial> {
    require_permission(moderator, permission)?;
    if let Some(scope) = scope {
        require_scoped(scope, moderator, permission)?;
    }
    require_not_owner(member, guild)?;
    require_not_self(member, moderator)?;
    require_outranks(moderator, top_role(member)?)?;
    if exclude_admins {
        require_not_admin(member)?;
    }
    Ok(())
}

pub fn check_kick(member: &Member, moderator: &Member, guild: &Guild) -> Result<(), Denial> {
    check_hierarchy_gated(
        member,
        moderator,
        guild,
        GuildPermissions::KICK_MEMBERS,
        None,
        true,
    )
}

pub fn check_ban(member: &Member, moderator: &Member, guild: &Guild) -> Result<(), Denial> {
    check_hierarchy_gated(
        member,
        moderator,
        guild,
        GuildPermissions::BAN_MEMBERS,
        None,
        true,
    )
}

pub fn check_timeout(member: &Member, moderator: &Member, guild: &Guild) -> Result<(), Denial> {
    check_hierarchy_gated(
        member,
        moderator,
        guild,
        GuildPermissions::TIMEOUT_MEMBERS,
        None,
        true,
    )
}

/// Nickname changes. Administrators are fair game unless the policy says otherwise.
pub fn check_manage_nickname(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    policy: &ModerationPolicy,
) -> Result<(), Denial> {
    check_hierarchy_gated(
        member,
        moderator,
        guild,
        GuildPermissions::MANAGE_NICKNAMES,
        None,
        policy.protect_admin_nicknames,
    )
}

/// Checks if a member can be kicked by the moderator.
pub fn kickable(member: &Member, moderator: &Member, guild: &Guild) -> bool {
    allowed(ModerationAction::Kick, check_kick(member, moderator, guild))
}

/// Checks if a member can be banned by the moderator.
pub fn bannable(member: &Member, moderator: &Member, guild: &Guild) -> bool {
    allowed(ModerationAction::Ban, check_ban(member, moderator, guild))
}

/// Checks if a member can be put in timeout by the moderator.
pub fn mutable(member: &Member, moderator: &Member, guild: &Guild) -> bool {
    allowed(ModerationAction::Timeout, check_timeout(member, moderator, guild))
}

/// Checks if a member's nickname can be changed by the moderator.
pub fn manageable(member: &Member, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::ManageNickname,
        check_manage_nickname(member, moderator, guild, &ModerationPolicy::default()),
    )
}
