//! Role lifecycle: deleting, editing, and assigning roles.
//!
//! Rules:
//! 1. Must have `MANAGE_ROLES`
//! 2. Cannot touch roles at or above your own top role
//! 3. The @everyone role is off limits
//! 4. Integration and premium subscriber roles cannot be deleted or assigned

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Guild, GuildRole, Member};
use crate::rank::Rank;

use super::{allowed, require_outranks, require_permission};

fn check_role_action(
    role: &GuildRole,
    moderator: &Member,
    exclude_platform_roles: bool,
) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_ROLES)?;
    require_outranks(moderator, Rank::of(role))?;
    if role.is_default {
        return Err(Denial::DefaultRole);
    }
    if exclude_platform_roles {
        if role.tags.is_managed() {
            return Err(Denial::ManagedRole);
        }
        if role.tags.premium_subscriber {
            return Err(Denial::PremiumSubscriberRole);
        }
    }
    Ok(())
}

pub fn check_delete_role(
    role: &GuildRole,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    check_role_action(role, moderator, true)
}

/// Integration roles can still be renamed or recolored.
pub fn check_edit_role(role: &GuildRole, moderator: &Member, _guild: &Guild) -> Result<(), Denial> {
    check_role_action(role, moderator, false)
}

pub fn check_assign_role(
    role: &GuildRole,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    check_role_action(role, moderator, true)
}

/// Checks if a role can be deleted.
pub fn role_deletable(role: &GuildRole, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::DeleteRole,
        check_delete_role(role, moderator, guild),
    )
}

/// Checks if a role can be edited.
pub fn role_editable(role: &GuildRole, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::EditRole,
        check_edit_role(role, moderator, guild),
    )
}

/// Checks if a role can be assigned to members.
pub fn role_assignable(role: &GuildRole, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::AssignRole,
        check_assign_role(role, moderator, guild),
    )
}
