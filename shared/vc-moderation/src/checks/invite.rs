//! Invite revocation.
//!
//! Needs `MANAGE_GUILD`. Invites created by members at or above the moderator
//! are protected, except the moderator's own invites.

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Guild, Invite, Member};

use super::{allowed, require_outranks, require_permission, top_role};

pub fn check_manage_invite(
    invite: &Invite,
    moderator: &Member,
    guild: &Guild,
) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_GUILD)?;

    if invite.guild_id.is_some_and(|id| id != guild.id) {
        return Err(Denial::GuildMismatch);
    }

    if let Some(inviter) = invite.inviter.as_ref().and_then(|a| a.as_member()) {
        if inviter.id() != moderator.id() {
            require_outranks(moderator, top_role(inviter)?)?;
        }
    }
    Ok(())
}

/// Checks if an invite can be revoked.
pub fn invite_manageable(invite: &Invite, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::ManageInvite,
        check_manage_invite(invite, moderator, guild),
    )
}
