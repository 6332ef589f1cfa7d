//! Voice moderation: move, mute, and deafen members.
//!
//! Same rules as the other hierarchy-gated member actions; the target checks
//! run before the moderator's permissions are looked at.

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Channel, Guild, Member};
use crate::resolver::PermissionScope;

use super::{
    allowed, require_not_admin, require_not_owner, require_not_self, require_outranks,
    require_permission, require_scoped, top_role,
};

pub(crate) fn check_voice_action(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    voice_channel: Option<&dyn PermissionScope>,
    permission: GuildPermissions,
) -> Result<(), Denial> {
    require_not_owner(member, guild)?;
    require_not_self(member, moderator)?;
    require_outranks(moderator, top_role(member)?)?;
    require_not_admin(member)?;
    require_permission(moderator, permission)?;
    if let Some(scope) = voice_channel {
        require_scoped(scope, moderator, permission)?;
    }
    Ok(())
}

pub fn check_voice_move(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    voice_channel: Option<&Channel>,
) -> Result<(), Denial> {
    check_voice_action(
        member,
        moderator,
        guild,
        voice_channel.map(|c| c as &dyn PermissionScope),
        GuildPermissions::VOICE_MOVE_MEMBERS,
    )
}

pub fn check_voice_mute(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    voice_channel: Option<&Channel>,
) -> Result<(), Denial> {
    check_voice_action(
        member,
        moderator,
        guild,
        voice_channel.map(|c| c as &dyn PermissionScope),
        GuildPermissions::VOICE_MUTE_OTHERS,
    )
}

pub fn check_voice_deafen(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    voice_channel: Option<&Channel>,
) -> Result<(), Denial> {
    check_voice_action(
        member,
        moderator,
        guild,
        voice_channel.map(|c| c as &dyn PermissionScope),
        GuildPermissions::VOICE_DEAFEN_OTHERS,
    )
}

/// Checks if a member can be moved between voice channels.
pub fn voice_manageable(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    voice_channel: Option<&Channel>,
) -> bool {
    allowed(
        ModerationAction::VoiceMove,
        check_voice_move(member, moderator, guild, voice_channel),
    )
}

/// Checks if a member can be server-muted in voice.
pub fn voice_mutable(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    voice_channel: Option<&Channel>,
) -> bool {
    allowed(
        ModerationAction::VoiceMute,
        check_voice_mute(member, moderator, guild, voice_channel),
    )
}

/// Checks if a member can be server-deafened in voice.
pub fn voice_deafenable(
    member: &Member,
    moderator: &Member,
    guild: &Guild,
    voice_channel: Option<&Channel>,
) -> bool {
    allowed(
        ModerationAction::VoiceDeafen,
        check_voice_deafen(member, moderator, guild, voice_channel),
    )
}
