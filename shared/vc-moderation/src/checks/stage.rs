//! Stage channels: managing the stage and inviting members to speak.

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Channel, ChannelKind, Guild, Member};
use crate::policy::ModerationPolicy;

use super::{allowed, require_outranks, require_permission, require_scoped, top_role};

fn require_stage(channel: &Channel) -> Result<(), Denial> {
    if channel.kind == ChannelKind::Stage {
        Ok(())
    } else {
        Err(Denial::WrongChannelKind {
            expected: ChannelKind::Stage,
            actual: channel.kind,
        })
    }
}

pub fn check_manage_stage(
    stage: &Channel,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    require_stage(stage)?;
    require_permission(moderator, GuildPermissions::MANAGE_CHANNELS)?;
    require_scoped(stage, moderator, GuildPermissions::MANAGE_CHANNELS)
}

/// Granting speech on a stage is gated by the stage's mute permission.
///
/// Moderators cannot grant it to themselves unless the policy allows it.
pub fn check_stage_speak(
    member: &Member,
    moderator: &Member,
    stage: &Channel,
    policy: &ModerationPolicy,
) -> Result<(), Denial> {
    require_stage(stage)?;
    require_scoped(stage, moderator, GuildPermissions::VOICE_MUTE_OTHERS)?;
    if member.id() == moderator.id() {
        return if policy.allow_self_stage_speak {
            Ok(())
        } else {
            Err(Denial::CannotModerateSelf)
        };
    }
    require_outranks(moderator, top_role(member)?)
}

/// Checks if a stage channel can be managed.
pub fn stage_manageable(stage: &Channel, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::ManageStage,
        check_manage_stage(stage, moderator, guild),
    )
}

/// Checks if a member can be invited to speak on a stage.
pub fn stage_speakable(member: &Member, moderator: &Member, stage: &Channel) -> bool {
    allowed(
        ModerationAction::AllowStageSpeak,
        check_stage_speak(member, moderator, stage, &ModerationPolicy::default()),
    )
}
