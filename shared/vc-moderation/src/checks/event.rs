//! Scheduled event management.

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Guild, Member, ScheduledEvent};

use super::{allowed, require_outranks, require_permission, top_role};

/// Needs `MANAGE_EVENTS`. Creators manage their own events; events created by
/// members at or above the moderator are protected.
pub fn check_manage_event(
    event: &ScheduledEvent,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_EVENTS)?;
    if event.creator_id == Some(moderator.id()) {
        return Ok(());
    }
    if let Some(creator) = event.creator.as_ref().and_then(|a| a.as_member()) {
        require_outranks(moderator, top_role(creator)?)?;
    }
    Ok(())
}

/// Checks if a scheduled event can be edited or cancelled.
pub fn event_manageable(event: &ScheduledEvent, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::ManageEvent,
        check_manage_event(event, moderator, guild),
    )
}
