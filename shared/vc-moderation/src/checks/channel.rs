//! Channel lifecycle: deleting and editing channels, categories, and threads.

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Channel, Guild, Member, Thread};
use crate::resolver::PermissionScope;

use super::{allowed, require_permission, require_scoped};

/// `MANAGE_CHANNELS` at guild scope, and in the channel itself when it can tell.
fn require_manage_channels(scope: &dyn PermissionScope, moderator: &Member) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_CHANNELS)?;
    if scope.resolver().is_some() {
        require_scoped(scope, moderator, GuildPermissions::MANAGE_CHANNELS)?;
    }
    Ok(())
}

pub fn check_delete_channel(
    channel: &Channel,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    require_manage_channels(channel, moderator)
}

/// Deleting a thread also needs `MANAGE_THREADS`. Starting the thread does
/// not waive either permission.
pub fn check_delete_thread(
    thread: &Thread,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    require_manage_channels(thread, moderator)?;
    require_permission(moderator, GuildPermissions::MANAGE_THREADS)
}

/// Editing requires the permission in the channel itself; a channel that
/// cannot resolve it is not editable.
pub fn check_edit_channel(
    channel: &Channel,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_CHANNELS)?;
    require_scoped(channel, moderator, GuildPermissions::MANAGE_CHANNELS)
}

/// Checks if a channel or category can be deleted.
pub fn deletable(channel: &Channel, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::DeleteChannel,
        check_delete_channel(channel, moderator, guild),
    )
}

/// Checks if a thread can be deleted.
pub fn thread_deletable(thread: &Thread, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::DeleteChannel,
        check_delete_thread(thread, moderator, guild),
    )
}

/// Checks if a channel can be edited (name, topic, overrides).
pub fn editable(channel: &Channel, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::EditChannel,
        check_edit_channel(channel, moderator, guild),
    )
}
