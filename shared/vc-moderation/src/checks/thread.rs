//! Thread management (archive, lock, rename).

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Guild, Member, Thread};

use super::{allowed, require_permission, require_scoped};

/// The thread's starter can always manage it. Everyone else needs
/// `MANAGE_THREADS` at guild scope and in the parent channel.
pub fn check_manage_thread(
    thread: &Thread,
    moderator: &Member,
    _guild: &Guild,
) -> Result<(), Denial> {
    if thread.owner_id == Some(moderator.id()) {
        return Ok(());
    }
    require_permission(moderator, GuildPermissions::MANAGE_THREADS)?;
    if let Some(parent) = &thread.parent {
        require_scoped(parent, moderator, GuildPermissions::MANAGE_THREADS)?;
    }
    Ok(())
}

/// Checks if a thread can be managed.
pub fn thread_manageable(thread: &Thread, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::ManageThread,
        check_manage_thread(thread, moderator, guild),
    )
}
