//! Moderation permission evaluation.
//!
//! Decides whether a member may kick, ban, mute, delete, or otherwise act on
//! another member or a guild object. Every decision is a pure function of the
//! snapshots the caller passes in:
//! - Guild-level permissions and role hierarchy
//! - Channel-scoped permissions through [`ScopedPermissions`]
//! - Ownership and platform-managed role rules
//!
//! Missing or unresolvable data always denies.

pub mod action;
pub mod checks;
pub mod error;
pub mod guild;
pub mod models;
pub mod policy;
pub mod rank;
pub mod resolver;

#[cfg(test)]
mod test_support;

pub use action::{Evaluator, ModerationAction, Target};
pub use checks::*;
pub use error::Denial;
pub use guild::GuildPermissions;
pub use models::*;
pub use policy::ModerationPolicy;
pub use rank::Rank;
pub use resolver::{
    compute_guild_permissions, resolve_member, ChannelOverrides, PermissionScope, Scope,
    ScopedPermissions,
};
