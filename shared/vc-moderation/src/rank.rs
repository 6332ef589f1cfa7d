//! Role hierarchy ordinals.
//!
//! Roles are stored with a `position` where a lower number sits higher in the
//! hierarchy (the @everyone role has the largest position). `Rank` turns that
//! into a plain ordinal: a greater `Rank` is more senior.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::GuildRole;

/// Position of a role in the guild hierarchy.
///
/// Ties on `position` are broken by creation order (the older role ranks
/// higher) and then by id, so two distinct roles never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank {
    position: i32,
    created_at: DateTime<Utc>,
    role_id: Uuid,
}

impl Rank {
    #[must_use]
    pub const fn new(position: i32, created_at: DateTime<Utc>, role_id: Uuid) -> Self {
        Self {
            position,
            created_at,
            role_id,
        }
    }

    /// Rank of a role.
    #[must_use]
    pub const fn of(role: &GuildRole) -> Self {
        Self::new(role.position, role.created_at, role.id)
    }

    /// Hierarchy position (lower number = higher rank).
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Role this rank was taken from.
    #[must_use]
    pub const fn role_id(&self) -> Uuid {
        self.role_id
    }

    /// Whether this rank sits at or above `other`.
    ///
    /// This is the dominance test used for every hierarchy-gated action: an
    /// actor may never act on a target whose rank `dominates` its own.
    #[must_use]
    pub fn dominates(&self, other: &Self) -> bool {
        self >= other
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .position
            .cmp(&self.position)
            .then_with(|| other.created_at.cmp(&self.created_at))
            .then_with(|| other.role_id.cmp(&self.role_id))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Highest rank among a set of roles, `None` when the set is empty.
pub fn highest<'a, I>(roles: I) -> Option<Rank>
where
    I: IntoIterator<Item = &'a GuildRole>,
{
    roles.into_iter().map(Rank::of).max()
}
