//! Moderation policy configuration.

use serde::Deserialize;

/// Switches for the two rules where guild operators disagree.
///
/// The defaults keep the platform's historical behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ModerationPolicy {
    /// Also refuse nickname changes on administrators.
    pub protect_admin_nicknames: bool,
    /// Let a moderator grant themself speaking rights on a stage.
    pub allow_self_stage_speak: bool,
}

impl ModerationPolicy {
    /// Creates the policy from environment variables.
    ///
    /// Environment variables:
    /// - `MODERATION_PROTECT_ADMIN_NICKNAMES`: Refuse nickname changes on administrators (default: false)
    /// - `MODERATION_ALLOW_SELF_STAGE_SPEAK`: Allow granting yourself stage speech (default: false)
    pub fn from_env() -> Self {
        let mut policy = Self::default();

        if let Ok(val) = std::env::var("MODERATION_PROTECT_ADMIN_NICKNAMES") {
            policy.protect_admin_nicknames = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("MODERATION_ALLOW_SELF_STAGE_SPEAK") {
            policy.allow_self_stage_speak = val.parse().unwrap_or(false);
        }

        policy
    }
}
