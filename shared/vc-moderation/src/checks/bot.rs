//! Verified bot detection.

use vc_common::{User, UserFlags};

/// Checks if a user is a bot verified by the platform.
///
/// Unknown public flags count as unverified.
pub fn bot_verified(user: &User) -> bool {
    user.bot
        && user
            .public_flags
            .is_some_and(|flags| flags.contains(UserFlags::VERIFIED_BOT))
}
