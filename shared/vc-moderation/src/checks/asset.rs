//! Guild assets: emoji, stickers, and webhooks.

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Emoji, Guild, Member, Sticker, Webhook};
use crate::resolver::Scope;

use super::{allowed, require_permission, require_same_guild, require_scoped};

pub fn check_manage_emoji(emoji: &Emoji, moderator: &Member, guild: &Guild) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_EMOJIS_AND_STICKERS)?;
    require_same_guild(emoji.guild_id, guild, "emoji guild")
}

pub fn check_manage_sticker(
    sticker: &Sticker,
    moderator: &Member,
    guild: &Guild,
) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_EMOJIS_AND_STICKERS)?;
    require_same_guild(sticker.guild_id, guild, "sticker guild")
}

/// `MANAGE_WEBHOOKS` at guild scope, in `channel` when given, and the webhook
/// must belong to this guild.
pub fn check_manage_webhook(
    webhook: &Webhook,
    moderator: &Member,
    guild: &Guild,
    channel: Option<Scope<'_>>,
) -> Result<(), Denial> {
    require_permission(moderator, GuildPermissions::MANAGE_WEBHOOKS)?;
    if let Some(scope) = channel {
        require_scoped(&scope, moderator, GuildPermissions::MANAGE_WEBHOOKS)?;
    }
    require_same_guild(webhook.guild_id, guild, "webhook guild")
}

/// Checks if an emoji can be renamed or deleted.
pub fn emoji_manageable(emoji: &Emoji, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::ManageEmoji,
        check_manage_emoji(emoji, moderator, guild),
    )
}

/// Checks if a sticker can be edited or deleted.
pub fn sticker_manageable(sticker: &Sticker, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::ManageSticker,
        check_manage_sticker(sticker, moderator, guild),
    )
}

/// Checks if a webhook can be edited or deleted.
pub fn webhook_manageable(
    webhook: &Webhook,
    moderator: &Member,
    guild: &Guild,
    channel: Option<Scope<'_>>,
) -> bool {
    allowed(
        ModerationAction::ManageWebhook,
        check_manage_webhook(webhook, moderator, guild, channel),
    )
}
