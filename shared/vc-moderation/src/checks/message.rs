//! Message deletion.
//!
//! Rules:
//! 1. Authors may always delete their own messages
//! 2. Otherwise `MANAGE_MESSAGES` at guild scope and in the message's channel
//! 3. Messages by the guild owner or by members at/above the moderator stay

use crate::action::ModerationAction;
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{Guild, Member, Message};

use super::{allowed, require_outranks, require_permission, require_scoped, top_role};

pub fn check_delete_message(
    message: &Message,
    moderator: &Member,
    guild: &Guild,
) -> Result<(), Denial> {
    let author = message
        .author
        .as_ref()
        .ok_or(Denial::Incomplete("message author"))?;
    if author.id() == moderator.id() {
        return Ok(());
    }

    require_permission(moderator, GuildPermissions::MANAGE_MESSAGES)?;
    let channel = message
        .channel
        .as_ref()
        .ok_or(Denial::Incomplete("message channel"))?;
    require_scoped(channel, moderator, GuildPermissions::MANAGE_MESSAGES)?;

    if let Some(author) = author.as_member() {
        let owner_id = guild.owner_id.ok_or(Denial::Incomplete("guild owner"))?;
        if author.id() == owner_id {
            return Err(Denial::CannotModerateOwner);
        }
        require_outranks(moderator, top_role(author)?)?;
    }
    Ok(())
}

/// Checks if a message can be deleted by the moderator.
pub fn message_deletable(message: &Message, moderator: &Member, guild: &Guild) -> bool {
    allowed(
        ModerationAction::DeleteMessage,
        check_delete_message(message, moderator, guild),
    )
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use vc_common::User;

    use super::*;
    use crate::models::{Author, ChannelKind};
    use crate::test_support::{channel, failing_channel, guild_owned_by, member, role_at, user};

    fn message_by(author: Author, channel: Option<crate::models::Channel>) -> Message {
        Message {
            id: Uuid::now_v7(),
            author: Some(author),
            channel,
        }
    }

    #[test]
    fn test_author_deletes_own_message_without_permissions() {
        let guild = guild_owned_by(user("owner").id);
        let author = member(GuildPermissions::empty(), &role_at(1000));
        let message = message_by(Author::Member(author.clone()), None);

        assert!(message_deletable(&message, &author, &guild));
    }

    #[test]
    fn test_moderator_deletes_lower_ranked_message() {
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::MANAGE_MESSAGES, &role_at(10));
        let author = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));
        let general = channel(&guild, ChannelKind::Text, GuildPermissions::MANAGE_MESSAGES);
        let message = message_by(Author::Member(author), Some(general));

        assert!(message_deletable(&message, &moderator, &guild));
    }

    #[test]
    fn test_channel_override_blocks_deletion() {
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::MANAGE_MESSAGES, &role_at(10));
        let author = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));
        let announcements = channel(&guild, ChannelKind::Text, GuildPermissions::SEND_MESSAGES);
        let message = message_by(Author::Member(author), Some(announcements));

        assert_eq!(
            check_delete_message(&message, &moderator, &guild),
            Err(Denial::MissingScopedPermission(
                GuildPermissions::MANAGE_MESSAGES
            ))
        );
    }

    #[test]
    fn test_owner_and_equal_rank_messages_protected() {
        let moderator_role = role_at(10);
        let moderator = member(GuildPermissions::MANAGE_MESSAGES, &moderator_role);
        let author = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));
        let owned = guild_owned_by(author.id());
        let general = channel(&owned, ChannelKind::Text, GuildPermissions::all());
        let message = message_by(Author::Member(author), Some(general.clone()));
        assert_eq!(
            check_delete_message(&message, &moderator, &owned),
            Err(Denial::CannotModerateOwner)
        );

        let guild = guild_owned_by(user("owner").id);
        let peer = member(GuildPermissions::EVERYONE_DEFAULT, &moderator_role);
        let message = message_by(Author::Member(peer), Some(general));
        assert!(matches!(
            check_delete_message(&message, &moderator, &guild),
            Err(Denial::RoleHierarchy { .. })
        ));
    }

    #[test]
    fn test_non_member_author_skips_hierarchy() {
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::MANAGE_MESSAGES, &role_at(10));
        let general = channel(&guild, ChannelKind::Text, GuildPermissions::MANAGE_MESSAGES);
        let departed = Author::User(User::new(Uuid::now_v7(), "departed"));
        let message = message_by(departed, Some(general));

        assert!(message_deletable(&message, &moderator, &guild));
    }

    #[test]
    fn test_missing_data_fails_closed() {
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::all(), &role_at(10));

        let anonymous = Message {
            id: Uuid::now_v7(),
            author: None,
            channel: Some(channel(&guild, ChannelKind::Text, GuildPermissions::all())),
        };
        assert_eq!(
            check_delete_message(&anonymous, &moderator, &guild),
            Err(Denial::Incomplete("message author"))
        );

        let author = member(GuildPermissions::empty(), &role_at(50));
        let orphan = message_by(Author::Member(author.clone()), None);
        assert!(!message_deletable(&orphan, &moderator, &guild));

        let flaky = message_by(
            Author::Member(author),
            Some(failing_channel(&guild, ChannelKind::Text)),
        );
        assert!(!message_deletable(&flaky, &moderator, &guild));
    }
}
