//! Moderation actions and the evaluator that dispatches them.

use std::fmt;

use crate::checks::{self, check_hierarchy_gated, check_voice_action};
use crate::error::Denial;
use crate::guild::GuildPermissions;
use crate::models::{
    Channel, Emoji, Guild, GuildRole, Invite, Member, Message, ScheduledEvent, Sticker, Thread,
    Webhook,
};
use crate::policy::ModerationPolicy;
use crate::resolver::{PermissionScope, Scope};

/// A moderation action a member may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    /// Remove a member from the guild
    Kick,
    /// Ban a member from the guild
    Ban,
    /// Put a member in timeout
    Timeout,
    /// Change a member's nickname
    ManageNickname,
    /// Delete a channel, category, or thread
    DeleteChannel,
    /// Edit a channel's settings and overrides
    EditChannel,
    /// Delete a message
    DeleteMessage,
    /// Delete a role
    DeleteRole,
    /// Edit a role
    EditRole,
    /// Assign a role to members
    AssignRole,
    /// Rename or delete an emoji
    ManageEmoji,
    /// Edit or delete a sticker
    ManageSticker,
    /// Edit or delete a webhook
    ManageWebhook,
    /// Revoke an invite
    ManageInvite,
    /// Move a member between voice channels
    VoiceMove,
    /// Server-mute a member in voice
    VoiceMute,
    /// Server-deafen a member in voice
    VoiceDeafen,
    /// Archive, lock, or rename a thread
    ManageThread,
    /// Edit or cancel a scheduled event
    ManageEvent,
    /// Edit a stage channel
    ManageStage,
    /// Invite a member to speak on a stage
    AllowStageSpeak,
}

impl ModerationAction {
    /// Stable snake_case name, used in logs.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_moderation::ModerationAction;
    ///
    /// assert_eq!(ModerationAction::VoiceDeafen.action_name(), "voice_deafen");
    /// ```
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Timeout => "timeout",
            Self::ManageNickname => "manage_nickname",
            Self::DeleteChannel => "delete_channel",
            Self::EditChannel => "edit_channel",
            Self::DeleteMessage => "delete_message",
            Self::DeleteRole => "delete_role",
            Self::EditRole => "edit_role",
            Self::AssignRole => "assign_role",
            Self::ManageEmoji => "manage_emoji",
            Self::ManageSticker => "manage_sticker",
            Self::ManageWebhook => "manage_webhook",
            Self::ManageInvite => "manage_invite",
            Self::VoiceMove => "voice_move",
            Self::VoiceMute => "voice_mute",
            Self::VoiceDeafen => "voice_deafen",
            Self::ManageThread => "manage_thread",
            Self::ManageEvent => "manage_event",
            Self::ManageStage => "manage_stage",
            Self::AllowStageSpeak => "allow_stage_speak",
        }
    }

    /// Returns all actions as a slice.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Kick,
            Self::Ban,
            Self::Timeout,
            Self::ManageNickname,
            Self::DeleteChannel,
            Self::EditChannel,
            Self::DeleteMessage,
            Self::DeleteRole,
            Self::EditRole,
            Self::AssignRole,
            Self::ManageEmoji,
            Self::ManageSticker,
            Self::ManageWebhook,
            Self::ManageInvite,
            Self::VoiceMove,
            Self::VoiceMute,
            Self::VoiceDeafen,
            Self::ManageThread,
            Self::ManageEvent,
            Self::ManageStage,
            Self::AllowStageSpeak,
        ]
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_name())
    }
}

/// What an action is applied to.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Member(&'a Member),
    Channel(&'a Channel),
    Thread(&'a Thread),
    Message(&'a Message),
    Role(&'a GuildRole),
    Emoji(&'a Emoji),
    Sticker(&'a Sticker),
    Webhook(&'a Webhook),
    Invite(&'a Invite),
    Event(&'a ScheduledEvent),
}

impl Target<'_> {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Member(_) => "member",
            Self::Channel(_) => "channel",
            Self::Thread(_) => "thread",
            Self::Message(_) => "message",
            Self::Role(_) => "role",
            Self::Emoji(_) => "emoji",
            Self::Sticker(_) => "sticker",
            Self::Webhook(_) => "webhook",
            Self::Invite(_) => "invite",
            Self::Event(_) => "event",
        }
    }
}

macro_rules! impl_target_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Target<'a> {
                fn from(value: &'a $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_target_from! {
    Member => Member,
    Channel => Channel,
    Thread => Thread,
    Message => Message,
    GuildRole => Role,
    Emoji => Emoji,
    Sticker => Sticker,
    Webhook => Webhook,
    Invite => Invite,
    ScheduledEvent => Event,
}

/// Evaluates moderation actions under a policy.
///
/// # Example
///
/// ```ignore
/// let evaluator = Evaluator::new(ModerationPolicy::from_env());
/// if evaluator.allows(ModerationAction::Ban, &moderator, Target::from(&member), &guild, None) {
///     // caller performs the ban
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    policy: ModerationPolicy,
}

impl Evaluator {
    #[must_use]
    pub const fn new(policy: ModerationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &ModerationPolicy {
        &self.policy
    }

    /// Decide whether `actor` may perform `action` on `target`.
    ///
    /// `scope` is the channel or thread the action happens in, when the
    /// caller has one. The action's permission must then also hold there.
    /// Stage speech requires the stage as scope.
    #[tracing::instrument(level = "trace", skip_all, fields(action = %action, target_kind = target.kind()))]
    pub fn evaluate(
        &self,
        action: ModerationAction,
        actor: &Member,
        target: Target<'_>,
        guild: &Guild,
        scope: Option<Scope<'_>>,
    ) -> Result<(), Denial> {
        self.dispatch(action, actor, target, guild, scope)?;
        match (scope, scoped_requirement(action, target, actor)) {
            (Some(scope), Some(permission)) => checks::require_scoped(&scope, actor, permission),
            _ => Ok(()),
        }
    }

    fn dispatch(
        &self,
        action: ModerationAction,
        actor: &Member,
        target: Target<'_>,
        guild: &Guild,
        scope: Option<Scope<'_>>,
    ) -> Result<(), Denial> {
        use ModerationAction as A;

        let scoped = scope.as_ref().map(|s| s as &dyn PermissionScope);

        match (action, target) {
            (A::Kick, Target::Member(member)) => check_hierarchy_gated(
                member,
                actor,
                guild,
                GuildPermissions::KICK_MEMBERS,
                scoped,
                true,
            ),
            (A::Ban, Target::Member(member)) => check_hierarchy_gated(
                member,
                actor,
                guild,
                GuildPermissions::BAN_MEMBERS,
                scoped,
                true,
            ),
            (A::Timeout, Target::Member(member)) => check_hierarchy_gated(
                member,
                actor,
                guild,
                GuildPermissions::TIMEOUT_MEMBERS,
                scoped,
                true,
            ),
            (A::ManageNickname, Target::Member(member)) => check_hierarchy_gated(
                member,
                actor,
                guild,
                GuildPermissions::MANAGE_NICKNAMES,
                scoped,
                self.policy.protect_admin_nicknames,
            ),
            (A::VoiceMove, Target::Member(member)) => check_voice_action(
                member,
                actor,
                guild,
                scoped,
                GuildPermissions::VOICE_MOVE_MEMBERS,
            ),
            (A::VoiceMute, Target::Member(member)) => check_voice_action(
                member,
                actor,
                guild,
                scoped,
                GuildPermissions::VOICE_MUTE_OTHERS,
            ),
            (A::VoiceDeafen, Target::Member(member)) => check_voice_action(
                member,
                actor,
                guild,
                scoped,
                GuildPermissions::VOICE_DEAFEN_OTHERS,
            ),
            (A::AllowStageSpeak, Target::Member(member)) => match scope {
                Some(Scope::Channel(stage)) => {
                    checks::check_stage_speak(member, actor, stage, &self.policy)
                }
                Some(Scope::Thread(_)) => Err(Denial::TargetMismatch {
                    action: action.action_name(),
                    target: "thread scope",
                }),
                None => Err(Denial::Incomplete("stage channel")),
            },
            (A::DeleteChannel, Target::Channel(channel)) => {
                checks::check_delete_channel(channel, actor, guild)
            }
            (A::DeleteChannel, Target::Thread(thread)) => {
                checks::check_delete_thread(thread, actor, guild)
            }
            (A::EditChannel, Target::Channel(channel)) => {
                checks::check_edit_channel(channel, actor, guild)
            }
            (A::ManageStage, Target::Channel(stage)) => {
                checks::check_manage_stage(stage, actor, guild)
            }
            (A::ManageThread, Target::Thread(thread)) => {
                checks::check_manage_thread(thread, actor, guild)
            }
            (A::DeleteMessage, Target::Message(message)) => {
                checks::check_delete_message(message, actor, guild)
            }
            (A::DeleteRole, Target::Role(role)) => checks::check_delete_role(role, actor, guild),
            (A::EditRole, Target::Role(role)) => checks::check_edit_role(role, actor, guild),
            (A::AssignRole, Target::Role(role)) => checks::check_assign_role(role, actor, guild),
            (A::ManageEmoji, Target::Emoji(emoji)) => {
                checks::check_manage_emoji(emoji, actor, guild)
            }
            (A::ManageSticker, Target::Sticker(sticker)) => {
                checks::check_manage_sticker(sticker, actor, guild)
            }
            (A::ManageWebhook, Target::Webhook(webhook)) => {
                checks::check_manage_webhook(webhook, actor, guild, scope)
            }
            (A::ManageInvite, Target::Invite(invite)) => {
                checks::check_manage_invite(invite, actor, guild)
            }
            (A::ManageEvent, Target::Event(event)) => {
                checks::check_manage_event(event, actor, guild)
            }
            (action, target) => Err(Denial::TargetMismatch {
                action: action.action_name(),
                target: target.kind(),
            }),
        }
    }

    /// Boolean form of [`Evaluator::evaluate`]: any denial is `false`.
    pub fn allows(
        &self,
        action: ModerationAction,
        actor: &Member,
        target: Target<'_>,
        guild: &Guild,
        scope: Option<Scope<'_>>,
    ) -> bool {
        checks::allowed(action, self.evaluate(action, actor, target, guild, scope))
    }
}

/// Permission an object action also needs inside a caller-supplied scope.
///
/// `None` for actions that resolve their own scope (member, voice, stage
/// speech, webhooks) and for the author and thread-starter exemptions.
fn scoped_requirement(
    action: ModerationAction,
    target: Target<'_>,
    actor: &Member,
) -> Option<GuildPermissions> {
    use ModerationAction as A;

    match (action, target) {
        (A::DeleteChannel | A::EditChannel | A::ManageStage, _) => {
            Some(GuildPermissions::MANAGE_CHANNELS)
        }
        (A::DeleteMessage, Target::Message(message))
            if message
                .author
                .as_ref()
                .is_some_and(|author| author.id() == actor.id()) =>
        {
            None
        }
        (A::DeleteMessage, _) => Some(GuildPermissions::MANAGE_MESSAGES),
        (A::ManageThread, Target::Thread(thread)) if thread.owner_id == Some(actor.id()) => None,
        (A::ManageThread, _) => Some(GuildPermissions::MANAGE_THREADS),
        (A::DeleteRole | A::EditRole | A::AssignRole, _) => Some(GuildPermissions::MANAGE_ROLES),
        (A::ManageEmoji | A::ManageSticker, _) => Some(GuildPermissions::MANAGE_EMOJIS_AND_STICKERS),
        (A::ManageInvite, _) => Some(GuildPermissions::MANAGE_GUILD),
        (A::ManageEvent, _) => Some(GuildPermissions::MANAGE_EVENTS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::{Author, ChannelKind};
    use crate::test_support::{channel, failing_channel, guild_owned_by, member, role_at, user};

    #[test]
    fn test_action_names_unique() {
        let mut names: Vec<_> = ModerationAction::all()
            .iter()
            .map(ModerationAction::action_name)
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ModerationAction::all().len());
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn test_action_serde_matches_action_name() {
        for action in ModerationAction::all() {
            let json = serde_json::to_string(action).expect("serialize");
            assert_eq!(json, format!("\"{}\"", action.action_name()));
        }
    }

    #[test]
    fn test_evaluate_member_actions() {
        let evaluator = Evaluator::default();
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::OFFICER_DEFAULT, &role_at(10));
        let target = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));

        for action in [
            ModerationAction::Kick,
            ModerationAction::Ban,
            ModerationAction::Timeout,
            ModerationAction::ManageNickname,
            ModerationAction::VoiceMove,
            ModerationAction::VoiceMute,
            ModerationAction::VoiceDeafen,
        ] {
            assert!(
                evaluator.allows(action, &moderator, Target::from(&target), &guild, None),
                "{action} should be allowed"
            );
        }
    }

    #[test]
    fn test_evaluate_scope_applies_to_kick() {
        let evaluator = Evaluator::default();
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::KICK_MEMBERS, &role_at(10));
        let target = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));
        let restricted = channel(&guild, ChannelKind::Text, GuildPermissions::empty());

        assert_eq!(
            evaluator.evaluate(
                ModerationAction::Kick,
                &moderator,
                Target::from(&target),
                &guild,
                Some(Scope::from(&restricted)),
            ),
            Err(Denial::MissingScopedPermission(
                GuildPermissions::KICK_MEMBERS
            ))
        );
    }

    #[test]
    fn test_evaluate_target_mismatch() {
        let evaluator = Evaluator::default();
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::all(), &role_at(1));
        let role = role_at(50);

        assert_eq!(
            evaluator.evaluate(
                ModerationAction::Kick,
                &moderator,
                Target::from(&role),
                &guild,
                None
            ),
            Err(Denial::TargetMismatch {
                action: "kick",
                target: "role",
            })
        );
    }

    #[test]
    fn test_evaluate_stage_speak_requires_stage_scope() {
        let evaluator = Evaluator::default();
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::empty(), &role_at(10));
        let speaker = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));
        let stage = channel(&guild, ChannelKind::Stage, GuildPermissions::VOICE_MUTE_OTHERS);

        assert_eq!(
            evaluator.evaluate(
                ModerationAction::AllowStageSpeak,
                &moderator,
                Target::from(&speaker),
                &guild,
                None
            ),
            Err(Denial::Incomplete("stage channel"))
        );
        assert!(evaluator.allows(
            ModerationAction::AllowStageSpeak,
            &moderator,
            Target::from(&speaker),
            &guild,
            Some(Scope::from(&stage)),
        ));
    }

    #[test]
    fn test_evaluate_policy_flows_through() {
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(GuildPermissions::MANAGE_NICKNAMES, &role_at(10));
        let mut admin = member(GuildPermissions::empty(), &role_at(50));
        admin.permissions = Some(GuildPermissions::ADMINISTRATOR);

        let lenient = Evaluator::default();
        let strict = Evaluator::new(ModerationPolicy {
            protect_admin_nicknames: true,
            ..ModerationPolicy::default()
        });

        assert!(lenient.allows(
            ModerationAction::ManageNickname,
            &moderator,
            Target::from(&admin),
            &guild,
            None
        ));
        assert!(!strict.allows(
            ModerationAction::ManageNickname,
            &moderator,
            Target::from(&admin),
            &guild,
            None
        ));
    }

    #[test]
    fn test_evaluate_object_targets() {
        let evaluator = Evaluator::default();
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(
            GuildPermissions::all().difference(GuildPermissions::ADMINISTRATOR),
            &role_at(10),
        );
        let general = channel(&guild, ChannelKind::Text, GuildPermissions::all());
        let stage = channel(&guild, ChannelKind::Stage, GuildPermissions::all());
        let thread = Thread {
            id: Uuid::now_v7(),
            guild_id: guild.id,
            owner_id: None,
            parent: Some(general.clone()),
        };
        let author = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));
        let message = Message {
            id: Uuid::now_v7(),
            author: Some(Author::Member(author)),
            channel: Some(general.clone()),
        };
        let role = role_at(40);
        let emoji = Emoji {
            id: Uuid::now_v7(),
            name: "pog".to_string(),
            guild_id: Some(guild.id),
        };
        let sticker = Sticker {
            id: Uuid::now_v7(),
            name: "wave".to_string(),
            guild_id: Some(guild.id),
        };
        let webhook = Webhook {
            id: Uuid::now_v7(),
            name: "CI".to_string(),
            guild_id: Some(guild.id),
            channel_id: Some(general.id),
        };
        let invite = Invite {
            code: "kaiku".to_string(),
            guild_id: Some(guild.id),
            inviter: None,
        };
        let event = ScheduledEvent {
            id: Uuid::now_v7(),
            guild_id: guild.id,
            name: "Town hall".to_string(),
            creator_id: None,
            creator: None,
        };

        let cases: Vec<(ModerationAction, Target<'_>)> = vec![
            (ModerationAction::DeleteChannel, Target::from(&general)),
            (ModerationAction::DeleteChannel, Target::from(&thread)),
            (ModerationAction::EditChannel, Target::from(&general)),
            (ModerationAction::DeleteMessage, Target::from(&message)),
            (ModerationAction::DeleteRole, Target::from(&role)),
            (ModerationAction::EditRole, Target::from(&role)),
            (ModerationAction::AssignRole, Target::from(&role)),
            (ModerationAction::ManageEmoji, Target::from(&emoji)),
            (ModerationAction::ManageSticker, Target::from(&sticker)),
            (ModerationAction::ManageWebhook, Target::from(&webhook)),
            (ModerationAction::ManageInvite, Target::from(&invite)),
            (ModerationAction::ManageThread, Target::from(&thread)),
            (ModerationAction::ManageEvent, Target::from(&event)),
            (ModerationAction::ManageStage, Target::from(&stage)),
        ];

        for (action, target) in cases {
            assert_eq!(
                evaluator.evaluate(action, &moderator, target, &guild, None),
                Ok(()),
                "{action} on {}",
                target.kind()
            );
        }
    }

    #[test]
    fn test_evaluate_scope_applies_to_object_actions() {
        let evaluator = Evaluator::default();
        let guild = guild_owned_by(user("owner").id);
        let moderator = member(
            GuildPermissions::MANAGE_ROLES | GuildPermissions::MANAGE_EMOJIS_AND_STICKERS,
            &role_at(10),
        );
        let role = role_at(40);
        let emoji = Emoji {
            id: Uuid::now_v7(),
            name: "pog".to_string(),
            guild_id: Some(guild.id),
        };
        let locked = channel(&guild, ChannelKind::Text, GuildPermissions::empty());
        let open = channel(&guild, ChannelKind::Text, GuildPermissions::all());

        assert_eq!(
            evaluator.evaluate(
                ModerationAction::DeleteRole,
                &moderator,
                Target::from(&role),
                &guild,
                Some(Scope::from(&locked)),
            ),
            Err(Denial::MissingScopedPermission(GuildPermissions::MANAGE_ROLES))
        );
        assert_eq!(
            evaluator.evaluate(
                ModerationAction::ManageEmoji,
                &moderator,
                Target::from(&emoji),
                &guild,
                Some(Scope::from(&locked)),
            ),
            Err(Denial::MissingScopedPermission(
                GuildPermissions::MANAGE_EMOJIS_AND_STICKERS
            ))
        );
        assert!(evaluator.allows(
            ModerationAction::DeleteRole,
            &moderator,
            Target::from(&role),
            &guild,
            Some(Scope::from(&open)),
        ));

        let flaky = failing_channel(&guild, ChannelKind::Text);
        let denial = evaluator
            .evaluate(
                ModerationAction::EditRole,
                &moderator,
                Target::from(&role),
                &guild,
                Some(Scope::from(&flaky)),
            )
            .unwrap_err();
        assert!(denial.is_fail_closed());
    }

    #[test]
    fn test_evaluate_scope_keeps_author_and_starter_exemptions() {
        let evaluator = Evaluator::default();
        let guild = guild_owned_by(user("owner").id);
        let starter = member(GuildPermissions::EVERYONE_DEFAULT, &role_at(50));
        let locked = channel(&guild, ChannelKind::Text, GuildPermissions::empty());
        let thread = Thread {
            id: Uuid::now_v7(),
            guild_id: guild.id,
            owner_id: Some(starter.id()),
            parent: Some(locked.clone()),
        };
        let message = Message {
            id: Uuid::now_v7(),
            author: Some(Author::Member(starter.clone())),
            channel: Some(locked.clone()),
        };

        assert!(evaluator.allows(
            ModerationAction::ManageThread,
            &starter,
            Target::from(&thread),
            &guild,
            Some(Scope::from(&locked)),
        ));
        assert!(evaluator.allows(
            ModerationAction::DeleteMessage,
            &starter,
            Target::from(&message),
            &guild,
            Some(Scope::from(&locked)),
        ));
    }
}
