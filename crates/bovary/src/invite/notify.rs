use bovary_models::bovary::GuildConfigModel;
use bovary_util::{ make_embed, role_mention, user_mention };
use chrono::{ DateTime, Utc };
use twilight_http::Client;
use twilight_model::{
	channel::message::Embed,
	id::{
		marker::{ ChannelMarker, GuildMarker, RoleMarker, UserMarker },
		Id
	},
	util::Timestamp
};

use crate::{ discord::is_not_found, Result };

/// The parts of the chat platform the staff notification needs.
pub trait StaffNotifier {
	/// Resolves a channel id, returning `None` when it does not exist in the guild.
	async fn find_channel(&self, guild_id: Id<GuildMarker>, channel_id: Id<ChannelMarker>) -> Result<Option<Id<ChannelMarker>>>;

	async fn find_role(&self, guild_id: Id<GuildMarker>, role_id: Id<RoleMarker>) -> Result<Option<Id<RoleMarker>>>;

	async fn send_message(&self, channel_id: Id<ChannelMarker>, content: &str, embed: Embed) -> Result<()>;
}

pub struct DiscordStaffNotifier<'a> {
	client: &'a Client
}

impl<'a> DiscordStaffNotifier<'a> {
	pub fn new(client: &'a Client) -> Self {
		Self { client }
	}
}

impl StaffNotifier for DiscordStaffNotifier<'_> {
	async fn find_channel(&self, guild_id: Id<GuildMarker>, channel_id: Id<ChannelMarker>) -> Result<Option<Id<ChannelMarker>>> {
		let channel = match self.client.channel(channel_id).await {
			Ok(response) => response.model().await?,
			Err(error) if is_not_found(&error) => return Ok(None),
			Err(error) => return Err(error.into())
		};

		Ok((channel.guild_id == Some(guild_id)).then_some(channel.id))
	}

	async fn find_role(&self, guild_id: Id<GuildMarker>, role_id: Id<RoleMarker>) -> Result<Option<Id<RoleMarker>>> {
		Ok(self.client
			.roles(guild_id)
			.await?
			.models()
			.await?
			.into_iter()
			.find(|x| x.id == role_id)
			.map(|x| x.id)
		)
	}

	async fn send_message(&self, channel_id: Id<ChannelMarker>, content: &str, embed: Embed) -> Result<()> {
		self.client
			.create_message(channel_id)
			.content(content)
			.embeds(&[embed])
			.await?;

		Ok(())
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotifyOutcome {
	Sent {
		channel_id: Id<ChannelMarker>,
		mentioned_role: Option<Id<RoleMarker>>
	},
	NoStaffChannel,
	StaffChannelNotFound,
	Failed
}

pub fn staff_message(role_id: Option<Id<RoleMarker>>, user_id: Id<UserMarker>) -> String {
	match role_id {
		Some(role_id) => format!("{} {} requested an invite", role_mention(role_id), user_mention(user_id)),
		None => format!("{} requested an invite", user_mention(user_id))
	}
}

/// Tells staff about an accepted invite request.
///
/// Delivery is best-effort: every failure is logged and reported through the
/// returned outcome, never as an error, since the request has already been accepted.
#[tracing::instrument(skip(notifier, config), level = "debug")]
pub async fn notify_staff<N: StaffNotifier>(notifier: &N, config: &GuildConfigModel, guild_id: Id<GuildMarker>, user_id: Id<UserMarker>, requested_at: DateTime<Utc>) -> NotifyOutcome {
	let Some(channel_id) = config.staff_channel_id() else {
		return NotifyOutcome::NoStaffChannel;
	};
	let channel_id = match notifier.find_channel(guild_id, channel_id).await {
		Ok(Some(channel_id)) => channel_id,
		Ok(None) => {
			tracing::warn!(%guild_id, %channel_id, "staff channel not found, dropping invite notification");
			return NotifyOutcome::StaffChannelNotFound;
		},
		Err(error) => {
			tracing::warn!(%guild_id, %channel_id, %error, "could not look up staff channel");
			return NotifyOutcome::Failed;
		}
	};

	let role_id = match config.crew_role_id() {
		Some(role_id) => match notifier.find_role(guild_id, role_id).await {
			Ok(role_id) => role_id,
			Err(error) => {
				tracing::warn!(%guild_id, %role_id, %error, "could not look up crew role, sending without a mention");
				None
			}
		},
		None => None
	};

	let mut embed = make_embed("📨 New invite request", "");
	if let Ok(timestamp) = Timestamp::from_secs(requested_at.timestamp()) {
		embed = embed.timestamp(timestamp);
	}

	let content = staff_message(role_id, user_id);
	match notifier.send_message(channel_id, &content, embed.build()).await {
		Ok(()) => NotifyOutcome::Sent {
			channel_id,
			mentioned_role: role_id
		},
		Err(error) => {
			tracing::warn!(%guild_id, %channel_id, %error, "could not send invite notification");
			NotifyOutcome::Failed
		}
	}
}
