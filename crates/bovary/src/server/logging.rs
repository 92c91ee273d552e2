use bovary_models::bovary::GuildConfigModel;
use bovary_util::{
	embed::colour,
	channel_mention, make_embed
};
use twilight_model::{
	channel::message::Embed,
	id::{
		marker::{ ChannelMarker, GuildMarker, MessageMarker },
		Id
	}
};

use crate::{ discord::is_not_found, Result, Context };

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerLog {
	MemberJoined {
		user_name: String
	},
	MemberLeft {
		user_name: String
	},
	ChannelCreated {
		name: String
	},
	ChannelDeleted {
		name: String
	},
	MessageDeleted {
		author_name: String,
		content: String
	},
	MessageEdited {
		before: String,
		after: String
	},
	MessageDeletedByCommand {
		channel_id: Id<ChannelMarker>,
		message_id: Id<MessageMarker>
	}
}

impl ServerLog {
	fn is_message_log(&self) -> bool {
		matches!(self, Self::MessageDeleted { .. } | Self::MessageEdited { .. } | Self::MessageDeletedByCommand { .. })
	}

	/// Where this log goes for a guild, if anywhere.
	pub fn channel_id(&self, config: &GuildConfigModel) -> Option<Id<ChannelMarker>> {
		if self.is_message_log() {
			config.message_log_channel_id()
		} else if config.modlog_enabled {
			config.log_channel_id()
		} else { None }
	}

	pub fn embed(&self) -> Embed {
		let builder = match self {
			Self::MemberJoined { user_name } =>
				make_embed("🟢 Joined", user_name.as_str()),
			Self::MemberLeft { user_name } =>
				make_embed("🔴 Left", user_name.as_str()),
			Self::ChannelCreated { name } =>
				make_embed("🆕 Channel created", name.as_str()),
			Self::ChannelDeleted { name } =>
				make_embed("🗑️ Channel removed", name.as_str()),
			Self::MessageDeleted { author_name, content } =>
				make_embed("🗑️ Message deleted", format!("{author_name}\n{content}"))
					.color(colour::RED),
			Self::MessageEdited { before, after } =>
				make_embed("✏️ Message edited", format!("Before: {before}\nAfter: {after}"))
					.color(colour::ORANGE),
			Self::MessageDeletedByCommand { channel_id, message_id } =>
				make_embed("🧹 Deleted via command", format!("Channel: {}\nID: {message_id}", channel_mention(*channel_id)))
					.color(colour::ORANGE)
		};
		builder.build()
	}
}

pub async fn send_log(context: &Context, guild_id: Id<GuildMarker>, log: ServerLog) -> Result<()> {
	let config = context.cache.guild_configs
		.get(guild_id)
		.await?;
	let Some(channel_id) = log.channel_id(&config) else {
		return Ok(());
	};

	match context.client
		.create_message(channel_id)
		.embeds(&[log.embed()])
		.await
	{
		Ok(_) => Ok(()),
		Err(error) if is_not_found(&error) => {
			tracing::warn!(%guild_id, %channel_id, "log channel no longer exists");
			Ok(())
		},
		Err(error) => Err(error.into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> GuildConfigModel {
		GuildConfigModel {
			log_channel: Some(1),
			message_log_channel: Some(2),
			..Default::default()
		}
	}

	#[test]
	fn routes_to_the_right_channel() {
		let joined = ServerLog::MemberJoined { user_name: "emma".into() };
		let edited = ServerLog::MessageEdited { before: "a".into(), after: "b".into() };
		assert_eq!(joined.channel_id(&config()), Some(Id::new(1)));
		assert_eq!(edited.channel_id(&config()), Some(Id::new(2)));
	}

	#[test]
	fn modlog_toggle_only_silences_audit_logs() {
		let config = GuildConfigModel {
			modlog_enabled: false,
			..config()
		};
		let created = ServerLog::ChannelCreated { name: "pit-lane".into() };
		let deleted = ServerLog::MessageDeleted { author_name: "emma".into(), content: "hi".into() };
		assert_eq!(created.channel_id(&config), None);
		assert_eq!(deleted.channel_id(&config), Some(Id::new(2)));
	}

	#[test]
	fn unset_channels_are_skipped() {
		let log = ServerLog::MemberLeft { user_name: "emma".into() };
		assert_eq!(log.channel_id(&GuildConfigModel::default()), None);
	}

	#[test]
	fn message_embeds() {
		let edited = ServerLog::MessageEdited { before: "old".into(), after: "new".into() }.embed();
		assert_eq!(edited.title.as_deref(), Some("✏️ Message edited"));
		assert_eq!(edited.description.as_deref(), Some("Before: old\nAfter: new"));
		assert_eq!(edited.color, Some(colour::ORANGE));

		let by_command = ServerLog::MessageDeletedByCommand {
			channel_id: Id::new(5),
			message_id: Id::new(6)
		}.embed();
		assert_eq!(by_command.description.as_deref(), Some("Channel: <#5>\nID: 6"));
	}
}
