use bovary_models::discord::MessageModel;
use twilight_model::gateway::payload::incoming::{ MessageCreate, MessageDelete, MessageUpdate };

use crate::{
	server::{
		logging::{ send_log, ServerLog },
		reactions::{ add_auto_reactions, is_media }
	},
	Result, Context
};

pub async fn message_create(context: Context, message_create: MessageCreate) -> Result<()> {
	if message_create.author.bot {
		return Ok(());
	}
	let Some(guild_id) = message_create.guild_id else {
		return Ok(());
	};

	context.cache.messages
		.insert(MessageModel::from(&message_create.0))
		.await;

	let config = context.cache.guild_configs
		.get(guild_id)
		.await?;
	if config.reacts_in(message_create.channel_id) && is_media(&message_create) {
		add_auto_reactions(&context.client, message_create.channel_id, message_create.id).await;
	}

	Ok(())
}

pub async fn message_update(context: Context, message_update: MessageUpdate) -> Result<()> {
	if message_update.author.bot {
		return Ok(());
	}
	let Some(guild_id) = message_update.guild_id else {
		return Ok(());
	};

	// without the old content there is nothing worth logging
	let Some(previous) = context.cache.messages
		.update_content(message_update.id, message_update.content.clone())
		.await
	else {
		return Ok(());
	};
	if previous.content == message_update.content {
		return Ok(());
	}

	let config = context.cache.guild_configs
		.get(guild_id)
		.await?;
	if config.is_ignored_channel(message_update.channel_id) {
		return Ok(());
	}

	send_log(&context, guild_id, ServerLog::MessageEdited {
		before: previous.content,
		after: message_update.content.clone()
	}).await
}

pub async fn message_delete(context: Context, message_delete: MessageDelete) -> Result<()> {
	let Some(message) = context.cache.messages
		.remove(message_delete.id)
		.await
	else {
		return Ok(());
	};
	let Some(guild_id) = message_delete.guild_id else {
		return Ok(());
	};
	if message.author_bot {
		return Ok(());
	}

	let config = context.cache.guild_configs
		.get(guild_id)
		.await?;
	if config.is_ignored_channel(message_delete.channel_id) {
		return Ok(());
	}

	send_log(&context, guild_id, ServerLog::MessageDeleted {
		author_name: message.author_name,
		content: message.content
	}).await
}
