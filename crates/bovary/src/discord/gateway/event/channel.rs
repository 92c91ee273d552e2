use twilight_model::{
	channel::Channel,
	gateway::payload::incoming::{ ChannelCreate, ChannelDelete }
};

use crate::{
	server::logging::{ send_log, ServerLog },
	Result, Context
};

fn channel_name(channel: &Channel) -> String {
	channel.name.clone().unwrap_or_else(|| channel.id.to_string())
}

pub async fn channel_create(context: Context, channel_create: ChannelCreate) -> Result<()> {
	if let Some(guild_id) = channel_create.guild_id {
		send_log(&context, guild_id, ServerLog::ChannelCreated {
			name: channel_name(&channel_create)
		}).await?;
	}

	Ok(())
}

pub async fn channel_delete(context: Context, channel_delete: ChannelDelete) -> Result<()> {
	if let Some(guild_id) = channel_delete.guild_id {
		send_log(&context, guild_id, ServerLog::ChannelDeleted {
			name: channel_name(&channel_delete)
		}).await?;
	}

	Ok(())
}
