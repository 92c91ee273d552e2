use bovary_macros::command;
use twilight_model::{
	application::command::CommandOption,
	channel::ChannelType,
	guild::Permissions,
	id::{ marker::MessageMarker, Id }
};
use twilight_util::builder::command::{ ChannelBuilder, StringBuilder };

use crate::{
	error::ErrorKind,
	server::logging::{ send_log, ServerLog },
	Result, Context, Interaction, CommandResponse
};

#[tracing::instrument(skip_all)]
#[command(no_dm, description = "Delete a message by its id.", default_member_permissions = "8192")]
pub async fn apagar(context: Context, interaction: Interaction) -> Result<CommandResponse> {
	if !interaction.has_permission(Permissions::MANAGE_MESSAGES) {
		return Ok(CommandResponse::ephemeral("🚫 Missing permission."));
	}

	let guild_id = interaction.guild_id
		.ok_or(ErrorKind::MissingInteractionData("guild_id"))?;
	let channel_id = interaction.channel_option("canal")
		.ok_or(ErrorKind::MissingInteractionData("canal"))?;
	let message_id = interaction.string_option("mensagem_id")
		.ok_or(ErrorKind::MissingInteractionData("mensagem_id"))?
		.trim()
		.to_string();
	let application_id = interaction.application_id;
	let token = interaction.token.clone();

	Ok(CommandResponse::defer(Box::pin(async move {
		let message_id: Id<MessageMarker> = Id::new_checked(message_id.parse()?)
			.ok_or(ErrorKind::InvalidOption("mensagem_id"))?;
		context.client
			.delete_message(channel_id, message_id)
			.await?;

		context.client
			.interaction(application_id)
			.update_response(&token)
			.content(Some("✅ Message deleted."))
			.await?;

		send_log(&context, guild_id, ServerLog::MessageDeletedByCommand { channel_id, message_id }).await
	})))
}

pub fn apagar_options() -> Vec<CommandOption> {
	vec![
		ChannelBuilder::new("canal", "Channel the message is in")
			.channel_types([ChannelType::GuildText, ChannelType::GuildAnnouncement])
			.required(true)
			.build(),
		StringBuilder::new("mensagem_id", "Id of the message to delete")
			.required(true)
			.build()
	]
}
