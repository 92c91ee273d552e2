use bovary_macros::command;
use bovary_util::{
	component::{ action_row, button },
	make_embed
};
use chrono::{ DateTime, Utc };
use twilight_model::{
	channel::message::component::{ ButtonStyle, Component },
	guild::Permissions,
	id::{
		marker::{ GuildMarker, UserMarker },
		Id
	}
};

use crate::{
	error::ErrorKind,
	invite::{ notify_staff, DiscordStaffNotifier, InviteOutcome, Remaining },
	Result, Context, Interaction, CommandResponse
};

pub const REQUEST_BUTTON_ID: &str = "invite_request";

fn panel_components() -> Vec<Component> {
	vec![action_row(vec![
		button(REQUEST_BUTTON_ID, "Request invite", ButtonStyle::Primary)
	])]
}

#[tracing::instrument(skip_all)]
#[command(no_dm, description = "Post the invite request panel in this channel.", default_member_permissions = "8")]
pub async fn invite_panel(context: Context, interaction: Interaction) -> Result<CommandResponse> {
	if !interaction.has_permission(Permissions::ADMINISTRATOR) {
		return Ok(CommandResponse::ephemeral("🚫 Missing permission."));
	}

	let guild_id = interaction.guild_id
		.ok_or(ErrorKind::MissingInteractionData("guild_id"))?;
	let channel_id = interaction.channel_id
		.ok_or(ErrorKind::MissingInteractionData("channel_id"))?;

	let config = context.cache.guild_configs.get(guild_id).await?;
	if let Some(required_channel_id) = config.required_invite_channel_id() && required_channel_id != channel_id {
		return Ok(CommandResponse::ephemeral("❌ Wrong channel for this command."));
	}

	context.client
		.create_message(channel_id)
		.embeds(&[make_embed("🎟️ Invites", "Click below to request").build()])
		.components(&panel_components())
		.await?;

	Ok(CommandResponse::ephemeral("✅ Panel sent."))
}

/// Handles a press of the invite panel button.
#[tracing::instrument(skip_all, fields(user_id = ?interaction.user_id()))]
pub async fn request_invite(context: Context, interaction: Interaction) -> Result<CommandResponse> {
	let Some(user_id) = interaction.user_id() else {
		return Ok(CommandResponse::Acknowledge);
	};

	let requested_at = Utc::now();
	Ok(match context.invite_gate.request_invite(user_id, requested_at) {
		InviteOutcome::Rejected { remaining } => {
			tracing::debug!(remaining = %Remaining(remaining), "invite request still cooling down");
			CommandResponse::ephemeral(format!("⏳ Please wait {} before requesting another invite.", Remaining(remaining)))
		},
		InviteOutcome::Accepted => {
			tracing::info!("accepted invite request");
			if let Some(guild_id) = interaction.guild_id {
				tokio::spawn(send_staff_notification(context, guild_id, user_id, requested_at));
			}
			CommandResponse::ephemeral("✅ Invite request sent.")
		}
	})
}

async fn send_staff_notification(context: Context, guild_id: Id<GuildMarker>, user_id: Id<UserMarker>, requested_at: DateTime<Utc>) {
	let config = match context.cache.guild_configs.get(guild_id).await {
		Ok(config) => config,
		Err(error) => {
			tracing::warn!(%guild_id, %error, "could not load guild config for invite notification");
			return;
		}
	};

	let outcome = notify_staff(&DiscordStaffNotifier::new(&context.client), &config, guild_id, user_id, requested_at).await;
	tracing::debug!(?outcome, "invite notification finished");
}
