use bovary_macros::command;
use bovary_util::{
	time::{ parse_local_timestamp, server_now },
	make_embed, BOT_NAME
};
use twilight_model::application::command::CommandOption;
use twilight_util::builder::{
	command::StringBuilder,
	embed::EmbedFieldBuilder
};

use crate::{
	Result, Context, Interaction, CommandResponse
};

#[tracing::instrument(skip_all)]
#[command(description = "Show the gateway latency.")]
pub async fn ping(context: Context, _interaction: Interaction) -> Result<CommandResponse> {
	Ok(CommandResponse::embed(
		make_embed("🏓 Pong!", format!("Latency: `{}`", context.latency_text())).build()
	))
}

#[tracing::instrument(skip_all)]
#[command(description = "Show information about the bot, this server and you.")]
pub async fn info(context: Context, interaction: Interaction) -> Result<CommandResponse> {
	let mut embed = make_embed("ℹ️ Information", "")
		.field(EmbedFieldBuilder::new("🤖 Bot", format!("{BOT_NAME}\nLatency: `{}`", context.latency_text())));

	if let Some(guild_id) = interaction.guild_id {
		let guild = context.client
			.guild(guild_id)
			.with_counts(true)
			.await?
			.model()
			.await?;
		let members = guild.approximate_member_count
			.map_or_else(|| "unknown".to_string(), |x| x.to_string());
		embed = embed.field(EmbedFieldBuilder::new("🛡️ Server", format!("{}\nMembers: {members}", guild.name)));
	}

	if let Some(user) = interaction.user.as_ref() {
		let display_name = user.global_name.as_deref().unwrap_or(&user.name);
		embed = embed.field(EmbedFieldBuilder::new("👤 You", format!("{display_name}\nID: `{}`", user.id)));
	}

	Ok(CommandResponse::embed(embed.build()))
}

#[tracing::instrument(skip_all)]
#[command(description = "Turn a server time into a timestamp everyone sees in their own time zone.")]
pub async fn timestamp(_context: Context, interaction: Interaction) -> Result<CommandResponse> {
	let today = server_now().date_naive();
	let parsed = interaction
		.string_option("time")
		.and_then(|time| parse_local_timestamp(time, interaction.string_option("date"), today));

	Ok(match parsed {
		Some(timestamp) => CommandResponse::embed(
			make_embed("🕒 Timestamp", format!("<t:{timestamp}:F>\n<t:{timestamp}:R>")).build()
		),
		None => CommandResponse::ephemeral("❌ Invalid format.")
	})
}

pub fn timestamp_options() -> Vec<CommandOption> {
	vec![
		StringBuilder::new("time", "Time as HH:MM")
			.required(true)
			.build(),
		StringBuilder::new("date", "Date as DD/MM/YYYY, today when omitted")
			.build()
	]
}
