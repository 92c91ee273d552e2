use bovary_macros::command;
use bovary_util::{
	component::{ action_row, button },
	make_embed
};
use twilight_model::channel::message::component::{ ButtonStyle, Component };

use crate::{
	Result, Context, Interaction, CommandResponse
};

pub const MODERATION_BUTTON_ID: &str = "help_moderation";
pub const UTILITIES_BUTTON_ID: &str = "help_utilities";

fn help_components() -> Vec<Component> {
	vec![action_row(vec![
		button(MODERATION_BUTTON_ID, "Moderation", ButtonStyle::Danger),
		button(UTILITIES_BUTTON_ID, "Utilities", ButtonStyle::Success)
	])]
}

#[tracing::instrument(skip_all)]
#[command(description = "Show the command panel.")]
pub async fn help(_context: Context, _interaction: Interaction) -> Result<CommandResponse> {
	Ok(CommandResponse::embed(make_embed("📘 Command Panel", "Use the buttons below to browse commands.").build())
		.with_components(help_components())
	)
}

pub async fn moderation_page(_context: Context, _interaction: Interaction) -> Result<CommandResponse> {
	Ok(CommandResponse::update(
		make_embed("🧹 Moderation", "`/apagar`\n`/invite_panel`").build(),
		help_components()
	))
}

pub async fn utilities_page(_context: Context, _interaction: Interaction) -> Result<CommandResponse> {
	Ok(CommandResponse::update(
		make_embed("⚙️ Utilities", "`/ping`\n`/timestamp`\n`/info`").build(),
		help_components()
	))
}
