use bovary_util::BOT_NAME;
use twilight_model::gateway::payload::incoming::Ready;

use crate::{ commands::application_commands, Result, Context };

pub async fn ready(context: Context, ready: Ready) -> Result<()> {
	let commands = application_commands()?;
	context.client
		.interaction(ready.application.id)
		.set_global_commands(&commands)
		.await?;
	tracing::info!(commands = commands.len(), guilds = ready.guilds.len(), "{BOT_NAME} online as {}", ready.user.name);

	Ok(())
}
