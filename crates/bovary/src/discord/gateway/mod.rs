use bovary_util::BOT_NAME;
use tokio_util::sync::CancellationToken;
use twilight_gateway::{ Shard, Intents, ShardId, StreamExt, ConfigBuilder, EventTypeFlags };
use twilight_model::gateway::{
	payload::outgoing::update_presence::UpdatePresencePayload,
	presence::{ ActivityType, MinimalActivity, Status }
};

use crate::{ config::Config, Result };

pub use context::Context;

mod context;
pub mod event;

pub fn presence(status_text: &str) -> Result<UpdatePresencePayload> {
	Ok(UpdatePresencePayload::new(vec![MinimalActivity {
		kind: ActivityType::Playing,
		name: status_text.into(),
		url: None
	}.into()], false, None, Status::Online)?)
}

/// Runs the gateway until `stop_signal` is cancelled.
pub async fn run(config: &Config, context: crate::Context, stop_signal: CancellationToken) -> Result<()> {
	tracing::info!("initialising discord gateway for {BOT_NAME}");

	let gateway_config = ConfigBuilder::new(
		config.discord_token.clone(),
			Intents::GUILDS | Intents::GUILD_MEMBERS | Intents::GUILD_MESSAGES |
			Intents::MESSAGE_CONTENT
	)
		.presence(presence(&config.status_text)?)
		.build();
	let mut shard = Shard::with_config(ShardId::ONE, gateway_config);

	loop {
		let item = tokio::select! {
			item = shard.next_event(EventTypeFlags::all()) => item,
			_ = stop_signal.cancelled() => {
				tracing::info!("gracefully shutting down discord gateway");
				break;
			}
		};
		let Some(item) = item else {
			break;
		};
		let event = match item {
			Ok(event) => event,
			Err(source) => {
				tracing::warn!(?source, "error receiving event");
				continue;
			}
		};

		if let Some(latency) = shard.latency().average() {
			context.set_latency(latency);
		}
		event::handle_event(&context, event);
	}

	Ok(())
}
