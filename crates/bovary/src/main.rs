use bovary_cache::Cache;
use chrono::Utc;
use std::{ sync::Arc, time::Duration };
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{ layer::SubscriberExt, FmtSubscriber };
use twilight_model::{
	application::command::CommandOption,
	channel::message::{ component::Component, Embed, MessageFlags },
	guild::Permissions
};

use config::Config;
use interaction::Interaction;

mod commands;
mod config;
mod discord;
mod error;
mod interaction;
mod invite;
mod server;

pub type Context = Arc<discord::gateway::Context>;

pub struct Command {
	name: String,
	no_dm: bool,
	handler: fn(Context, Interaction) -> BoxFuture<'static, Result<CommandResponse>>,
	description: Option<String>,
	default_member_permissions: Option<String>,
	options: Vec<CommandOption>
}

impl Command {
	pub fn default_member_permissions(&self) -> Result<Option<Permissions>> {
		Ok(if let Some(permissions) = self.default_member_permissions.as_ref() {
			Some(Permissions::from_bits_truncate(permissions.parse()?))
		} else { None })
	}

	pub fn options(mut self, options: impl IntoIterator<Item = CommandOption>) -> Self {
		self.options.extend(options);
		self
	}
}

pub enum CommandResponse {
	Message {
		flags: Option<MessageFlags>,
		content: Option<String>,
		embeds: Vec<Embed>,
		components: Vec<Component>
	},
	Update {
		embeds: Vec<Embed>,
		components: Vec<Component>
	},
	/// Answers with an ephemeral "thinking" state, then runs the callback which is
	/// expected to edit the response.
	Defer(BoxFuture<'static, Result<()>>),
	Acknowledge
}

impl CommandResponse {
	pub fn defer(callback: BoxFuture<'static, Result<()>>) -> Self {
		Self::Defer(callback)
	}

	pub fn ephemeral(content: impl Into<String>) -> Self {
		Self::Message {
			flags: Some(MessageFlags::EPHEMERAL),
			content: Some(content.into()),
			embeds: vec![],
			components: vec![]
		}
	}

	pub fn embed(embed: Embed) -> Self {
		Self::Message {
			flags: None,
			content: None,
			embeds: vec![embed],
			components: vec![]
		}
	}

	pub fn update(embed: Embed, components: Vec<Component>) -> Self {
		Self::Update {
			embeds: vec![embed],
			components
		}
	}

	pub fn with_components(mut self, new_components: Vec<Component>) -> Self {
		if let Self::Message { components, .. } | Self::Update { components, .. } = &mut self {
			*components = new_components;
		}
		self
	}
}

const INVITE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
	dotenvy::dotenv().ok();
	let config = Config::from_env()?;

	let subscriber = FmtSubscriber::builder()
		.with_max_level(config.log_level)
		.finish()
		.with(ErrorLayer::default());
	tracing::subscriber::set_global_default(subscriber)?;
	LogTracer::init()?;

	info!("starting bovary v{}", env!("CARGO_PKG_VERSION"));

	let cache = Cache::load(&config.guild_config_path).await?;
	info!(path = %cache.guild_configs.path().display(), cooldown_seconds = config.invite_cooldown.num_seconds(), "state ready");

	let context: Context = Arc::new(discord::gateway::Context::new(&config, cache));

	let stop_signal = CancellationToken::new();
	tokio::spawn(spawn_invite_sweep_job(context.clone(), stop_signal.clone()));
	tokio::spawn(wait_for_shutdown(stop_signal.clone()));

	let result = discord::gateway::run(&config, context.clone(), stop_signal.clone()).await;
	stop_signal.cancel();

	let dropped = context.invite_gate.close();
	info!(dropped, "closed invite cooldown gate");

	info!("shutting down bovary...goodbye!");
	result
}

async fn wait_for_shutdown(stop_signal: CancellationToken) {
	tokio::select! {
		result = tokio::signal::ctrl_c() => {
			if let Err(error) = result {
				tracing::error!(%error, "could not listen for ctrl-c");
				return;
			}
			info!("received ctrl-c");
			stop_signal.cancel();
		}

		_ = stop_signal.cancelled() => {}
	}
}

async fn spawn_invite_sweep_job(context: Context, stop_signal: CancellationToken) {
	loop {
		let removed = context.invite_gate.sweep(Utc::now());
		if removed > 0 {
			tracing::debug!(removed, remaining = context.invite_gate.len(), "swept invite cooldowns");
		}

		tokio::select! {
			_ = tokio::time::sleep(INVITE_SWEEP_INTERVAL) => {
				continue;
			}

			_ = stop_signal.cancelled() => {
				info!("gracefully shutting down invite sweep job");
				break;
			}
		};
	}
}

pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

pub use error::Result;
