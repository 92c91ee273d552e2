use std::path::PathBuf;

pub mod error;
pub mod guild_config;
pub mod message;

pub use error::{ Error, Result };
pub use guild_config::GuildConfigStore;
pub use message::MessageCache;

pub struct Cache {
	pub guild_configs: GuildConfigStore,
	pub messages: MessageCache
}

impl Cache {
	pub async fn load(guild_config_path: impl Into<PathBuf>) -> Result<Self> {
		Ok(Self {
			guild_configs: GuildConfigStore::load(guild_config_path).await?,
			messages: MessageCache::default()
		})
	}
}
