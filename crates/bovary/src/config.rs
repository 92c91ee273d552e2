use chrono::TimeDelta;
use std::path::PathBuf;
use tracing::Level;

const DEFAULT_GUILD_CONFIG_PATH: &str = "config.json";
const DEFAULT_INVITE_COOLDOWN_SECONDS: i64 = 300;
const DEFAULT_STATUS_TEXT: &str = "at Bovary Club Society 🏎️";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("missing environment variable {0}")]
	MissingEnvVar(&'static str),

	#[error("invalid value for {name}: {value:?}")]
	InvalidValue {
		name: &'static str,
		value: String
	}
}

#[derive(Debug)]
pub struct Config {
	pub discord_token: String,
	pub guild_config_path: PathBuf,
	pub invite_cooldown: TimeDelta,
	pub status_text: String,
	pub log_level: Level
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
		// TOKEN is what older deployments set
		let discord_token = ["DISCORD_BOT_TOKEN", "TOKEN"]
			.into_iter()
			.filter_map(&lookup)
			.find(|x| !x.trim().is_empty())
			.ok_or(ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN"))?;

		let invite_cooldown = match lookup("INVITE_COOLDOWN_SECONDS") {
			Some(value) => value
				.trim()
				.parse::<u32>()
				.map(|x| TimeDelta::seconds(x.into()))
				.map_err(|_| ConfigError::InvalidValue { name: "INVITE_COOLDOWN_SECONDS", value })?,
			None => TimeDelta::seconds(DEFAULT_INVITE_COOLDOWN_SECONDS)
		};

		let log_level = match lookup("LOG_LEVEL") {
			Some(value) => value
				.trim()
				.parse()
				.map_err(|_| ConfigError::InvalidValue { name: "LOG_LEVEL", value })?,
			None => Level::INFO
		};

		Ok(Self {
			discord_token,
			guild_config_path: lookup("GUILD_CONFIG_PATH")
				.map_or_else(|| DEFAULT_GUILD_CONFIG_PATH.into(), PathBuf::from),
			invite_cooldown,
			status_text: lookup("DISCORD_STATUS_TEXT")
				.unwrap_or_else(|| DEFAULT_STATUS_TEXT.into()),
			log_level
		})
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn config(vars: &[(&'static str, &str)]) -> Result<Config, ConfigError> {
		let vars: HashMap<&str, String> = vars
			.iter()
			.map(|(name, value)| (*name, value.to_string()))
			.collect();
		Config::from_lookup(|name| vars.get(name).cloned())
	}

	#[test]
	fn defaults() {
		let config = config(&[("DISCORD_BOT_TOKEN", "token")]).unwrap();
		assert_eq!(config.discord_token, "token");
		assert_eq!(config.guild_config_path, PathBuf::from("config.json"));
		assert_eq!(config.invite_cooldown, TimeDelta::minutes(5));
		assert_eq!(config.status_text, DEFAULT_STATUS_TEXT);
		assert_eq!(config.log_level, Level::INFO);
	}

	#[test]
	fn token_is_required() {
		assert!(matches!(config(&[]), Err(ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN"))));
		assert!(matches!(config(&[("DISCORD_BOT_TOKEN", "  ")]), Err(ConfigError::MissingEnvVar(_))));
	}

	#[test]
	fn falls_back_to_legacy_token() {
		assert_eq!(config(&[("TOKEN", "legacy")]).unwrap().discord_token, "legacy");
		assert_eq!(config(&[("DISCORD_BOT_TOKEN", "new"), ("TOKEN", "legacy")]).unwrap().discord_token, "new");
		assert_eq!(config(&[("DISCORD_BOT_TOKEN", " "), ("TOKEN", "legacy")]).unwrap().discord_token, "legacy");
	}

	#[test]
	fn overrides() {
		let config = config(&[
			("DISCORD_BOT_TOKEN", "token"),
			("GUILD_CONFIG_PATH", "/data/guilds.json"),
			("INVITE_COOLDOWN_SECONDS", "7200"),
			("DISCORD_STATUS_TEXT", "on the track"),
			("LOG_LEVEL", "debug")
		]).unwrap();
		assert_eq!(config.guild_config_path, PathBuf::from("/data/guilds.json"));
		assert_eq!(config.invite_cooldown, TimeDelta::hours(2));
		assert_eq!(config.status_text, "on the track");
		assert_eq!(config.log_level, Level::DEBUG);
	}

	#[test]
	fn rejects_bad_cooldown() {
		let result = config(&[("DISCORD_BOT_TOKEN", "token"), ("INVITE_COOLDOWN_SECONDS", "-5")]);
		assert!(matches!(result, Err(ConfigError::InvalidValue { name: "INVITE_COOLDOWN_SECONDS", .. })));
	}
}
