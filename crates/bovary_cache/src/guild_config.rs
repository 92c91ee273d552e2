use bovary_models::bovary::{ GuildConfigFile, GuildConfigModel };
use dashmap::{ mapref::entry::Entry, DashMap };
use std::{
	io::ErrorKind,
	path::{ Path, PathBuf }
};
use tokio::{ fs, sync::Mutex };
use twilight_model::id::{ marker::GuildMarker, Id };

use crate::Result;

const EMPTY_FILE: &str = "{}";

/// Per-guild settings backed by a flat JSON file.
///
/// The whole file is read once on load and rewritten on every mutation.
pub struct GuildConfigStore {
	path: PathBuf,
	guilds: DashMap<Id<GuildMarker>, GuildConfigModel>,
	save_lock: Mutex<()>
}

impl GuildConfigStore {
	pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let file = match fs::read_to_string(&path).await {
			Ok(source) => match GuildConfigFile::parse(&source) {
				Ok(file) => file,
				Err(error) if error.is_syntax() => {
					tracing::warn!(path = %path.display(), %error, "guild config file is not valid json, starting over");
					fs::write(&path, EMPTY_FILE).await?;
					GuildConfigFile::default()
				},
				Err(error) => {
					tracing::error!(path = %path.display(), %error, "guild config file has unexpected values, leaving it untouched");
					return Err(error.into());
				}
			},
			Err(error) if error.kind() == ErrorKind::NotFound => {
				tracing::info!(path = %path.display(), "creating guild config file");
				fs::write(&path, EMPTY_FILE).await?;
				GuildConfigFile::default()
			},
			Err(error) => return Err(error.into())
		};

		let guilds = DashMap::new();
		for (guild_id, model) in file.0 {
			match Id::new_checked(guild_id) {
				Some(guild_id) => { guilds.insert(guild_id, model); },
				None => tracing::warn!("ignoring guild config entry with id 0")
			}
		}
		tracing::info!(guilds = guilds.len(), "loaded guild config");

		Ok(Self {
			path,
			guilds,
			save_lock: Mutex::new(())
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns the settings for a guild, creating and persisting the defaults if the
	/// guild has never been seen.
	pub async fn get(&self, guild_id: Id<GuildMarker>) -> Result<GuildConfigModel> {
		if let Some(model) = self.guilds.get(&guild_id) {
			return Ok(model.clone());
		}

		let (model, created) = match self.guilds.entry(guild_id) {
			Entry::Occupied(entry) => (entry.get().clone(), false),
			Entry::Vacant(entry) => (entry.insert(GuildConfigModel::default()).clone(), true)
		};
		if created {
			self.save().await?;
		}

		Ok(model)
	}

	pub async fn save(&self) -> Result<()> {
		let _guard = self.save_lock.lock().await;
		let contents = self
			.snapshot()
			.to_pretty_string()?;

		// a crash mid-write must never leave a truncated file behind
		let temp_path = self.temp_path();
		fs::write(&temp_path, contents).await?;
		fs::rename(&temp_path, &self.path).await?;

		Ok(())
	}

	fn temp_path(&self) -> PathBuf {
		let mut path = self.path.clone().into_os_string();
		path.push(".tmp");
		path.into()
	}

	pub fn snapshot(&self) -> GuildConfigFile {
		GuildConfigFile(self.guilds
			.iter()
			.map(|x| (x.key().get(), x.value().clone()))
			.collect()
		)
	}
}

#[cfg(test)]
mod tests {
	use rand::{ distributions::Alphanumeric, Rng };

	use super::*;

	fn temp_path() -> PathBuf {
		let name: String = rand::thread_rng()
			.sample_iter(Alphanumeric)
			.take(12)
			.map(char::from)
			.collect();
		std::env::temp_dir().join(format!("bovary-guild-config-{name}.json"))
	}

	#[tokio::test]
	async fn creates_missing_file() {
		let path = temp_path();
		let store = GuildConfigStore::load(&path).await.unwrap();

		assert!(store.snapshot().0.is_empty());
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
		std::fs::remove_file(path).unwrap();
	}

	#[tokio::test]
	async fn resets_unparsable_file() {
		let path = temp_path();
		std::fs::write(&path, "{ not json").unwrap();

		let store = GuildConfigStore::load(&path).await.unwrap();
		assert!(store.snapshot().0.is_empty());
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
		std::fs::remove_file(path).unwrap();
	}

	#[tokio::test]
	async fn refuses_mistyped_file_without_touching_it() {
		let path = temp_path();
		let contents = r#"{"1":{"staff_log_channel":70},"2":{"staff_log_channel":"71"}}"#;
		std::fs::write(&path, contents).unwrap();

		let error = GuildConfigStore::load(&path).await.err().unwrap();
		assert!(matches!(error, crate::Error::Model(_)));
		assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
		std::fs::remove_file(path).unwrap();
	}

	#[tokio::test]
	async fn save_replaces_file_through_temp_file() {
		let path = temp_path();
		let store = GuildConfigStore::load(&path).await.unwrap();
		store.get(Id::new(5)).await.unwrap();

		assert!(!store.temp_path().exists());
		let on_disk = GuildConfigFile::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert!(on_disk.get(Id::new(5)).is_some());
		std::fs::remove_file(path).unwrap();
	}

	#[tokio::test]
	async fn first_access_persists_defaults() {
		let path = temp_path();
		let store = GuildConfigStore::load(&path).await.unwrap();

		let config = store.get(Id::new(99)).await.unwrap();
		assert_eq!(config, GuildConfigModel::default());

		let on_disk = GuildConfigFile::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(on_disk.get(Id::new(99)), Some(&GuildConfigModel::default()));
		std::fs::remove_file(path).unwrap();
	}

	#[tokio::test]
	async fn keeps_existing_settings() {
		let path = temp_path();
		std::fs::write(&path, r#"{ "7": { "staff_log_channel": 70, "auto_reaction": false } }"#).unwrap();

		let store = GuildConfigStore::load(&path).await.unwrap();
		let config = store.get(Id::new(7)).await.unwrap();
		assert_eq!(config.staff_channel_id(), Some(Id::new(70)));
		assert!(!config.auto_reaction);

		// reading a known guild never rewrites the file
		assert!(std::fs::read_to_string(&path).unwrap().contains("\"staff_log_channel\": 70"));
		std::fs::remove_file(path).unwrap();
	}
}
