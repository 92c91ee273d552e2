use serde::{ Serialize, Deserialize };
use serde_json::ser::{ PrettyFormatter, Serializer };
use std::collections::BTreeMap;
use twilight_model::id::{
	marker::{ ChannelMarker, GuildMarker, RoleMarker },
	Id
};

use crate::Result;

/// Settings for a single guild, stored verbatim in the guild config file.
///
/// Identifiers are kept as raw integers so files written by older versions of the bot
/// keep loading; use the accessor methods to get typed ids. A `0` is treated as unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildConfigModel {
	pub log_channel: Option<u64>,
	pub message_log_channel: Option<u64>,
	pub staff_log_channel: Option<u64>,
	pub ignore_log_channel: Option<u64>,
	pub auto_reaction: bool,
	pub auto_reaction_channels: Vec<u64>,
	pub modlog_enabled: bool,
	pub required_invite_channel: Option<u64>,
	pub crew_leader_role_id: Option<u64>
}

impl Default for GuildConfigModel {
	fn default() -> Self {
		Self {
			log_channel: None,
			message_log_channel: None,
			staff_log_channel: None,
			ignore_log_channel: None,
			auto_reaction: true,
			auto_reaction_channels: vec![],
			modlog_enabled: true,
			required_invite_channel: None,
			crew_leader_role_id: None
		}
	}
}

impl GuildConfigModel {
	pub fn log_channel_id(&self) -> Option<Id<ChannelMarker>> {
		self.log_channel.and_then(Id::new_checked)
	}

	pub fn message_log_channel_id(&self) -> Option<Id<ChannelMarker>> {
		self.message_log_channel.and_then(Id::new_checked)
	}

	pub fn staff_channel_id(&self) -> Option<Id<ChannelMarker>> {
		self.staff_log_channel.and_then(Id::new_checked)
	}

	pub fn ignored_channel_id(&self) -> Option<Id<ChannelMarker>> {
		self.ignore_log_channel.and_then(Id::new_checked)
	}

	pub fn required_invite_channel_id(&self) -> Option<Id<ChannelMarker>> {
		self.required_invite_channel.and_then(Id::new_checked)
	}

	pub fn crew_role_id(&self) -> Option<Id<RoleMarker>> {
		self.crew_leader_role_id.and_then(Id::new_checked)
	}

	pub fn is_ignored_channel(&self, channel_id: Id<ChannelMarker>) -> bool {
		self.ignored_channel_id() == Some(channel_id)
	}

	pub fn reacts_in(&self, channel_id: Id<ChannelMarker>) -> bool {
		self.auto_reaction && self.auto_reaction_channels.contains(&channel_id.get())
	}
}

/// On-disk shape of the guild config file: guild id (as a string key) to settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildConfigFile(pub BTreeMap<u64, GuildConfigModel>);

impl GuildConfigFile {
	pub fn parse(source: &str) -> Result<Self> {
		Ok(serde_json::from_str(source)?)
	}

	pub fn to_pretty_string(&self) -> Result<String> {
		let mut buffer = Vec::new();
		let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
		self.serialize(&mut serializer)?;

		// serde_json only ever writes valid utf-8
		Ok(String::from_utf8_lossy(&buffer).into_owned())
	}

	pub fn get(&self, guild_id: Id<GuildMarker>) -> Option<&GuildConfigModel> {
		self.0.get(&guild_id.get())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_fresh_guild() {
		let config = GuildConfigModel::default();
		assert!(config.auto_reaction);
		assert!(config.modlog_enabled);
		assert!(config.auto_reaction_channels.is_empty());
		assert_eq!(config.staff_channel_id(), None);
		assert_eq!(config.crew_role_id(), None);
	}

	#[test]
	fn parses_legacy_file_with_missing_and_null_fields() {
		let file = GuildConfigFile::parse(r#"{
			"123": {
				"log_channel": null,
				"staff_log_channel": 456,
				"crew_leader_role_id": 789,
				"auto_reaction_channels": [10, 11],
				"some_retired_option": true
			}
		}"#).unwrap();

		let config = file.get(Id::new(123)).unwrap();
		assert_eq!(config.staff_channel_id(), Some(Id::new(456)));
		assert_eq!(config.crew_role_id(), Some(Id::new(789)));
		assert_eq!(config.log_channel_id(), None);
		assert!(config.modlog_enabled);
		assert!(config.reacts_in(Id::new(11)));
		assert!(!config.reacts_in(Id::new(12)));
	}

	#[test]
	fn zero_ids_count_as_unset() {
		let config = GuildConfigModel {
			staff_log_channel: Some(0),
			crew_leader_role_id: Some(0),
			..Default::default()
		};
		assert_eq!(config.staff_channel_id(), None);
		assert_eq!(config.crew_role_id(), None);
	}

	#[test]
	fn auto_reaction_toggle_overrides_channel_list() {
		let config = GuildConfigModel {
			auto_reaction: false,
			auto_reaction_channels: vec![5],
			..Default::default()
		};
		assert!(!config.reacts_in(Id::new(5)));
	}

	#[test]
	fn pretty_output_uses_four_space_indent_and_string_keys() {
		let mut file = GuildConfigFile::default();
		file.0.insert(42, GuildConfigModel::default());

		let output = file.to_pretty_string().unwrap();
		assert!(output.starts_with("{\n    \"42\": {\n        \"log_channel\": null"));
		assert_eq!(GuildConfigFile::parse(&output).unwrap(), file);
	}
}
