use twilight_model::id::{
	marker::{ ChannelMarker, RoleMarker, UserMarker },
	Id
};

pub mod component;
pub mod embed;
pub use embed::make_embed;

pub mod time;

pub const BOT_NAME: &str = "Bovary Bot";
pub const FOOTER_TEXT: &str = "Bovary Club Society";

pub fn user_mention(user_id: Id<UserMarker>) -> String {
	format!("<@{user_id}>")
}

pub fn role_mention(role_id: Id<RoleMarker>) -> String {
	format!("<@&{role_id}>")
}

pub fn channel_mention(channel_id: Id<ChannelMarker>) -> String {
	format!("<#{channel_id}>")
}
