use twilight_model::{
	channel::Message,
	id::{ marker::MessageMarker, Id }
};

/// The parts of a guild message needed to log it after it is edited or deleted.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageModel {
	pub id: Id<MessageMarker>,
	pub author_name: String,
	pub author_bot: bool,
	pub content: String
}

impl From<&Message> for MessageModel {
	fn from(value: &Message) -> Self {
		Self {
			id: value.id,
			author_name: value.author.name.clone(),
			author_bot: value.author.bot,
			content: value.content.clone()
		}
	}
}
