use std::time::Duration;
use twilight_http::{ request::channel::reaction::RequestReactionType, Client };
use twilight_model::{
	channel::Message,
	id::{
		marker::{ ChannelMarker, MessageMarker },
		Id
	}
};

pub const AUTO_REACTIONS: [&str; 5] = ["❤️", "🔥", "💯", "💥", "🎀"];
const REACTION_DELAY: Duration = Duration::from_millis(200);
const MEDIA_EXTENSIONS: [&str; 9] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".mp4", ".mov", ".webm", ".mkv"];

pub fn is_media(message: &Message) -> bool {
	message.attachments
		.iter()
		.any(|x| is_media_attachment(x.content_type.as_deref(), &x.filename)) ||
	message.embeds
		.iter()
		.any(|x| x.image.is_some() || x.thumbnail.is_some())
}

fn is_media_attachment(content_type: Option<&str>, filename: &str) -> bool {
	if content_type.is_some_and(|x| x.starts_with("image/") || x.starts_with("video/")) {
		return true;
	}

	let filename = filename.to_lowercase();
	MEDIA_EXTENSIONS
		.iter()
		.any(|x| filename.ends_with(x))
}

/// Reacts with every auto reaction in order, giving up at the first one discord refuses.
pub async fn add_auto_reactions(client: &Client, channel_id: Id<ChannelMarker>, message_id: Id<MessageMarker>) {
	for name in AUTO_REACTIONS {
		if let Err(error) = client
			.create_reaction(channel_id, message_id, &RequestReactionType::Unicode { name })
			.await
		{
			tracing::warn!(%channel_id, %message_id, %error, "stopping auto reactions");
			break;
		}
		tokio::time::sleep(REACTION_DELAY).await;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn media_content_types() {
		assert!(is_media_attachment(Some("image/png"), "blob"));
		assert!(is_media_attachment(Some("video/mp4"), "clip"));
		assert!(!is_media_attachment(Some("text/plain"), "notes.txt"));
	}

	#[test]
	fn media_extensions_without_content_type() {
		assert!(is_media_attachment(None, "TRACK_DAY.JPG"));
		assert!(is_media_attachment(None, "lap.mkv"));
		assert!(is_media_attachment(None, "spin.webp"));
		assert!(!is_media_attachment(None, "setup.pdf"));
		assert!(!is_media_attachment(None, "png"));
	}
}
