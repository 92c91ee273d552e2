use bovary_models::discord::MessageModel;
use moka::future::Cache;
use std::time::Duration;
use twilight_model::id::{ marker::MessageMarker, Id };

const DEFAULT_CAPACITY: u64 = 10_000;
const DEFAULT_TIME_TO_LIVE: Duration = Duration::from_secs(60 * 60 * 24);

/// Recently seen guild messages, so edits and deletions can be logged with the old content.
pub struct MessageCache {
	messages: Cache<Id<MessageMarker>, MessageModel>
}

impl MessageCache {
	pub fn new(capacity: u64, time_to_live: Duration) -> Self {
		Self {
			messages: Cache::builder()
				.max_capacity(capacity)
				.time_to_live(time_to_live)
				.build()
		}
	}

	pub async fn insert(&self, model: MessageModel) {
		self.messages.insert(model.id, model).await;
	}

	/// Replaces the cached content, returning the message as it was before the edit.
	pub async fn update_content(&self, message_id: Id<MessageMarker>, content: String) -> Option<MessageModel> {
		let previous = self.messages.get(&message_id).await?;
		self.messages.insert(message_id, MessageModel {
			content,
			..previous.clone()
		}).await;

		Some(previous)
	}

	pub async fn remove(&self, message_id: Id<MessageMarker>) -> Option<MessageModel> {
		self.messages.remove(&message_id).await
	}
}

impl Default for MessageCache {
	fn default() -> Self {
		Self::new(DEFAULT_CAPACITY, DEFAULT_TIME_TO_LIVE)
	}
}

#[cfg(test)]
mod tests {
	use twilight_model::id::Id;

	use super::*;

	fn message(id: u64, content: &str) -> MessageModel {
		MessageModel {
			id: Id::new(id),
			author_name: "emma".into(),
			author_bot: false,
			content: content.into()
		}
	}

	#[tokio::test]
	async fn edit_returns_previous_content() {
		let cache = MessageCache::default();
		cache.insert(message(1, "before")).await;

		let previous = cache.update_content(Id::new(1), "after".into()).await.unwrap();
		assert_eq!(previous.content, "before");
		assert_eq!(cache.remove(Id::new(1)).await.unwrap().content, "after");
	}

	#[tokio::test]
	async fn edit_of_unknown_message_is_not_cached() {
		let cache = MessageCache::default();
		assert!(cache.update_content(Id::new(1), "after".into()).await.is_none());
		assert!(cache.remove(Id::new(1)).await.is_none());
	}

	#[tokio::test]
	async fn remove_evicts() {
		let cache = MessageCache::default();
		cache.insert(message(1, "hello")).await;

		assert_eq!(cache.remove(Id::new(1)).await.unwrap().content, "hello");
		assert!(cache.remove(Id::new(1)).await.is_none());
	}
}
