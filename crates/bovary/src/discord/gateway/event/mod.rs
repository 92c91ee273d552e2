use twilight_gateway::Event;

use crate::{ Result, Context };

pub mod channel;
pub mod interaction;
pub mod member;
pub mod message;
pub mod misc;

pub fn handle_event(context: &Context, event: Event) {
	let event_kind = event.kind();
	tracing::debug!("handle_event {event_kind:?}");

	match event {
		Event::ChannelCreate(x) => spawn(channel::channel_create(context.clone(), *x)),
		Event::ChannelDelete(x) => spawn(channel::channel_delete(context.clone(), *x)),
		Event::InteractionCreate(x) => spawn(interaction::interaction_create(context.clone(), *x)),
		Event::MemberAdd(x) => spawn(member::member_add(context.clone(), *x)),
		Event::MemberRemove(x) => spawn(member::member_remove(context.clone(), x)),
		Event::MessageCreate(x) => spawn(message::message_create(context.clone(), *x)),
		Event::MessageDelete(x) => spawn(message::message_delete(context.clone(), x)),
		Event::MessageUpdate(x) => spawn(message::message_update(context.clone(), *x)),
		Event::Ready(x) => spawn(misc::ready(context.clone(), *x)),
		_ => {}
	}
}

fn spawn<F: Future<Output = Result<()>> + Send + 'static>(future: F) {
	tokio::spawn(async move {
		if let Err(error) = future.await {
			tracing::error!(context = %error.context, "error occurred in async event handler! {error}");
		}
	});
}
