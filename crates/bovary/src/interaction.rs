use twilight_model::{
	application::interaction::{
		application_command::{ CommandData, CommandOptionValue },
		Interaction as TwilightInteraction,
		InteractionData,
		InteractionType
	},
	channel::message::MessageFlags,
	guild::Permissions,
	http::interaction::{ InteractionResponse, InteractionResponseData, InteractionResponseType },
	id::{
		marker::{ ApplicationMarker, ChannelMarker, GuildMarker, InteractionMarker, UserMarker },
		Id
	},
	user::User
};

use crate::{
	commands::{ COMMANDS, COMPONENTS },
	Result, Context, CommandResponse
};

#[derive(Clone, Debug, PartialEq)]
pub struct Interaction {
	pub application_id: Id<ApplicationMarker>,
	pub channel_id: Option<Id<ChannelMarker>>,
	pub data: Option<InteractionData>,
	pub guild_id: Option<Id<GuildMarker>>,
	pub id: Id<InteractionMarker>,
	pub kind: InteractionType,
	pub member_permissions: Option<Permissions>,
	pub token: String,
	pub user: Option<User>
}

impl Interaction {
	pub fn user_id(&self) -> Option<Id<UserMarker>> {
		self.user.as_ref().map(|x| x.id)
	}

	/// Administrators implicitly hold every permission.
	pub fn has_permission(&self, permission: Permissions) -> bool {
		self.member_permissions
			.is_some_and(|x| x.contains(Permissions::ADMINISTRATOR) || x.contains(permission))
	}

	fn command_data(&self) -> Option<&CommandData> {
		match self.data.as_ref()? {
			InteractionData::ApplicationCommand(data) => Some(data),
			_ => None
		}
	}

	fn option_value(&self, name: &str) -> Option<&CommandOptionValue> {
		self.command_data()?
			.options
			.iter()
			.find(|x| x.name == name)
			.map(|x| &x.value)
	}

	pub fn string_option(&self, name: &str) -> Option<&str> {
		match self.option_value(name)? {
			CommandOptionValue::String(value) => Some(value.as_str()),
			_ => None
		}
	}

	pub fn channel_option(&self, name: &str) -> Option<Id<ChannelMarker>> {
		match self.option_value(name)? {
			CommandOptionValue::Channel(value) => Some(*value),
			_ => None
		}
	}
}

impl From<TwilightInteraction> for Interaction {
	fn from(interaction: TwilightInteraction) -> Self {
		let user = interaction.author().cloned();
		Self {
			application_id: interaction.application_id,
			channel_id: interaction.channel.as_ref().map(|x| x.id),
			data: interaction.data,
			guild_id: interaction.guild_id,
			id: interaction.id,
			kind: interaction.kind,
			member_permissions: interaction.member.and_then(|x| x.permissions),
			token: interaction.token,
			user
		}
	}
}

enum Route {
	Command(String),
	Component(String)
}

async fn parse_interaction(context: Context, interaction: Interaction) -> Result<Option<CommandResponse>> {
	let route = match interaction.data.as_ref() {
		Some(InteractionData::ApplicationCommand(data)) => Route::Command(data.name.clone()),
		Some(InteractionData::MessageComponent(data)) => Route::Component(data.custom_id.clone()),
		_ => return Ok(None)
	};

	Ok(Some(match route {
		Route::Command(name) => if let Some(command) = COMMANDS.iter().find(|x| x.name == name) {
			(command.handler)(context, interaction).await?
		} else {
			CommandResponse::ephemeral("this command isn't implemented yet")
		},
		Route::Component(custom_id) => if let Some(component) = COMPONENTS.iter().find(|x| x.custom_id == custom_id) {
			(component.handler)(context, interaction).await?
		} else {
			tracing::warn!(%custom_id, "no handler registered for component");
			CommandResponse::Acknowledge
		}
	}))
}

fn message_response(kind: InteractionResponseType, data: InteractionResponseData) -> InteractionResponse {
	InteractionResponse {
		kind,
		data: Some(data)
	}
}

#[tracing::instrument(skip_all, fields(interaction_id = %interaction.id, guild_id = ?interaction.guild_id))]
pub async fn handle_interaction(context: Context, interaction: TwilightInteraction) -> Result<()> {
	let interaction: Interaction = interaction.into();
	let id = interaction.id;
	let application_id = interaction.application_id;
	let token = interaction.token.clone();

	let response = match parse_interaction(context.clone(), interaction).await {
		Ok(Some(x)) => x,
		Ok(None) => return Ok(()),
		Err(error) => {
			tracing::error!(context = %error.context, "error while handling interaction: {error}");
			CommandResponse::ephemeral("❌ Error running command.")
		}
	};

	let mut deferred = None;
	let response = match response {
		CommandResponse::Message { flags, content, embeds, components } =>
			message_response(InteractionResponseType::ChannelMessageWithSource, InteractionResponseData {
				flags,
				content,
				embeds: Some(embeds),
				components: Some(components),
				..Default::default()
			}),
		CommandResponse::Update { embeds, components } =>
			message_response(InteractionResponseType::UpdateMessage, InteractionResponseData {
				embeds: Some(embeds),
				components: Some(components),
				..Default::default()
			}),
		CommandResponse::Defer(callback) => {
			deferred = Some(callback);
			message_response(InteractionResponseType::DeferredChannelMessageWithSource, InteractionResponseData {
				flags: Some(MessageFlags::EPHEMERAL),
				..Default::default()
			})
		},
		CommandResponse::Acknowledge => InteractionResponse {
			kind: InteractionResponseType::DeferredUpdateMessage,
			data: None
		}
	};

	context.client
		.interaction(application_id)
		.create_response(id, &token, &response)
		.await?;

	if let Some(callback) = deferred {
		tokio::spawn(async move {
			if let Err(error) = callback.await {
				tracing::error!(context = %error.context, "error during deferred interaction: {error}");
				if let Err(error) = context.client
					.interaction(application_id)
					.update_response(&token)
					.content(Some(&format!("❌ Error: {error}")))
					.await
				{
					tracing::warn!(%error, "could not report deferred interaction error");
				}
			}
		});
	}

	Ok(())
}
