use once_cell::sync::Lazy;
use twilight_model::application::{
	command::{ Command as ApplicationCommand, CommandType },
	interaction::InteractionContextType
};
use twilight_util::builder::command::CommandBuilder;

use crate::{ BoxFuture, Command, CommandResponse, Context, Interaction, Result };

pub mod general;
pub mod help;
pub mod invite;
pub mod moderation;

pub static COMMANDS: Lazy<Vec<Command>> = Lazy::new(|| vec![
	general::ping(),
	general::info(),
	general::timestamp().options(general::timestamp_options()),
	moderation::apagar().options(moderation::apagar_options()),
	help::help(),
	invite::invite_panel()
]);

/// A handler for a message component, found by its custom id.
///
/// Buttons posted by earlier runs keep working because routing only depends on
/// the custom id, never on in-memory state from the run that posted them.
pub struct ComponentHandler {
	pub custom_id: &'static str,
	pub handler: fn(Context, Interaction) -> BoxFuture<'static, Result<CommandResponse>>
}

pub static COMPONENTS: Lazy<Vec<ComponentHandler>> = Lazy::new(|| vec![
	ComponentHandler {
		custom_id: invite::REQUEST_BUTTON_ID,
		handler: |context, interaction| -> BoxFuture<'static, Result<CommandResponse>> {
			Box::pin(invite::request_invite(context, interaction))
		}
	},
	ComponentHandler {
		custom_id: help::MODERATION_BUTTON_ID,
		handler: |context, interaction| -> BoxFuture<'static, Result<CommandResponse>> {
			Box::pin(help::moderation_page(context, interaction))
		}
	},
	ComponentHandler {
		custom_id: help::UTILITIES_BUTTON_ID,
		handler: |context, interaction| -> BoxFuture<'static, Result<CommandResponse>> {
			Box::pin(help::utilities_page(context, interaction))
		}
	}
]);

fn application_command(command: &Command) -> Result<ApplicationCommand> {
	let description = command.description
		.as_deref()
		.unwrap_or("no description");
	let contexts = if command.no_dm {
		vec![InteractionContextType::Guild]
	} else {
		vec![InteractionContextType::Guild, InteractionContextType::BotDm]
	};

	let mut builder = CommandBuilder::new(&command.name, description, CommandType::ChatInput)
		.contexts(contexts);
	if let Some(permissions) = command.default_member_permissions()? {
		builder = builder.default_member_permissions(permissions);
	}
	for option in command.options.iter() {
		builder = builder.option(option.clone());
	}

	Ok(builder.build())
}

pub fn application_commands() -> Result<Vec<ApplicationCommand>> {
	COMMANDS
		.iter()
		.map(application_command)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn command_names_are_unique() {
		let mut names: Vec<&str> = COMMANDS.iter().map(|x| x.name.as_str()).collect();
		names.sort_unstable();
		names.dedup();
		assert_eq!(names.len(), COMMANDS.len());
	}

	#[test]
	fn single_invite_panel_registration() {
		assert_eq!(COMMANDS.iter().filter(|x| x.name.contains("invite")).count(), 1);
		assert!(COMMANDS.iter().any(|x| x.name == "invite_panel"));
	}

	#[test]
	fn builds_application_commands() {
		let commands = application_commands().unwrap();
		assert_eq!(commands.len(), COMMANDS.len());

		let apagar = commands.iter().find(|x| x.name == "apagar").unwrap();
		assert_eq!(apagar.options.len(), 2);
		assert_eq!(apagar.contexts.as_deref(), Some(&[InteractionContextType::Guild][..]));

		let invite_panel = commands.iter().find(|x| x.name == "invite_panel").unwrap();
		assert_eq!(invite_panel.default_member_permissions, Some(twilight_model::guild::Permissions::ADMINISTRATOR));
	}

	#[test]
	fn invite_button_has_a_registered_handler() {
		for custom_id in [invite::REQUEST_BUTTON_ID, help::MODERATION_BUTTON_ID, help::UTILITIES_BUTTON_ID] {
			assert!(COMPONENTS.iter().any(|x| x.custom_id == custom_id), "{custom_id} is not routed");
		}
	}
}
