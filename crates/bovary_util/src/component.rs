use twilight_model::channel::message::component::{ ActionRow, Button, ButtonStyle, Component };

pub fn button(custom_id: impl Into<String>, label: impl Into<String>, style: ButtonStyle) -> Component {
	Component::Button(Button {
		custom_id: Some(custom_id.into()),
		disabled: false,
		emoji: None,
		label: Some(label.into()),
		style,
		url: None,
		sku_id: None
	})
}

pub fn action_row(components: Vec<Component>) -> Component {
	Component::ActionRow(ActionRow { components })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn buttons_carry_their_custom_id() {
		let Component::ActionRow(row) = action_row(vec![button("invite_request", "Request invite", ButtonStyle::Primary)]) else {
			panic!("expected an action row");
		};
		assert_eq!(row.components.len(), 1);

		let Component::Button(button) = &row.components[0] else {
			panic!("expected a button");
		};
		assert_eq!(button.custom_id.as_deref(), Some("invite_request"));
		assert_eq!(button.label.as_deref(), Some("Request invite"));
		assert!(!button.disabled);
	}
}
