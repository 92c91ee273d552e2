use chrono::Utc;
use twilight_model::util::Timestamp;
use twilight_util::builder::embed::{ EmbedBuilder, EmbedFooterBuilder };

use crate::FOOTER_TEXT;

pub mod colour {
	pub const BLURPLE: u32 = 0x5865F2;
	pub const RED: u32 = 0xE74C3C;
	pub const ORANGE: u32 = 0xE67E22;
}

/// Starts an embed in the house style: blurple, footer, stamped with the current time.
pub fn make_embed(title: impl Into<String>, description: impl Into<String>) -> EmbedBuilder {
	let title = title.into();
	let description = description.into();

	let mut builder = EmbedBuilder::new()
		.color(colour::BLURPLE)
		.footer(EmbedFooterBuilder::new(FOOTER_TEXT));
	if !title.is_empty() {
		builder = builder.title(title);
	}
	if !description.is_empty() {
		builder = builder.description(description);
	}
	if let Ok(timestamp) = Timestamp::from_secs(Utc::now().timestamp()) {
		builder = builder.timestamp(timestamp);
	}

	builder
}
