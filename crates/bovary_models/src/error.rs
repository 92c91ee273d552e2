use serde_json::error::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Serde JSON: {0}")]
	SerdeJson(#[from] serde_json::Error)
}

impl Error {
	/// Whether the source was not JSON at all, as opposed to JSON with values of the wrong type.
	pub fn is_syntax(&self) -> bool {
		match self {
			Self::SerdeJson(error) => matches!(error.classify(), Category::Syntax | Category::Eof)
		}
	}
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use crate::bovary::GuildConfigFile;

	#[test]
	fn broken_json_is_a_syntax_error() {
		assert!(GuildConfigFile::parse("{ not json").unwrap_err().is_syntax());
		assert!(GuildConfigFile::parse(r#"{ "1": { "log_channel": 5 "#).unwrap_err().is_syntax());
	}

	#[test]
	fn mistyped_value_is_not_a_syntax_error() {
		let error = GuildConfigFile::parse(r#"{ "1": { "staff_log_channel": "71" } }"#).unwrap_err();
		assert!(!error.is_syntax());
	}
}
