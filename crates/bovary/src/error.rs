use tracing_error::SpanTrace;

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
	#[error("Cache Error: {0}")]
	CacheError(#[from] bovary_cache::Error),

	#[error("Config Error: {0}")]
	ConfigError(#[from] crate::config::ConfigError),

	#[error("Discord Error: {0}")]
	TwilightHttpError(#[from] twilight_http::Error),

	#[error("Discord Deserialisation Error: {0}")]
	TwilightDeserialiseError(#[from] twilight_http::response::DeserializeBodyError),

	#[error("Timestamp Error: {0}")]
	TwilightTimestampError(#[from] twilight_model::util::datetime::TimestampParseError),

	#[error("Presence Error: {0}")]
	TwilightPresenceError(#[from] twilight_model::gateway::payload::outgoing::update_presence::UpdatePresenceError),

	#[error("Logging Setup Error: {0}")]
	LoggingError(#[from] tracing::subscriber::SetGlobalDefaultError),

	#[error("Log Tracer Error: {0}")]
	LogTracerError(#[from] tracing_log::log::SetLoggerError),

	#[error("IO Error: {0}")]
	IoError(#[from] std::io::Error),

	#[error("Integer Parsing Error: {0}")]
	ParseIntegerError(#[from] std::num::ParseIntError),

	#[error("Missing interaction data: {0}")]
	MissingInteractionData(&'static str),

	#[error("Invalid option: {0}")]
	InvalidOption(&'static str)
}

#[derive(Debug)]
pub struct Error {
	pub kind: ErrorKind,
	pub context: SpanTrace
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(source: E) -> Self {
        Self {
			kind: Into::<ErrorKind>::into(source),
			context: SpanTrace::capture()
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
