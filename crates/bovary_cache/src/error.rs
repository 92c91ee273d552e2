#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Model: {0}")]
	Model(#[from] bovary_models::Error),

	#[error("IO: {0}")]
	Io(#[from] std::io::Error)
}

pub type Result<T> = core::result::Result<T, Error>;
