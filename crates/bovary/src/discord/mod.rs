use twilight_http::error::ErrorType;

pub mod gateway;

pub fn is_not_found(error: &twilight_http::Error) -> bool {
	matches!(error.kind(), ErrorType::Response { status, .. } if status.get() == 404)
}
