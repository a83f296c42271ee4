use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. "ValidationError"
    pub name: String,
    /// Code-style message key, e.g. "lookup.image_invalid"
    pub message: String,
}

/// Maps a domain error onto an HTTP status and error body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
