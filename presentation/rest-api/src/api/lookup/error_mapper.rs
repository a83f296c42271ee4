use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::LookupError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for LookupError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            LookupError::ImageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "lookup.image_empty",
            ),
            LookupError::DimensionsMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "lookup.image_dimensions_mismatch",
            ),
            LookupError::ImageInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "lookup.image_invalid",
            ),
            LookupError::ImageStorage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "lookup.image_storage",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
