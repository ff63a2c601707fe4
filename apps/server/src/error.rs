//! Maps core errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use investments_core::errors::{DatabaseError, Error as CoreError};
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning a core error into an HTTP response. Handlers use `?` on
/// service calls and this conversion picks the status code.
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            CoreError::Database(DatabaseError::UniqueViolation(_))
            | CoreError::Database(DatabaseError::ForeignKeyViolation(_)) => StatusCode::CONFLICT,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            // Mapping errors are configuration bugs, not request failures.
            CoreError::Mapping(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();
        if status.is_server_error() {
            tracing::error!("request failed: {message}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use investments_core::errors::ValidationError;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let not_found = ApiError(CoreError::Database(DatabaseError::NotFound("x".into())));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = ApiError(CoreError::Database(DatabaseError::UniqueViolation(
            "dup".into(),
        )));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let bad_request = ApiError(CoreError::Validation(ValidationError::MissingField(
            "balance".into(),
        )));
        assert_eq!(bad_request.status_code(), StatusCode::BAD_REQUEST);

        let mapping = ApiError(CoreError::Mapping("no rule".into()));
        assert_eq!(mapping.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
