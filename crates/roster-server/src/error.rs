use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use roster_store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The path named an id that cannot belong to any user.
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound(_) | Self::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match status {
            StatusCode::NOT_FOUND => "User not found".to_string(),
            _ => self.to_string(),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::UserId;

    #[test]
    fn not_found_variants_map_to_404() {
        let store = ServerError::from(StoreError::NotFound { id: UserId::generate() });
        assert_eq!(store.status(), StatusCode::NOT_FOUND);
        assert_eq!(ServerError::UserNotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn poisoned_lock_maps_to_500() {
        let err = ServerError::from(StoreError::Poisoned("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        assert_eq!(ServerError::BadRequest("no".into()).status(), StatusCode::BAD_REQUEST);
    }
}
