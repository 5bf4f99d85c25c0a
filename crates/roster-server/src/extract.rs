use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;

use roster_types::{UserFields, UserId};

use crate::error::ServerError;

/// The `:id` path segment parsed as a [`UserId`].
///
/// Only parses; whether a user with this id exists is decided by the store.
/// A segment that is not a canonical id can never match a stored user, so
/// it is rejected as not found.
#[derive(Clone, Copy, Debug)]
pub struct UserIdParam(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        UserId::parse(&raw).map(Self).map_err(|_| {
            tracing::debug!(id = %raw, "malformed user id");
            ServerError::UserNotFound(raw)
        })
    }
}

/// Request body of a create or update.
///
/// A body that is not declared as JSON, or is empty, carries no fields.
/// A declared JSON body that fails to parse is a bad request.
#[derive(Clone, Debug, Default)]
pub struct UserBody(pub UserFields);

fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[async_trait]
impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        if !json || bytes.is_empty() {
            return Ok(Self::default());
        }
        let Json(fields) = Json::<UserFields>::from_bytes(&bytes)
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        Ok(Self(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn json_content_types() {
        assert!(is_json(&headers("application/json")));
        assert!(is_json(&headers("application/json; charset=utf-8")));
        assert!(is_json(&headers("Application/JSON")));
        assert!(is_json(&headers("application/merge-patch+json")));
    }

    #[test]
    fn non_json_content_types() {
        assert!(!is_json(&HeaderMap::new()));
        assert!(!is_json(&headers("text/plain")));
        assert!(!is_json(&headers("application/x-www-form-urlencoded")));
        assert!(!is_json(&headers("application/jsonx")));
    }
}
