use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use roster_types::User;

use crate::error::ServerResult;
use crate::extract::{UserBody, UserIdParam};
use crate::router::AppState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdatedUserResponse {
    #[serde(rename = "updatedUser")]
    pub updated_user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    Ok(Json(json!({
        "name": "roster-server",
        "version": env!("CARGO_PKG_VERSION"),
        "users": state.store.len()?,
    })))
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> ServerResult<Json<UsersResponse>> {
    let users = state.store.list()?;
    Ok(Json(UsersResponse { users }))
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    UserBody(fields): UserBody,
) -> ServerResult<(StatusCode, Json<UsersResponse>)> {
    let users = state.store.insert(fields)?;
    Ok((StatusCode::CREATED, Json(UsersResponse { users })))
}

/// `PUT /users/:id`
pub async fn update_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
    UserBody(fields): UserBody,
) -> ServerResult<Json<UpdatedUserResponse>> {
    let updated_user = state.store.update(&id, fields)?;
    Ok(Json(UpdatedUserResponse { updated_user }))
}

/// `DELETE /users/:id`
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> ServerResult<StatusCode> {
    state.store.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
