use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AvatarRequest {
    /// Reference to the stored avatar image (URL or storage path)
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AvatarResponse {
    pub avatar: String,
}

#[utoipa::path(
    put,
    path = "/api/users/me/avatar",
    tag = "users",
    request_body = AvatarRequest,
    responses(
        (status = 200, description = "Avatar updated", body = AvatarResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn put_avatar(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(req): Json<AvatarRequest>,
) -> impl IntoResponse {
    if req.avatar.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Field 'avatar' cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    if let Err(e) = diesel::update(users::table.find(user.id))
        .set(users::avatar.eq(&req.avatar))
        .execute(&mut conn)
    {
        tracing::error!("Failed to update avatar: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to update avatar".to_string(),
            }),
        )
            .into_response();
    }

    (StatusCode::OK, Json(AvatarResponse { avatar: req.avatar })).into_response()
}

#[utoipa::path(
    delete,
    path = "/api/users/me/avatar",
    tag = "users",
    responses(
        (status = 204, description = "Avatar removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_avatar(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    if let Err(e) = diesel::update(users::table.find(user.id))
        .set(users::avatar.eq(None::<String>))
        .execute(&mut conn)
    {
        tracing::error!("Failed to remove avatar: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to remove avatar".to_string(),
            }),
        )
            .into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}
