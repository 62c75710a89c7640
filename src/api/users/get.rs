use crate::api::users::UserProfile;
use crate::api::ErrorResponse;
use crate::auth::MaybeAuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::{subscriptions, users};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::dsl::exists;
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/users/{id}/",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    MaybeAuthUser(viewer): MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let user: User = match users::table
        .find(id)
        .select(User::as_select())
        .first(&mut conn)
    {
        Ok(u) => u,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "User not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch user".to_string(),
                }),
            )
                .into_response();
        }
    };

    let is_subscribed = match viewer {
        Some(viewer) => {
            match diesel::select(exists(
                subscriptions::table
                    .filter(subscriptions::user_id.eq(viewer.id))
                    .filter(subscriptions::author_id.eq(user.id)),
            ))
            .get_result::<bool>(&mut conn)
            {
                Ok(subscribed) => subscribed,
                Err(e) => {
                    tracing::error!("Failed to check subscription: {}", e);
                    false
                }
            }
        }
        None => false,
    };

    (
        StatusCode::OK,
        Json(UserProfile::from_user(&user, is_subscribed)),
    )
        .into_response()
}
