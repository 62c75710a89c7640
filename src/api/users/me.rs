use crate::api::users::UserProfile;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use axum::{http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    responses(
        (status = 200, description = "Authenticated user's profile", body = UserProfile),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn me(AuthUser(user): AuthUser) -> impl IntoResponse {
    // You can never be subscribed to yourself
    (StatusCode::OK, Json(UserProfile::from_user(&user, false))).into_response()
}
