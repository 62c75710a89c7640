pub mod avatar;
pub mod get;
pub mod me;
pub mod subscribe;
pub mod subscriptions;

use crate::models::User;
use crate::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Returns the router for /api/users endpoints (mounted at /api/users)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me::me))
        .route(
            "/me/avatar",
            put(avatar::put_avatar).delete(avatar::delete_avatar),
        )
        .route("/subscriptions", get(subscriptions::list_subscriptions))
        .route("/{id}/", get(get::get_user))
        .route(
            "/{id}/subscribe",
            post(subscribe::subscribe).delete(subscribe::unsubscribe),
        )
}

/// Public profile fields shared by the user endpoints and recipe authors
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn from_user(user: &User, is_subscribed: bool) -> Self {
        UserProfile {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_subscribed,
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        me::me,
        get::get_user,
        avatar::put_avatar,
        avatar::delete_avatar,
        subscriptions::list_subscriptions,
        subscribe::subscribe,
        subscribe::unsubscribe,
    ),
    components(schemas(
        UserProfile,
        avatar::AvatarRequest,
        avatar::AvatarResponse,
        subscriptions::SubscriptionResponse,
    ))
)]
pub struct ApiDoc;
