use crate::api::recipes::body::RecipeSummary;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::{DbConn, DbPool};
use crate::get_conn;
use crate::models::{Recipe, User};
use crate::schema::{recipes, subscriptions, users};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SubscriptionsParams {
    /// Maximum number of recipes to include per followed author
    pub recipes_limit: Option<i64>,
}

/// A followed author together with their recipes
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubscriptionResponse {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub avatar: Option<String>,
    pub recipes: Vec<RecipeSummary>,
    pub recipes_count: i64,
}

/// Assemble the subscriptions-list entry for one followed author.
pub fn subscription_entry(
    conn: &mut DbConn,
    author: &User,
    recipes_limit: Option<i64>,
) -> Result<SubscriptionResponse, diesel::result::Error> {
    let author_recipes: Vec<Recipe> = recipes::table
        .filter(recipes::author_id.eq(author.id))
        .order(recipes::created_at.desc())
        .select(Recipe::as_select())
        .load(conn)?;

    let recipes_count = author_recipes.len() as i64;

    let limit = recipes_limit
        .filter(|l| *l >= 0)
        .map(|l| l as usize)
        .unwrap_or(author_recipes.len());

    let summaries = author_recipes
        .into_iter()
        .take(limit)
        .map(RecipeSummary::from)
        .collect();

    Ok(SubscriptionResponse {
        id: author.id,
        email: author.email.clone(),
        username: author.username.clone(),
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        is_subscribed: true,
        avatar: author.avatar.clone(),
        recipes: summaries,
        recipes_count,
    })
}

#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = "users",
    params(SubscriptionsParams),
    responses(
        (status = 200, description = "Followed authors with their recipes", body = [SubscriptionResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_subscriptions(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<SubscriptionsParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let authors: Vec<User> = match subscriptions::table
        .inner_join(users::table.on(users::id.eq(subscriptions::author_id)))
        .filter(subscriptions::user_id.eq(user.id))
        .order(users::username.asc())
        .select(User::as_select())
        .load(&mut conn)
    {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Failed to fetch subscriptions: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch subscriptions".to_string(),
                }),
            )
                .into_response();
        }
    };

    let mut response = Vec::with_capacity(authors.len());
    for author in &authors {
        match subscription_entry(&mut conn, author, params.recipes_limit) {
            Ok(entry) => response.push(entry),
            Err(e) => {
                tracing::error!("Failed to fetch recipes for author {}: {}", author.id, e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to fetch subscriptions".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    }

    (StatusCode::OK, Json(response)).into_response()
}
