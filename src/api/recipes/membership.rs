//! Add/remove of (user, recipe) membership rows.
//!
//! Favorites and the shopping cart share one control flow; the handlers
//! only pick which set to operate on. Racing duplicate inserts are
//! serialized by the store's unique constraint and the loser sees the
//! same duplicate error as a plain repeat call.

use crate::api::recipes::body::RecipeSummary;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewFavourite, NewShoppingListEntry, Recipe, User};
use crate::schema::{favourites, recipes, shopping_list};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

/// Which (user, recipe) membership set an operation targets.
#[derive(Debug, Clone, Copy)]
enum MembershipSet {
    Favourites,
    ShoppingCart,
}

impl MembershipSet {
    fn duplicate_error(self) -> &'static str {
        match self {
            MembershipSet::Favourites => "Recipe is already in favorites",
            MembershipSet::ShoppingCart => "Recipe is already in the shopping cart",
        }
    }

    fn missing_error(self) -> &'static str {
        match self {
            MembershipSet::Favourites => "Recipe is not in favorites",
            MembershipSet::ShoppingCart => "Recipe is not in the shopping cart",
        }
    }
}

fn insert_membership(
    conn: &mut PgConnection,
    set: MembershipSet,
    user_id: i32,
    recipe_id: i32,
) -> QueryResult<usize> {
    match set {
        MembershipSet::Favourites => diesel::insert_into(favourites::table)
            .values(&NewFavourite { user_id, recipe_id })
            .execute(conn),
        MembershipSet::ShoppingCart => diesel::insert_into(shopping_list::table)
            .values(&NewShoppingListEntry { user_id, recipe_id })
            .execute(conn),
    }
}

fn delete_membership(
    conn: &mut PgConnection,
    set: MembershipSet,
    user_id: i32,
    recipe_id: i32,
) -> QueryResult<usize> {
    match set {
        MembershipSet::Favourites => diesel::delete(
            favourites::table
                .filter(favourites::user_id.eq(user_id))
                .filter(favourites::recipe_id.eq(recipe_id)),
        )
        .execute(conn),
        MembershipSet::ShoppingCart => diesel::delete(
            shopping_list::table
                .filter(shopping_list::user_id.eq(user_id))
                .filter(shopping_list::recipe_id.eq(recipe_id)),
        )
        .execute(conn),
    }
}

async fn add_membership(
    pool: Arc<DbPool>,
    user: User,
    recipe_id: i32,
    set: MembershipSet,
) -> Response {
    let mut conn = get_conn!(pool);

    let recipe: Recipe = match recipes::table
        .find(recipe_id)
        .select(Recipe::as_select())
        .first(&mut conn)
    {
        Ok(r) => r,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    match insert_membership(&mut conn, set, user.id, recipe.id) {
        Ok(_) => (StatusCode::CREATED, Json(RecipeSummary::from(recipe))).into_response(),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: set.duplicate_error().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to insert membership row: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update membership".to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn remove_membership(
    pool: Arc<DbPool>,
    user: User,
    recipe_id: i32,
    set: MembershipSet,
) -> Response {
    let mut conn = get_conn!(pool);

    let deleted = match delete_membership(&mut conn, set, user.id, recipe_id) {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to delete membership row: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update membership".to_string(),
                }),
            )
                .into_response();
        }
    };

    if deleted == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: set.missing_error().to_string(),
            }),
        )
            .into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite/",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = RecipeSummary),
        (status = 400, description = "Already in favorites", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_favorite(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    add_membership(pool, user, id, MembershipSet::Favourites).await
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite/",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Removed from favorites"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe is not in favorites", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_favorite(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    remove_membership(pool, user, id, MembershipSet::Favourites).await
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart/",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Added to the shopping cart", body = RecipeSummary),
        (status = 400, description = "Already in the shopping cart", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_shopping_cart(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    add_membership(pool, user, id, MembershipSet::ShoppingCart).await
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart/",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Removed from the shopping cart"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe is not in the shopping cart", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_shopping_cart(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    remove_membership(pool, user, id, MembershipSet::ShoppingCart).await
}
