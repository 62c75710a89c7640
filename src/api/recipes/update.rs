use crate::api::recipes::body::{load_recipe_bodies, RecipeResponse};
use crate::api::recipes::payload::{
    check_references, replace_recipe_relations, RecipePayload, ReferenceCheck,
};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    patch,
    path = "/api/recipes/{id}/",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body = RecipePayload,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<RecipePayload>,
) -> impl IntoResponse {
    if let Err(message) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    let mut conn = get_conn!(pool);

    let existing: Recipe = match recipes::table
        .find(id)
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

    if existing.author_id != user.id {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Only the author can edit a recipe".to_string(),
            }),
        )
            .into_response();
    }

    match check_references(&mut conn, &payload) {
        Ok(ReferenceCheck::Ok) => {}
        Ok(ReferenceCheck::UnknownTag) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Unknown tag id".to_string(),
                }),
            )
                .into_response()
        }
        Ok(ReferenceCheck::UnknownIngredient) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Unknown ingredient id".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to check recipe references: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response();
        }
    }

    let result: Result<Recipe, diesel::result::Error> = conn.transaction(|conn| {
        let recipe: Recipe = diesel::update(recipes::table.find(id))
            .set((
                recipes::name.eq(&payload.name),
                recipes::text.eq(&payload.text),
                recipes::cooking_time.eq(payload.cooking_time),
                recipes::image.eq(&payload.image),
            ))
            .returning(Recipe::as_returning())
            .get_result(conn)?;

        replace_recipe_relations(conn, recipe.id, &payload)?;

        Ok(recipe)
    });

    let recipe = match result {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    match load_recipe_bodies(&mut conn, vec![recipe], Some(&user)) {
        Ok(mut bodies) => (StatusCode::OK, Json(bodies.remove(0))).into_response(),
        Err(e) => {
            tracing::error!("Failed to load updated recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load updated recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
