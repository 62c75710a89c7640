use crate::api::recipes::body::{load_recipe_bodies, RecipeResponse};
use crate::api::recipes::payload::{
    check_references, replace_recipe_relations, RecipePayload, ReferenceCheck,
};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes;
use crate::short_link;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/recipes/",
    tag = "recipes",
    request_body = RecipePayload,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<RecipePayload>,
) -> impl IntoResponse {
    if let Err(message) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    let mut conn = get_conn!(pool);

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
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response();
        }
    }

    // The short-link token is derived from the store-assigned id, so it can
    // only be computed after the insert returns. The transaction keeps the
    // intermediate token-less row invisible to other requests.
    let result: Result<Recipe, diesel::result::Error> = conn.transaction(|conn| {
        let new_recipe = NewRecipe {
            author_id: user.id,
            name: &payload.name,
            text: &payload.text,
            cooking_time: payload.cooking_time,
            image: &payload.image,
        };

        let mut recipe: Recipe = diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(Recipe::as_returning())
            .get_result(conn)?;

        let token = short_link::encode_recipe_id(recipe.id);
        diesel::update(recipes::table.find(recipe.id))
            .set(recipes::short_link.eq(&token))
            .execute(conn)?;
        recipe.short_link = Some(token);

        replace_recipe_relations(conn, recipe.id, &payload)?;

        Ok(recipe)
    });

    let recipe = match result {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    match load_recipe_bodies(&mut conn, vec![recipe], Some(&user)) {
        Ok(mut bodies) => (StatusCode::CREATED, Json(bodies.remove(0))).into_response(),
        Err(e) => {
            tracing::error!("Failed to load created recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load created recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
