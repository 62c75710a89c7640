use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::{ingredients, recipe_ingredients, recipes, shopping_list};
use crate::shopping_cart::{render_shopping_list, IngredientTotal, QueuedRecipe};
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use diesel::dsl::sum;
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart/",
    tag = "recipes",
    responses(
        (status = 200, description = "Plain-text shopping report", content_type = "text/plain"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn download_shopping_cart(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Queued recipes in the order the entries were added
    let queued: Vec<QueuedRecipe> = match shopping_list::table
        .inner_join(recipes::table)
        .filter(shopping_list::user_id.eq(user.id))
        .order(shopping_list::id.asc())
        .select((recipes::name, recipes::cooking_time))
        .load::<(String, i32)>(&mut conn)
    {
        Ok(rows) => rows
            .into_iter()
            .map(|(name, cooking_time)| QueuedRecipe { name, cooking_time })
            .collect(),
        Err(e) => {
            tracing::error!("Failed to fetch queued recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch shopping list".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Totals grouped by the ingredient's natural identity (name, unit),
    // sorted ascending by name
    let totals: Vec<IngredientTotal> = match recipe_ingredients::table
        .inner_join(ingredients::table)
        .inner_join(
            shopping_list::table.on(shopping_list::recipe_id.eq(recipe_ingredients::recipe_id)),
        )
        .filter(shopping_list::user_id.eq(user.id))
        .group_by((ingredients::name, ingredients::measurement_unit))
        .select((
            ingredients::name,
            ingredients::measurement_unit,
            sum(recipe_ingredients::amount),
        ))
        .order(ingredients::name.asc())
        .load::<(String, String, Option<i64>)>(&mut conn)
    {
        Ok(rows) => rows
            .into_iter()
            .map(|(name, measurement_unit, total)| IngredientTotal {
                name,
                measurement_unit,
                total_amount: total.unwrap_or(0),
            })
            .collect(),
        Err(e) => {
            tracing::error!("Failed to aggregate ingredients: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to aggregate ingredients".to_string(),
                }),
            )
                .into_response();
        }
    };

    let report = render_shopping_list(&queued, &totals);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"shopping_list.txt\"",
        )
        .body(Body::from(report))
        .unwrap()
        .into_response()
}
