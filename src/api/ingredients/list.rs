use crate::api::ingredients::IngredientResponse;
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Ingredient;
use crate::schema::ingredients;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIngredientsParams {
    /// Case-insensitive name prefix filter
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/ingredients/",
    tag = "ingredients",
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "Matching ingredients", body = [IngredientResponse])
    )
)]
pub async fn list_ingredients(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListIngredientsParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let mut query = ingredients::table
        .order(ingredients::name.asc())
        .into_boxed();

    if let Some(name) = params.name.as_deref().filter(|n| !n.is_empty()) {
        let pattern = format!("{}%", name.replace('%', "\\%").replace('_', "\\_"));
        query = query.filter(ingredients::name.ilike(pattern));
    }

    let matches: Vec<Ingredient> = match query.select(Ingredient::as_select()).load(&mut conn) {
        Ok(i) => i,
        Err(e) => {
            tracing::error!("Failed to fetch ingredients: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch ingredients".to_string(),
                }),
            )
                .into_response();
        }
    };

    let response: Vec<IngredientResponse> =
        matches.into_iter().map(IngredientResponse::from).collect();

    (StatusCode::OK, Json(response)).into_response()
}
