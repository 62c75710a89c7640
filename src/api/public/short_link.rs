use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/s/{token}",
    tag = "short_link",
    params(
        ("token" = String, Path, description = "Short-link token")
    ),
    responses(
        (status = 302, description = "Redirect to the recipe page"),
        (status = 404, description = "Unknown token", body = ErrorResponse)
    )
)]
pub async fn redirect_short_link(
    State(pool): State<Arc<DbPool>>,
    Path(token): Path<String>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // The store is authoritative for reverse lookup; the token column is
    // unique, so at most one recipe can match.
    let recipe_id: i32 = match recipes::table
        .filter(recipes::short_link.eq(&token))
        .select(recipes::id)
        .first(&mut conn)
    {
        Ok(id) => id,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Unknown short link".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to resolve short link: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to resolve short link".to_string(),
                }),
            )
                .into_response();
        }
    };

    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, format!("/recipes/{}/", recipe_id))
        .body(axum::body::Body::empty())
        .unwrap()
        .into_response()
}
