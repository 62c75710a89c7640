use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShortLinkResponse {
    #[serde(rename = "short-link")]
    pub short_link: String,
}

/// Absolute base of the request, from the proxy-aware headers.
fn request_base(headers: &HeaderMap) -> String {
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(axum::http::header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");

    format!("{}://{}", proto, host)
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/get-link",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Shareable short link", body = ShortLinkResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_link(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let token: Option<String> = match recipes::table
        .find(id)
        .select(recipes::short_link)
        .first(&mut conn)
    {
        Ok(t) => t,
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

    // Every recipe gets its token in the creating transaction, so a missing
    // one means the row was not written by this application.
    let token = match token {
        Some(t) => t,
        None => {
            tracing::error!("Recipe {} has no short link token", id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Recipe has no short link".to_string(),
                }),
            )
                .into_response();
        }
    };

    let response = ShortLinkResponse {
        short_link: format!("{}/s/{}", request_base(&headers), token),
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_base_defaults() {
        let headers = HeaderMap::new();
        assert_eq!(request_base(&headers), "http://localhost");
    }

    #[test]
    fn test_request_base_uses_host_and_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::HOST,
            HeaderValue::from_static("larder.example.com"),
        );
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(request_base(&headers), "https://larder.example.com");
    }
}
