use crate::api::recipes::body::{load_recipe_bodies, RecipeResponse};
use crate::api::ErrorResponse;
use crate::auth::MaybeAuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::{favourites, recipe_tags, recipes, shopping_list, tags};
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
pub struct ListRecipesParams {
    /// Restrict to recipes by this author
    pub author: Option<i32>,
    /// Comma-separated tag slugs; recipes carrying any of them match
    pub tags: Option<String>,
    /// 1 restricts to the caller's favorites (authenticated callers only)
    pub is_favorited: Option<u8>,
    /// 1 restricts to the caller's shopping cart (authenticated callers only)
    pub is_in_shopping_cart: Option<u8>,
}

/// Split the `tags` query parameter into slugs, dropping empty segments.
fn parse_tag_slugs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/recipes/",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Recipes, newest first", body = [RecipeResponse])
    )
)]
pub async fn list_recipes(
    MaybeAuthUser(viewer): MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let mut query = recipes::table
        .order(recipes::created_at.desc())
        .into_boxed();

    if let Some(author_id) = params.author {
        query = query.filter(recipes::author_id.eq(author_id));
    }

    if let Some(raw) = params.tags.as_deref() {
        let slugs = parse_tag_slugs(raw);
        if !slugs.is_empty() {
            let tagged = recipe_tags::table
                .inner_join(tags::table)
                .filter(tags::slug.eq_any(slugs))
                .select(recipe_tags::recipe_id);
            query = query.filter(recipes::id.eq_any(tagged));
        }
    }

    // Membership filters only mean something for an authenticated caller;
    // anonymous callers have no favorites or cart to restrict to.
    if let Some(viewer) = viewer.as_ref() {
        if params.is_favorited == Some(1) {
            let favorited = favourites::table
                .filter(favourites::user_id.eq(viewer.id))
                .select(favourites::recipe_id);
            query = query.filter(recipes::id.eq_any(favorited));
        }
        if params.is_in_shopping_cart == Some(1) {
            let queued = shopping_list::table
                .filter(shopping_list::user_id.eq(viewer.id))
                .select(shopping_list::recipe_id);
            query = query.filter(recipes::id.eq_any(queued));
        }
    }

    let rows: Vec<Recipe> = match query.select(Recipe::as_select()).load(&mut conn) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    match load_recipe_bodies(&mut conn, rows, viewer.as_ref()) {
        Ok(bodies) => (StatusCode::OK, Json(bodies)).into_response(),
        Err(e) => {
            tracing::error!("Failed to load recipe bodies: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_slug() {
        assert_eq!(parse_tag_slugs("lunch"), vec!["lunch"]);
    }

    #[test]
    fn test_parse_multiple_slugs() {
        assert_eq!(parse_tag_slugs("lunch,vegan"), vec!["lunch", "vegan"]);
    }

    #[test]
    fn test_parse_trims_and_drops_empty_segments() {
        assert_eq!(parse_tag_slugs(" lunch , ,vegan,"), vec!["lunch", "vegan"]);
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(parse_tag_slugs("").is_empty());
    }
}
