pub mod body;
pub mod create;
pub mod delete;
pub mod download_shopping_cart;
pub mod get;
pub mod get_link;
pub mod list;
pub mod membership;
pub mod payload;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/download_shopping_cart/",
            get(download_shopping_cart::download_shopping_cart),
        )
        .route(
            "/{id}/",
            get(get::get_recipe)
                .patch(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/{id}/get-link", get(get_link::get_link))
        .route(
            "/{id}/favorite/",
            post(membership::add_favorite).delete(membership::remove_favorite),
        )
        .route(
            "/{id}/shopping_cart/",
            post(membership::add_shopping_cart).delete(membership::remove_shopping_cart),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        get_link::get_link,
        download_shopping_cart::download_shopping_cart,
        membership::add_favorite,
        membership::remove_favorite,
        membership::add_shopping_cart,
        membership::remove_shopping_cart,
    ),
    components(schemas(
        payload::RecipePayload,
        payload::IngredientAmount,
        body::RecipeResponse,
        body::RecipeIngredientLine,
        body::RecipeSummary,
        get_link::ShortLinkResponse,
    ))
)]
pub struct ApiDoc;
