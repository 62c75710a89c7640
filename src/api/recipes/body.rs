//! Shared assembly of recipe response bodies.
//!
//! The list, detail, create and update endpoints all return the same full
//! recipe representation; the membership endpoints and the subscriptions
//! list return the compact summary. Both are built here from batch queries
//! so a page of recipes costs a fixed number of round trips.

use crate::api::tags::TagResponse;
use crate::api::users::UserProfile;
use crate::models::{Ingredient, Recipe, RecipeIngredient, Tag, User};
use crate::schema::{
    favourites, ingredients, recipe_ingredients, recipe_tags, shopping_list, subscriptions, tags,
    users,
};
use diesel::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use utoipa::ToSchema;

/// Compact recipe representation: membership responses, subscription lists
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        RecipeSummary {
            id: recipe.id,
            name: recipe.name,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
        }
    }
}

/// One ingredient line of a recipe, flattened with its reference data
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeIngredientLine {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Full recipe representation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub tags: Vec<TagResponse>,
    pub author: UserProfile,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
}

/// Build full response bodies for the given recipes, preserving their order.
///
/// `viewer` personalizes `is_favorited`, `is_in_shopping_cart` and the
/// author's `is_subscribed`; all three are false for anonymous callers.
pub fn load_recipe_bodies(
    conn: &mut PgConnection,
    rows: Vec<Recipe>,
    viewer: Option<&User>,
) -> Result<Vec<RecipeResponse>, diesel::result::Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let recipe_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    let author_ids: Vec<i32> = rows
        .iter()
        .map(|r| r.author_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let authors: HashMap<i32, User> = users::table
        .filter(users::id.eq_any(&author_ids))
        .select(User::as_select())
        .load::<User>(conn)?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let mut lines: HashMap<i32, Vec<RecipeIngredientLine>> = HashMap::new();
    let line_rows: Vec<(RecipeIngredient, Ingredient)> = recipe_ingredients::table
        .inner_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq_any(&recipe_ids))
        .order(recipe_ingredients::id.asc())
        .select((RecipeIngredient::as_select(), Ingredient::as_select()))
        .load(conn)?;
    for (line, ingredient) in line_rows {
        lines
            .entry(line.recipe_id)
            .or_default()
            .push(RecipeIngredientLine {
                id: ingredient.id,
                name: ingredient.name,
                measurement_unit: ingredient.measurement_unit,
                amount: line.amount,
            });
    }

    let mut tag_lists: HashMap<i32, Vec<TagResponse>> = HashMap::new();
    let tag_rows: Vec<(i32, Tag)> = recipe_tags::table
        .inner_join(tags::table)
        .filter(recipe_tags::recipe_id.eq_any(&recipe_ids))
        .order(recipe_tags::id.asc())
        .select((recipe_tags::recipe_id, Tag::as_select()))
        .load(conn)?;
    for (recipe_id, tag) in tag_rows {
        tag_lists
            .entry(recipe_id)
            .or_default()
            .push(TagResponse::from(tag));
    }

    let (favorited, in_cart, followed_authors) = match viewer {
        Some(viewer) => {
            let favorited: HashSet<i32> = favourites::table
                .filter(favourites::user_id.eq(viewer.id))
                .filter(favourites::recipe_id.eq_any(&recipe_ids))
                .select(favourites::recipe_id)
                .load::<i32>(conn)?
                .into_iter()
                .collect();
            let in_cart: HashSet<i32> = shopping_list::table
                .filter(shopping_list::user_id.eq(viewer.id))
                .filter(shopping_list::recipe_id.eq_any(&recipe_ids))
                .select(shopping_list::recipe_id)
                .load::<i32>(conn)?
                .into_iter()
                .collect();
            let followed: HashSet<i32> = subscriptions::table
                .filter(subscriptions::user_id.eq(viewer.id))
                .filter(subscriptions::author_id.eq_any(&author_ids))
                .select(subscriptions::author_id)
                .load::<i32>(conn)?
                .into_iter()
                .collect();
            (favorited, in_cart, followed)
        }
        None => (HashSet::new(), HashSet::new(), HashSet::new()),
    };

    let mut bodies = Vec::with_capacity(rows.len());
    for recipe in rows {
        let author = authors
            .get(&recipe.author_id)
            .ok_or(diesel::result::Error::NotFound)?;

        bodies.push(RecipeResponse {
            id: recipe.id,
            tags: tag_lists.remove(&recipe.id).unwrap_or_default(),
            author: UserProfile::from_user(author, followed_authors.contains(&author.id)),
            ingredients: lines.remove(&recipe.id).unwrap_or_default(),
            is_favorited: favorited.contains(&recipe.id),
            is_in_shopping_cart: in_cart.contains(&recipe.id),
            name: recipe.name,
            image: recipe.image,
            text: recipe.text,
            cooking_time: recipe.cooking_time,
        });
    }

    Ok(bodies)
}
