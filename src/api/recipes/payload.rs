//! Write payload shared by recipe create and update, with its validation
//! rules and the relation-replacement step both endpoints run.

use crate::models::{NewRecipeIngredient, NewRecipeTag};
use crate::schema::{ingredients, recipe_ingredients, recipe_tags, tags};
use diesel::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientAmount {
    /// Ingredient ID
    pub id: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecipePayload {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    /// Reference to the stored recipe image (URL or storage path)
    pub image: String,
    /// Tag IDs
    pub tags: Vec<i32>,
    pub ingredients: Vec<IngredientAmount>,
}

impl RecipePayload {
    /// Field-level validation that needs no store access.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Field 'name' cannot be empty".to_string());
        }
        if self.text.trim().is_empty() {
            return Err("Field 'text' cannot be empty".to_string());
        }
        if self.image.trim().is_empty() {
            return Err("Field 'image' cannot be empty".to_string());
        }
        if self.cooking_time < 1 {
            return Err("Cooking time must be at least 1".to_string());
        }
        if self.tags.is_empty() {
            return Err("At least one tag is required".to_string());
        }
        if self.tags.iter().collect::<HashSet<_>>().len() != self.tags.len() {
            return Err("Tags must not repeat".to_string());
        }
        if self.ingredients.is_empty() {
            return Err("At least one ingredient is required".to_string());
        }
        let ingredient_ids: HashSet<i32> = self.ingredients.iter().map(|i| i.id).collect();
        if ingredient_ids.len() != self.ingredients.len() {
            return Err("Ingredients must not repeat".to_string());
        }
        if self.ingredients.iter().any(|i| i.amount < 1) {
            return Err("Ingredient amount must be at least 1".to_string());
        }

        Ok(())
    }
}

pub enum ReferenceCheck {
    Ok,
    UnknownTag,
    UnknownIngredient,
}

/// Verify that every referenced tag and ingredient id exists.
/// `validate` has already rejected duplicates, so counting matches suffices.
pub fn check_references(
    conn: &mut PgConnection,
    payload: &RecipePayload,
) -> Result<ReferenceCheck, diesel::result::Error> {
    let known_tags: i64 = tags::table
        .filter(tags::id.eq_any(&payload.tags))
        .count()
        .get_result(conn)?;
    if known_tags as usize != payload.tags.len() {
        return Ok(ReferenceCheck::UnknownTag);
    }

    let ingredient_ids: Vec<i32> = payload.ingredients.iter().map(|i| i.id).collect();
    let known_ingredients: i64 = ingredients::table
        .filter(ingredients::id.eq_any(&ingredient_ids))
        .count()
        .get_result(conn)?;
    if known_ingredients as usize != payload.ingredients.len() {
        return Ok(ReferenceCheck::UnknownIngredient);
    }

    Ok(ReferenceCheck::Ok)
}

/// Replace the recipe's ingredient lines and tag links with the payload's.
/// Runs inside the caller's transaction.
pub fn replace_recipe_relations(
    conn: &mut PgConnection,
    recipe_id: i32,
    payload: &RecipePayload,
) -> Result<(), diesel::result::Error> {
    diesel::delete(recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(recipe_id)))
        .execute(conn)?;
    diesel::delete(recipe_tags::table.filter(recipe_tags::recipe_id.eq(recipe_id)))
        .execute(conn)?;

    let new_lines: Vec<NewRecipeIngredient> = payload
        .ingredients
        .iter()
        .map(|i| NewRecipeIngredient {
            recipe_id,
            ingredient_id: i.id,
            amount: i.amount,
        })
        .collect();
    diesel::insert_into(recipe_ingredients::table)
        .values(&new_lines)
        .execute(conn)?;

    let new_links: Vec<NewRecipeTag> = payload
        .tags
        .iter()
        .map(|&tag_id| NewRecipeTag { recipe_id, tag_id })
        .collect();
    diesel::insert_into(recipe_tags::table)
        .values(&new_links)
        .execute(conn)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RecipePayload {
        RecipePayload {
            name: "Tea".to_string(),
            text: "Boil water, add leaves.".to_string(),
            cooking_time: 5,
            image: "recipes/images/tea.png".to_string(),
            tags: vec![1],
            ingredients: vec![IngredientAmount { id: 1, amount: 10 }],
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut p = payload();
        p.name = "   ".to_string();
        assert_eq!(p.validate().unwrap_err(), "Field 'name' cannot be empty");
    }

    #[test]
    fn test_zero_cooking_time_rejected() {
        let mut p = payload();
        p.cooking_time = 0;
        assert_eq!(p.validate().unwrap_err(), "Cooking time must be at least 1");
    }

    #[test]
    fn test_no_tags_rejected() {
        let mut p = payload();
        p.tags.clear();
        assert_eq!(p.validate().unwrap_err(), "At least one tag is required");
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let mut p = payload();
        p.tags = vec![1, 2, 1];
        assert_eq!(p.validate().unwrap_err(), "Tags must not repeat");
    }

    #[test]
    fn test_no_ingredients_rejected() {
        let mut p = payload();
        p.ingredients.clear();
        assert_eq!(
            p.validate().unwrap_err(),
            "At least one ingredient is required"
        );
    }

    #[test]
    fn test_duplicate_ingredients_rejected() {
        let mut p = payload();
        p.ingredients = vec![
            IngredientAmount { id: 3, amount: 1 },
            IngredientAmount { id: 3, amount: 2 },
        ];
        assert_eq!(p.validate().unwrap_err(), "Ingredients must not repeat");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut p = payload();
        p.ingredients = vec![IngredientAmount { id: 3, amount: 0 }];
        assert_eq!(
            p.validate().unwrap_err(),
            "Ingredient amount must be at least 1"
        );
    }
}
