//! Plain-text shopping report rendering.
//!
//! Takes the rows the download handler pulls from the store (queued recipes
//! in membership-insertion order, ingredient totals sorted by name) and
//! assembles the line-oriented UTF-8 report. Pure formatting, no store
//! access and no side effects.

/// One recipe the user has queued for shopping.
pub struct QueuedRecipe {
    pub name: String,
    pub cooking_time: i32,
}

/// Summed amount for one distinct (name, measurement unit) ingredient
/// across every queued recipe.
pub struct IngredientTotal {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

/// Render the shopping report.
///
/// One block per queued recipe, each followed by a blank line, then the
/// ingredient summary header and one indented line per distinct ingredient.
/// An empty shopping list renders only the header.
pub fn render_shopping_list(recipes: &[QueuedRecipe], totals: &[IngredientTotal]) -> String {
    let mut out = String::new();

    for recipe in recipes {
        out.push_str(&format!(
            "Название: {}\nВремя приготовления: {}\n\n",
            recipe.name, recipe.cooking_time
        ));
    }

    out.push_str("Список всех ингредиентов:\n");

    for total in totals {
        out.push_str(&format!(
            "  - {} ({}) — {}\n",
            total.name, total.measurement_unit, total.total_amount
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, cooking_time: i32) -> QueuedRecipe {
        QueuedRecipe {
            name: name.to_string(),
            cooking_time,
        }
    }

    fn total(name: &str, unit: &str, amount: i64) -> IngredientTotal {
        IngredientTotal {
            name: name.to_string(),
            measurement_unit: unit.to_string(),
            total_amount: amount,
        }
    }

    #[test]
    fn test_empty_list_renders_only_header() {
        assert_eq!(
            render_shopping_list(&[], &[]),
            "Список всех ингредиентов:\n"
        );
    }

    #[test]
    fn test_two_recipes_with_merged_ingredient() {
        let recipes = vec![recipe("Tea", 5), recipe("Coffee", 3)];
        let totals = vec![total("Sugar", "g", 15), total("Water", "ml", 200)];

        let expected = "Название: Tea\n\
                        Время приготовления: 5\n\
                        \n\
                        Название: Coffee\n\
                        Время приготовления: 3\n\
                        \n\
                        Список всех ингредиентов:\n\
                        \u{20}\u{20}- Sugar (g) — 15\n\
                        \u{20}\u{20}- Water (ml) — 200\n";

        assert_eq!(render_shopping_list(&recipes, &totals), expected);
    }

    #[test]
    fn test_single_recipe_block_layout() {
        let out = render_shopping_list(&[recipe("Борщ", 90)], &[total("Свекла", "шт", 2)]);

        assert_eq!(
            out,
            "Название: Борщ\nВремя приготовления: 90\n\nСписок всех ингредиентов:\n  - Свекла (шт) — 2\n"
        );
    }

    #[test]
    fn test_recipes_without_ingredients_keep_header() {
        let out = render_shopping_list(&[recipe("Toast", 2)], &[]);
        assert!(out.ends_with("Список всех ингредиентов:\n"));
        assert!(out.starts_with("Название: Toast\n"));
    }
}
