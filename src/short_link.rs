//! Short-link token derivation for shareable recipe URLs.
//!
//! Tokens are a deterministic hashids encoding of the recipe's integer id:
//! no salt, no stored counter, the same id always produces the same token.
//! Resolution goes the other way through the unique `short_link` column in
//! the store, never through the codec.

use harsh::Harsh;
use std::sync::LazyLock;

/// Minimum length of a generated token.
const MIN_TOKEN_LENGTH: usize = 3;

static CODEC: LazyLock<Harsh> = LazyLock::new(|| {
    Harsh::builder()
        .length(MIN_TOKEN_LENGTH)
        .build()
        .expect("static hashids configuration is valid")
});

/// Derive the short-link token for a recipe id.
///
/// Only meaningful once the store has assigned the id; callers persist the
/// result in the same transaction as the recipe insert.
pub fn encode_recipe_id(id: i32) -> String {
    CODEC.encode(&[id as u64])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode_recipe_id(42), encode_recipe_id(42));
        assert_eq!(encode_recipe_id(1), encode_recipe_id(1));
    }

    #[test]
    fn test_encode_respects_minimum_length() {
        for id in [1, 7, 100, 65536, i32::MAX] {
            assert!(
                encode_recipe_id(id).len() >= MIN_TOKEN_LENGTH,
                "token for {} shorter than minimum",
                id
            );
        }
    }

    #[test]
    fn test_encode_uses_alphanumeric_alphabet() {
        for id in 1..=500 {
            let token = encode_recipe_id(id);
            assert!(
                token.chars().all(|c| c.is_ascii_alphanumeric()),
                "token {:?} for {} contains non-alphanumeric characters",
                token,
                id
            );
        }
    }

    #[test]
    fn test_encode_distinct_ids_yield_distinct_tokens() {
        let mut seen = HashSet::new();
        for id in 1..=2000 {
            assert!(seen.insert(encode_recipe_id(id)), "collision at id {}", id);
        }
    }
}
