diesel::table! {
    users (id) {
        id -> Int4,
        #[max_length = 254]
        email -> Varchar,
        #[max_length = 150]
        username -> Varchar,
        #[max_length = 150]
        first_name -> Varchar,
        #[max_length = 150]
        last_name -> Varchar,
        #[max_length = 255]
        password_hash -> Varchar,
        avatar -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    sessions (id) {
        id -> Int4,
        user_id -> Int4,
        #[max_length = 255]
        token_hash -> Varchar,
        expires_at -> Timestamptz,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    tags (id) {
        id -> Int4,
        #[max_length = 32]
        name -> Varchar,
        #[max_length = 32]
        slug -> Varchar,
    }
}

diesel::table! {
    ingredients (id) {
        id -> Int4,
        #[max_length = 128]
        name -> Varchar,
        #[max_length = 64]
        measurement_unit -> Varchar,
    }
}

diesel::table! {
    recipes (id) {
        id -> Int4,
        author_id -> Int4,
        #[max_length = 256]
        name -> Varchar,
        text -> Text,
        cooking_time -> Int4,
        image -> Varchar,
        #[max_length = 32]
        short_link -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    recipe_ingredients (id) {
        id -> Int4,
        recipe_id -> Int4,
        ingredient_id -> Int4,
        amount -> Int4,
    }
}

diesel::table! {
    recipe_tags (id) {
        id -> Int4,
        recipe_id -> Int4,
        tag_id -> Int4,
    }
}

diesel::table! {
    favourites (id) {
        id -> Int4,
        user_id -> Int4,
        recipe_id -> Int4,
    }
}

diesel::table! {
    shopping_list (id) {
        id -> Int4,
        user_id -> Int4,
        recipe_id -> Int4,
    }
}

diesel::table! {
    subscriptions (id) {
        id -> Int4,
        user_id -> Int4,
        author_id -> Int4,
    }
}

diesel::joinable!(sessions -> users (user_id));
diesel::joinable!(recipes -> users (author_id));
diesel::joinable!(recipe_ingredients -> recipes (recipe_id));
diesel::joinable!(recipe_ingredients -> ingredients (ingredient_id));
diesel::joinable!(recipe_tags -> recipes (recipe_id));
diesel::joinable!(recipe_tags -> tags (tag_id));
diesel::joinable!(favourites -> users (user_id));
diesel::joinable!(favourites -> recipes (recipe_id));
diesel::joinable!(shopping_list -> users (user_id));
diesel::joinable!(shopping_list -> recipes (recipe_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    sessions,
    tags,
    ingredients,
    recipes,
    recipe_ingredients,
    recipe_tags,
    favourites,
    shopping_list,
    subscriptions,
);
