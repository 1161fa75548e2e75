//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Table names
//! are singular; `user` and `like` are reserved words in PostgreSQL, which
//! Diesel handles by quoting every identifier it emits.

diesel::table! {
    /// Registered user accounts.
    user (id) {
        /// Primary key, generated on insert.
        id -> Int4,
        /// Login e-mail address (max 120 characters, unique).
        email -> Varchar,
        /// Opaque password value (max 255 characters).
        password -> Varchar,
        /// Whether the account is active.
        is_active -> Bool,
    }
}

diesel::table! {
    /// Posts; `user_id` cascades on user deletion.
    post (id) {
        id -> Int4,
        /// Optional caption (max 500 characters).
        caption -> Nullable<Varchar>,
        /// Image URI or storage reference (max 255 characters).
        image -> Varchar,
        user_id -> Int4,
    }
}

diesel::table! {
    /// Directed follow edges; both ends cascade on user deletion.
    follow (id) {
        id -> Int4,
        follower_id -> Int4,
        following_id -> Int4,
    }
}

diesel::table! {
    /// Likes; cascade on user or post deletion.
    like (id) {
        id -> Int4,
        user_id -> Int4,
        post_id -> Int4,
    }
}

diesel::table! {
    /// Comments; cascade on user or post deletion.
    comment (id) {
        id -> Int4,
        /// Comment body (max 500 characters).
        text -> Varchar,
        user_id -> Int4,
        post_id -> Int4,
    }
}

// `follow` references `user` twice, so it has no `joinable!` entry; its
// joins spell out the `ON` clause explicitly.
diesel::joinable!(post -> user (user_id));
diesel::joinable!(like -> user (user_id));
diesel::joinable!(like -> post (post_id));
diesel::joinable!(comment -> user (user_id));
diesel::joinable!(comment -> post (post_id));

diesel::allow_tables_to_appear_in_same_query!(user, post, follow, like, comment);
