//! Integer surrogate keys for persisted entities.
//!
//! Keys are generated by the database on insert (`SERIAL`), so the domain
//! never mints them; it only wraps values read back from storage.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident => $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Entity label used in error messages and logs.
            pub const ENTITY: &'static str = $entity;

            /// Wrap a key read from the `id` column.
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Raw key as stored in the database.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_entity_id! {
    /// Primary key of the `user` table.
    UserId => "user"
}

define_entity_id! {
    /// Primary key of the `post` table.
    PostId => "post"
}

define_entity_id! {
    /// Primary key of the `follow` table.
    FollowId => "follow"
}

define_entity_id! {
    /// Primary key of the `like` table.
    LikeId => "like"
}

define_entity_id! {
    /// Primary key of the `comment` table.
    CommentId => "comment"
}
