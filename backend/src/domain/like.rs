//! Likes recorded by users on posts.

use serde::Serialize;

use super::ids::{LikeId, PostId, UserId};

/// Stored like. The `(user_id, post_id)` pair is not unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Like {
    id: LikeId,
    user_id: UserId,
    post_id: PostId,
}

impl Like {
    /// Assemble a like from stored components.
    pub fn new(id: LikeId, user_id: UserId, post_id: PostId) -> Self {
        Self {
            id,
            user_id,
            post_id,
        }
    }

    /// Generated primary key.
    pub fn id(&self) -> LikeId {
        self.id
    }

    /// User who liked the post.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Liked post, read from the stored foreign key.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Public projection of every like column.
    pub fn public_view(&self) -> LikeView {
        LikeView {
            id: self.id,
            user_id: self.user_id,
            post_id: self.post_id,
        }
    }
}

/// Externally visible fields of a [`Like`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeView {
    pub id: LikeId,
    pub user_id: UserId,
    pub post_id: PostId,
}

/// Input for recording a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLike {
    pub user_id: UserId,
    pub post_id: PostId,
}

impl NewLike {
    /// Like of `post_id` by `user_id`.
    pub fn new(user_id: UserId, post_id: PostId) -> Self {
        Self { user_id, post_id }
    }
}
