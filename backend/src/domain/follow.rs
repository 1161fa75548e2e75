//! Directed follow edges between users.

use serde::Serialize;

use super::ids::{FollowId, UserId};

/// Stored follow edge: `follower_id` follows `following_id`.
///
/// Neither uniqueness of the pair nor `follower_id != following_id` is
/// enforced; duplicate edges and self-follows are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Follow {
    id: FollowId,
    follower_id: UserId,
    following_id: UserId,
}

impl Follow {
    /// Assemble a follow edge from stored components.
    pub fn new(id: FollowId, follower_id: UserId, following_id: UserId) -> Self {
        Self {
            id,
            follower_id,
            following_id,
        }
    }

    /// Generated primary key.
    pub fn id(&self) -> FollowId {
        self.id
    }

    /// User doing the following.
    pub fn follower_id(&self) -> UserId {
        self.follower_id
    }

    /// User being followed.
    pub fn following_id(&self) -> UserId {
        self.following_id
    }

    /// Public projection of every follow column.
    pub fn public_view(&self) -> FollowView {
        FollowView {
            id: self.id,
            follower_id: self.follower_id,
            following_id: self.following_id,
        }
    }
}

/// Externally visible fields of a [`Follow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowView {
    pub id: FollowId,
    pub follower_id: UserId,
    pub following_id: UserId,
}

/// Input for creating a follow edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFollow {
    pub follower_id: UserId,
    pub following_id: UserId,
}

impl NewFollow {
    /// Edge from `follower_id` to `following_id`.
    pub fn new(follower_id: UserId, following_id: UserId) -> Self {
        Self {
            follower_id,
            following_id,
        }
    }
}
