//! Port for likes on posts.

use async_trait::async_trait;

use crate::domain::{Like, LikeId, NewLike, PostId, UserId};

use super::PersistenceError;

/// Data-access contract for the `like` table.
///
/// A user may like the same post more than once.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like.
    ///
    /// Fails with [`PersistenceError::ForeignKeyViolation`] when the user or
    /// post does not exist.
    async fn create(&self, draft: &NewLike) -> Result<Like, PersistenceError>;

    /// Fetch a like by id.
    async fn find_by_id(&self, id: LikeId) -> Result<Option<Like>, PersistenceError>;

    /// Remove a like (unlike).
    async fn delete(&self, id: LikeId) -> Result<(), PersistenceError>;

    /// Likes on a post, oldest first.
    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Like>, PersistenceError>;

    /// Likes given by a user, oldest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Like>, PersistenceError>;
}
