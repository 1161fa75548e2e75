//! Port for follow edges between users.

use async_trait::async_trait;

use crate::domain::{Follow, FollowId, NewFollow, User, UserId};

use super::PersistenceError;

/// Data-access contract for the `follow` table.
///
/// Duplicate edges and self-follows are accepted.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert a follow edge.
    ///
    /// Fails with [`PersistenceError::ForeignKeyViolation`] when either user
    /// does not exist.
    async fn create(&self, draft: &NewFollow) -> Result<Follow, PersistenceError>;

    /// Fetch a follow edge by id.
    async fn find_by_id(&self, id: FollowId) -> Result<Option<Follow>, PersistenceError>;

    /// Remove a follow edge (unfollow).
    async fn delete(&self, id: FollowId) -> Result<(), PersistenceError>;

    /// Users following `user_id`, one entry per edge, oldest edge first.
    async fn followers_of(&self, user_id: UserId) -> Result<Vec<User>, PersistenceError>;

    /// Users that `user_id` follows, one entry per edge, oldest edge first.
    async fn followed_by(&self, user_id: UserId) -> Result<Vec<User>, PersistenceError>;
}
