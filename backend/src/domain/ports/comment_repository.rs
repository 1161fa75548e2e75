//! Port for comments on posts.

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, NewComment, PostId, UserId};

use super::PersistenceError;

/// Data-access contract for the `comment` table.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment.
    ///
    /// Fails with [`PersistenceError::ForeignKeyViolation`] when the author
    /// or post does not exist.
    async fn create(&self, draft: &NewComment) -> Result<Comment, PersistenceError>;

    /// Fetch a comment by id.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, PersistenceError>;

    /// Delete a comment.
    async fn delete(&self, id: CommentId) -> Result<(), PersistenceError>;

    /// Comments on a post, oldest first.
    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, PersistenceError>;

    /// Comments written by a user, oldest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Comment>, PersistenceError>;
}
