//! Port for post persistence.

use async_trait::async_trait;

use crate::domain::{Caption, NewPost, Post, PostId, UserId};

use super::PersistenceError;

/// Data-access contract for the `post` table.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post and return it with its generated id.
    ///
    /// Fails with [`PersistenceError::ForeignKeyViolation`] when the owning
    /// user does not exist.
    async fn create(&self, draft: &NewPost) -> Result<Post, PersistenceError>;

    /// Fetch a post by id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PersistenceError>;

    /// List the posts owned by a user, oldest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Post>, PersistenceError>;

    /// Replace or clear the caption of a post.
    async fn update_caption(
        &self,
        id: PostId,
        caption: Option<&Caption>,
    ) -> Result<Post, PersistenceError>;

    /// Delete a post together with its likes and comments.
    async fn delete(&self, id: PostId) -> Result<(), PersistenceError>;
}
