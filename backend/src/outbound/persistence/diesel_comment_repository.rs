//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, PersistenceError};
use crate::domain::{Comment, CommentId, NewComment, PostId, UserId};

use super::error_mapping::{expect_affected, map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comment;

/// Diesel-backed implementation of the comment repository port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn create(&self, draft: &NewComment) -> Result<Comment, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCommentRow {
            text: draft.text.as_str(),
            user_id: draft.user_id.get(),
            post_id: draft.post_id.get(),
        };

        let row = diesel::insert_into(comment::table)
            .values(&new_row)
            .returning(CommentRow::as_returning())
            .get_result::<CommentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = comment::table
            .find(id.get())
            .select(CommentRow::as_select())
            .first::<CommentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(comment::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        expect_affected(affected, CommentId::ENTITY, id.get())
    }

    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comment::table
            .filter(comment::post_id.eq(post_id.get()))
            .order(comment::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Comment>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comment::table
            .filter(comment::user_id.eq(user_id.get()))
            .order(comment::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
