//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PersistenceError, PostRepository};
use crate::domain::{Caption, NewPost, Post, PostId, UserId};

use super::error_mapping::{expect_affected, map_diesel_error, map_pool_error};
use super::models::{NewPostRow, PostCaptionUpdate, PostRow};
use super::pool::DbPool;
use super::schema::post;

/// Diesel-backed implementation of the post repository port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn create(&self, draft: &NewPost) -> Result<Post, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPostRow {
            caption: draft.caption.as_ref().map(Caption::as_str),
            image: draft.image.as_str(),
            user_id: draft.user_id.get(),
        };

        let row = diesel::insert_into(post::table)
            .values(&new_row)
            .returning(PostRow::as_returning())
            .get_result::<PostRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Post::try_from(row)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = post::table
            .find(id.get())
            .select(PostRow::as_select())
            .first::<PostRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Post>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PostRow> = post::table
            .filter(post::user_id.eq(user_id.get()))
            .order(post::id.asc())
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn update_caption(
        &self,
        id: PostId,
        caption: Option<&Caption>,
    ) -> Result<Post, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = PostCaptionUpdate {
            caption: caption.map(Caption::as_str),
        };

        let row = diesel::update(post::table.find(id.get()))
            .set(&changeset)
            .returning(PostRow::as_returning())
            .get_result::<PostRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Post::try_from)
            .transpose()?
            .ok_or_else(|| PersistenceError::not_found(PostId::ENTITY, id.get()))
    }

    async fn delete(&self, id: PostId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(post::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        expect_affected(affected, PostId::ENTITY, id.get())
    }
}
