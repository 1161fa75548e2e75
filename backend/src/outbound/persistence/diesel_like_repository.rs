//! PostgreSQL-backed `LikeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LikeRepository, PersistenceError};
use crate::domain::{Like, LikeId, NewLike, PostId, UserId};

use super::error_mapping::{expect_affected, map_diesel_error, map_pool_error};
use super::models::{LikeRow, NewLikeRow};
use super::pool::DbPool;
use super::schema::like;

/// Diesel-backed implementation of the like repository port.
#[derive(Clone)]
pub struct DieselLikeRepository {
    pool: DbPool,
}

impl DieselLikeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for DieselLikeRepository {
    async fn create(&self, draft: &NewLike) -> Result<Like, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewLikeRow {
            user_id: draft.user_id.get(),
            post_id: draft.post_id.get(),
        };

        let row = diesel::insert_into(like::table)
            .values(&new_row)
            .returning(LikeRow::as_returning())
            .get_result::<LikeRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: LikeId) -> Result<Option<Like>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = like::table
            .find(id.get())
            .select(LikeRow::as_select())
            .first::<LikeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Like::from))
    }

    async fn delete(&self, id: LikeId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(like::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        expect_affected(affected, LikeId::ENTITY, id.get())
    }

    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Like>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<LikeRow> = like::table
            .filter(like::post_id.eq(post_id.get()))
            .order(like::id.asc())
            .select(LikeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Like::from).collect())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Like>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<LikeRow> = like::table
            .filter(like::user_id.eq(user_id.get()))
            .order(like::id.asc())
            .select(LikeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Like::from).collect())
    }
}
