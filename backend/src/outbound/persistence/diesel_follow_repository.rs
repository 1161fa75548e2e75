//! PostgreSQL-backed `FollowRepository` implementation using Diesel ORM.
//!
//! Follower lists are resolved by joining `follow` to `user` on one of the two
//! foreign keys, so no in-memory back references are needed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FollowRepository, PersistenceError};
use crate::domain::{Follow, FollowId, NewFollow, User, UserId};

use super::error_mapping::{expect_affected, map_diesel_error, map_pool_error};
use super::models::{FollowRow, NewFollowRow, UserRow};
use super::pool::DbPool;
use super::schema::{follow, user};

/// Diesel-backed implementation of the follow repository port.
#[derive(Clone)]
pub struct DieselFollowRepository {
    pool: DbPool,
}

impl DieselFollowRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for DieselFollowRepository {
    async fn create(&self, draft: &NewFollow) -> Result<Follow, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewFollowRow {
            follower_id: draft.follower_id.get(),
            following_id: draft.following_id.get(),
        };

        let row = diesel::insert_into(follow::table)
            .values(&new_row)
            .returning(FollowRow::as_returning())
            .get_result::<FollowRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: FollowId) -> Result<Option<Follow>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = follow::table
            .find(id.get())
            .select(FollowRow::as_select())
            .first::<FollowRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Follow::from))
    }

    async fn delete(&self, id: FollowId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(follow::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        expect_affected(affected, FollowId::ENTITY, id.get())
    }

    async fn followers_of(&self, user_id: UserId) -> Result<Vec<User>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = follow::table
            .inner_join(user::table.on(user::id.eq(follow::follower_id)))
            .filter(follow::following_id.eq(user_id.get()))
            .order(follow::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn followed_by(&self, user_id: UserId) -> Result<Vec<User>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = follow::table
            .inner_join(user::table.on(user::id.eq(follow::following_id)))
            .filter(follow::follower_id.eq(user_id.get()))
            .order(follow::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
