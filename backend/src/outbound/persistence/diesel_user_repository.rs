//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Deleting a user is a single `DELETE`; the `ON DELETE CASCADE` foreign keys
//! remove the user's posts, follow edges, likes and comments (and the likes
//! and comments on those posts) inside the same statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, User, UserChanges, UserId};

use super::error_mapping::{expect_affected, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::DbPool;
use super::schema::user;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn user_not_found(id: UserId) -> PersistenceError {
    PersistenceError::not_found(UserId::ENTITY, id.get())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, draft: &NewUser) -> Result<User, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            email: draft.email.as_str(),
            password: draft.password.as_str(),
            is_active: draft.is_active,
        };

        let row = diesel::insert_into(user::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = user::table
            .find(id.get())
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = user::table
            .filter(user::email.eq(email.as_str()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<User, PersistenceError> {
        // Diesel rejects an empty changeset, so a no-op update is a lookup.
        if changes.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| user_not_found(id));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = UserUpdate {
            email: changes.email.as_ref().map(EmailAddress::as_str),
            password: changes.password.as_ref().map(|password| password.as_str()),
            is_active: changes.is_active,
        };

        let row = diesel::update(user::table.find(id.get()))
            .set(&changeset)
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(User::try_from)
            .transpose()?
            .ok_or_else(|| user_not_found(id))
    }

    async fn delete(&self, id: UserId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(user::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        expect_affected(affected, UserId::ENTITY, id.get())?;
        debug!(user_id = %id, "deleted user and dependent rows");
        Ok(())
    }
}
