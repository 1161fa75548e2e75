//! Port for user account persistence.

use async_trait::async_trait;

use crate::domain::{EmailAddress, NewUser, User, UserChanges, UserId};

use super::PersistenceError;

/// Data-access contract for the `user` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its generated id.
    ///
    /// Fails with [`PersistenceError::UniqueConstraintViolation`] when the
    /// e-mail address is already registered.
    async fn create(&self, draft: &NewUser) -> Result<User, PersistenceError>;

    /// Fetch a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, PersistenceError>;

    /// Fetch a user by e-mail address.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, PersistenceError>;

    /// Apply a partial update and return the stored result.
    ///
    /// Fails with [`PersistenceError::NotFound`] when no such user exists.
    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<User, PersistenceError>;

    /// Delete a user together with everything that references it.
    ///
    /// Fails with [`PersistenceError::NotFound`] when no such user exists.
    async fn delete(&self, id: UserId) -> Result<(), PersistenceError>;
}
