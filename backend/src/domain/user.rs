//! User accounts, the root aggregate of the model.

use serde::Serialize;

use super::ids::UserId;
use super::text::{EmailAddress, EntityValidationError, Password};

/// Stored user account.
///
/// ## Invariants
/// - `email` is unique across all users (enforced by the `user_email_key`
///   constraint).
/// - Deleting a user removes every post, follow edge, like and comment that
///   references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    password: Password,
    is_active: bool,
}

impl User {
    /// Assemble a user from stored components.
    pub fn new(id: UserId, email: EmailAddress, password: Password, is_active: bool) -> Self {
        Self {
            id,
            email,
            password,
            is_active,
        }
    }

    /// Generated primary key.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login e-mail address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password, opaque to this layer.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Whether the account is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Public projection; `password` and `is_active` are never exposed.
    pub fn public_view(&self) -> UserView<'_> {
        UserView {
            id: self.id,
            email: self.email.as_str(),
        }
    }
}

/// Externally visible fields of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserView<'a> {
    pub id: UserId,
    pub email: &'a str,
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: Password,
    pub is_active: bool,
}

impl NewUser {
    /// Validate raw inputs against the column widths.
    pub fn try_new(
        email: impl Into<String>,
        password: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, EntityValidationError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
            is_active,
        })
    }
}

/// Partial update of the mutable user fields.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<EmailAddress>,
    pub password: Option<Password>,
    pub is_active: Option<bool>,
}

impl UserChanges {
    /// Replace the e-mail address.
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Replace the stored password.
    pub fn with_password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Activate or deactivate the account.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.is_active.is_none()
    }
}
