//! Bounded text values matching the `VARCHAR(n)` columns of the schema.
//!
//! Each newtype rejects input longer than its column width, counted in
//! characters as PostgreSQL counts them. No other rule applies: empty strings
//! are accepted because the columns are only `NOT NULL`.

use std::fmt;

use thiserror::Error;

/// Validation errors raised when building entity field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityValidationError {
    /// Value exceeds the width of its column.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

macro_rules! define_bounded_text {
    ($(#[$meta:meta])* $name:ident { field: $field:literal, max: $max:expr $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters accepted.
            pub const MAX_CHARS: usize = $max;

            /// Validate the column width and wrap the value.
            pub fn new(value: impl Into<String>) -> Result<Self, EntityValidationError> {
                let value = value.into();
                let actual = value.chars().count();
                if actual > Self::MAX_CHARS {
                    return Err(EntityValidationError::TooLong {
                        field: $field,
                        max: Self::MAX_CHARS,
                        actual,
                    });
                }
                Ok(Self(value))
            }

            /// Borrow the stored text.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Consume the wrapper and return the owned text.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = EntityValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_bounded_text! {
    /// Login e-mail address, unique across all users.
    #[derive(Debug)]
    EmailAddress { field: "email", max: 120 }
}

define_bounded_text! {
    /// Password exactly as supplied by the caller.
    ///
    /// This layer treats the value as opaque and never hashes it; hashing is
    /// the responsibility of whichever authentication component writes it.
    /// `Debug` output is redacted.
    Password { field: "password", max: 255 }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

define_bounded_text! {
    /// Optional post caption.
    #[derive(Debug)]
    Caption { field: "caption", max: 500 }
}

define_bounded_text! {
    /// URI or storage reference for a post image; never binary data.
    #[derive(Debug)]
    ImageRef { field: "image", max: 255 }
}

define_bounded_text! {
    /// Body of a comment.
    #[derive(Debug)]
    CommentText { field: "text", max: 500 }
}
