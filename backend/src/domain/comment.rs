//! Comments attached to posts.

use serde::Serialize;

use super::ids::{CommentId, PostId, UserId};
use super::text::{CommentText, EntityValidationError};

/// Stored comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: CommentId,
    text: CommentText,
    user_id: UserId,
    post_id: PostId,
}

impl Comment {
    /// Assemble a comment from stored components.
    pub fn new(id: CommentId, text: CommentText, user_id: UserId, post_id: PostId) -> Self {
        Self {
            id,
            text,
            user_id,
            post_id,
        }
    }

    /// Generated primary key.
    pub fn id(&self) -> CommentId {
        self.id
    }

    /// Comment body.
    pub fn text(&self) -> &CommentText {
        &self.text
    }

    /// Author.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Commented post, read from the stored foreign key.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Public projection of every comment column.
    pub fn public_view(&self) -> CommentView<'_> {
        CommentView {
            id: self.id,
            text: self.text.as_str(),
            user_id: self.user_id,
            post_id: self.post_id,
        }
    }
}

/// Externally visible fields of a [`Comment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentView<'a> {
    pub id: CommentId,
    pub text: &'a str,
    pub user_id: UserId,
    pub post_id: PostId,
}

/// Input for submitting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_id: UserId,
    pub post_id: PostId,
    pub text: CommentText,
}

impl NewComment {
    /// Validate the comment body against the column width.
    pub fn try_new(
        user_id: UserId,
        post_id: PostId,
        text: impl Into<String>,
    ) -> Result<Self, EntityValidationError> {
        Ok(Self {
            user_id,
            post_id,
            text: CommentText::new(text)?,
        })
    }
}
