//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it. Conversions into domain entities re-run the column-width
//! validation, so a row that no longer fits its domain type surfaces as a
//! query error instead of a panic.

use diesel::prelude::*;

use crate::domain::ports::PersistenceError;
use crate::domain::{
    Caption, Comment, CommentId, CommentText, EmailAddress, EntityValidationError, Follow,
    FollowId, ImageRef, Like, LikeId, Password, Post, PostId, User, UserId,
};

use super::schema::{comment, follow, like, post, user};

fn invalid_row(table: &str, err: EntityValidationError) -> PersistenceError {
    PersistenceError::query(format!("decode {table} row: {err}"))
}

// ---------------------------------------------------------------------------
// User models
// ---------------------------------------------------------------------------

/// Row struct for reading from the user table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            id,
            email,
            password,
            is_active,
        } = row;
        let email = EmailAddress::new(email).map_err(|err| invalid_row("user", err))?;
        let password = Password::new(password).map_err(|err| invalid_row("user", err))?;
        Ok(User::new(UserId::new(id), email, password, is_active))
    }
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub is_active: bool,
}

/// Changeset for partial user updates; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = user)]
pub(crate) struct UserUpdate<'a> {
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Post models
// ---------------------------------------------------------------------------

/// Row struct for reading from the post table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: i32,
    pub caption: Option<String>,
    pub image: String,
    pub user_id: i32,
}

impl TryFrom<PostRow> for Post {
    type Error = PersistenceError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let PostRow {
            id,
            caption,
            image,
            user_id,
        } = row;
        let caption = caption
            .map(Caption::new)
            .transpose()
            .map_err(|err| invalid_row("post", err))?;
        let image = ImageRef::new(image).map_err(|err| invalid_row("post", err))?;
        Ok(Post::new(
            PostId::new(id),
            caption,
            image,
            UserId::new(user_id),
        ))
    }
}

/// Insertable struct for creating post records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post)]
pub(crate) struct NewPostRow<'a> {
    pub caption: Option<&'a str>,
    pub image: &'a str,
    pub user_id: i32,
}

/// Changeset that writes the caption even when it is `None`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = post)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PostCaptionUpdate<'a> {
    pub caption: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Follow models
// ---------------------------------------------------------------------------

/// Row struct for reading from the follow table.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = follow)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FollowRow {
    pub id: i32,
    pub follower_id: i32,
    pub following_id: i32,
}

impl From<FollowRow> for Follow {
    fn from(row: FollowRow) -> Self {
        Follow::new(
            FollowId::new(row.id),
            UserId::new(row.follower_id),
            UserId::new(row.following_id),
        )
    }
}

/// Insertable struct for creating follow edges.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = follow)]
pub(crate) struct NewFollowRow {
    pub follower_id: i32,
    pub following_id: i32,
}

// ---------------------------------------------------------------------------
// Like models
// ---------------------------------------------------------------------------

/// Row struct for reading from the like table.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = like)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LikeRow {
    pub id: i32,
    pub user_id: i32,
    pub post_id: i32,
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Like::new(
            LikeId::new(row.id),
            UserId::new(row.user_id),
            PostId::new(row.post_id),
        )
    }
}

/// Insertable struct for recording likes.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = like)]
pub(crate) struct NewLikeRow {
    pub user_id: i32,
    pub post_id: i32,
}

// ---------------------------------------------------------------------------
// Comment models
// ---------------------------------------------------------------------------

/// Row struct for reading from the comment table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i32,
    pub text: String,
    pub user_id: i32,
    pub post_id: i32,
}

impl TryFrom<CommentRow> for Comment {
    type Error = PersistenceError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let CommentRow {
            id,
            text,
            user_id,
            post_id,
        } = row;
        let text = CommentText::new(text).map_err(|err| invalid_row("comment", err))?;
        Ok(Comment::new(
            CommentId::new(id),
            text,
            UserId::new(user_id),
            PostId::new(post_id),
        ))
    }
}

/// Insertable struct for creating comments.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comment)]
pub(crate) struct NewCommentRow<'a> {
    pub text: &'a str,
    pub user_id: i32,
    pub post_id: i32,
}
