//! Posts published by users.

use serde::Serialize;

use super::ids::{PostId, UserId};
use super::text::{Caption, EntityValidationError, ImageRef};

/// Stored post.
///
/// `user_id` always references an existing user; deleting that user deletes
/// the post, and deleting the post deletes its likes and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    caption: Option<Caption>,
    image: ImageRef,
    user_id: UserId,
}

impl Post {
    /// Assemble a post from stored components.
    pub fn new(id: PostId, caption: Option<Caption>, image: ImageRef, user_id: UserId) -> Self {
        Self {
            id,
            caption,
            image,
            user_id,
        }
    }

    /// Generated primary key.
    pub fn id(&self) -> PostId {
        self.id
    }

    /// Caption, when one was written.
    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    /// Image reference.
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Owning user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Public projection of every post column.
    pub fn public_view(&self) -> PostView<'_> {
        PostView {
            id: self.id,
            caption: self.caption.as_ref().map(Caption::as_str),
            image: self.image.as_str(),
            user_id: self.user_id,
        }
    }
}

/// Externally visible fields of a [`Post`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostView<'a> {
    pub id: PostId,
    pub caption: Option<&'a str>,
    pub image: &'a str,
    pub user_id: UserId,
}

/// Input for publishing a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: UserId,
    pub image: ImageRef,
    pub caption: Option<Caption>,
}

impl NewPost {
    /// Validate raw inputs against the column widths.
    pub fn try_new(
        user_id: UserId,
        image: impl Into<String>,
        caption: Option<String>,
    ) -> Result<Self, EntityValidationError> {
        Ok(Self {
            user_id,
            image: ImageRef::new(image)?,
            caption: caption.map(Caption::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_json_snapshot;
    use rstest::rstest;

    use super::*;

    fn post(caption: Option<&str>) -> Post {
        let draft = NewPost::try_new(UserId::new(1), "img.png", caption.map(str::to_owned))
            .expect("valid draft");
        Post::new(PostId::new(1), draft.caption, draft.image, draft.user_id)
    }

    #[rstest]
    fn public_view_lists_every_column() {
        assert_json_snapshot!(post(Some("hi")).public_view(), @r#"
        {
          "id": 1,
          "caption": "hi",
          "image": "img.png",
          "user_id": 1
        }
        "#);
    }

    #[rstest]
    fn missing_caption_projects_as_null() {
        let value = serde_json::to_value(post(None).public_view()).expect("serialise view");
        assert_eq!(value["caption"], serde_json::Value::Null);
        assert_eq!(value["image"], "img.png");
    }

    #[rstest]
    #[case::caption(Some("c".repeat(501)), "a.png".to_owned(), "caption")]
    #[case::image(None, "i".repeat(256), "image")]
    fn draft_rejects_overlong_fields(
        #[case] caption: Option<String>,
        #[case] image: String,
        #[case] expected_field: &str,
    ) {
        let err = NewPost::try_new(UserId::new(1), image, caption).expect_err("too long");
        let EntityValidationError::TooLong { field, .. } = err;
        assert_eq!(field, expected_field);
    }
}
