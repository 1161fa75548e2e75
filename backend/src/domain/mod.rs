//! Domain entities and the ports through which they are persisted.
//!
//! Purpose: define the five persisted entities, their creation drafts and
//! their public projections. Relationships are plain id fields resolved by
//! repository queries; no entity holds a reference to another.
//!
//! Public surface:
//! - `User`, `Post`, `Follow`, `Like`, `Comment`: stored entities.
//! - `NewUser`, `NewPost`, `NewFollow`, `NewLike`, `NewComment`: inputs for
//!   the create operations; `UserChanges` for partial user updates.
//! - `*View`: serialisable projections forming the external contract.
//! - `ports`: repository traits and `PersistenceError`.

pub mod comment;
pub mod follow;
pub mod ids;
pub mod like;
pub mod ports;
pub mod post;
pub mod text;
pub mod user;

pub use self::comment::{Comment, CommentView, NewComment};
pub use self::follow::{Follow, FollowView, NewFollow};
pub use self::ids::{CommentId, FollowId, LikeId, PostId, UserId};
pub use self::like::{Like, LikeView, NewLike};
pub use self::post::{NewPost, Post, PostView};
pub use self::text::{
    Caption, CommentText, EmailAddress, EntityValidationError, ImageRef, Password,
};
pub use self::user::{NewUser, User, UserChanges, UserView};
