//! Repository ports: the data-access interface consumed by callers.
//!
//! Each trait covers one table. Adapters translate storage failures into
//! [`PersistenceError`] so callers can tell integrity violations apart from
//! infrastructure failures.

mod macros;
pub(crate) use macros::define_port_error;

mod comment_repository;
mod follow_repository;
mod like_repository;
mod persistence_error;
mod post_repository;
mod user_repository;

pub use comment_repository::CommentRepository;
pub use follow_repository::FollowRepository;
pub use like_repository::LikeRepository;
pub use persistence_error::PersistenceError;
pub use post_repository::PostRepository;
pub use user_repository::UserRepository;
