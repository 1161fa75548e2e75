//! PostgreSQL persistence adapters built on Diesel.
//!
//! Each repository implements one domain port. Integrity rules (unique email,
//! foreign keys and delete cascades) live in the migrations, so every write is
//! a single statement and the database reports violations through
//! [`crate::domain::ports::PersistenceError`].

mod diesel_comment_repository;
mod diesel_follow_repository;
mod diesel_like_repository;
mod diesel_post_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
pub mod schema;
mod settings;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_follow_repository::DieselFollowRepository;
pub use diesel_like_repository::DieselLikeRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
pub use settings::{DatabaseSettings, SettingsError};
