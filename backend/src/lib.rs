//! Relational schema and persistence adapters for a small social graph.
//!
//! The crate owns five entities (users, posts, follows, likes and comments),
//! the PostgreSQL schema that stores them, and Diesel-backed repositories
//! that expose the data-access interface consumed by an application layer.
//!
//! - [`domain`] holds entity types, projections and the repository ports.
//! - [`outbound::persistence`] implements those ports against PostgreSQL.

pub mod domain;
pub mod outbound;
