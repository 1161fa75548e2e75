//! Error taxonomy shared by every repository port.

use super::define_port_error;

define_port_error! {
    /// Failures surfaced by repository adapters.
    ///
    /// Integrity violations are reported by the database and passed through
    /// unchanged in meaning; adapters never retry or recover silently.
    pub enum PersistenceError {
        /// A unique constraint rejected the write (duplicate `email`).
        UniqueConstraintViolation { constraint: String } =>
            "unique constraint violated: {constraint}",
        /// A referenced user or post does not exist.
        ForeignKeyViolation { constraint: String } =>
            "foreign key constraint violated: {constraint}",
        /// The targeted row does not exist.
        NotFound { entity: String, id: i32 } =>
            "{entity} {id} not found",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "repository connection failed: {message}",
        /// Query or mutation failed for any other reason.
        Query { message: String } =>
            "repository query failed: {message}",
    }
}
