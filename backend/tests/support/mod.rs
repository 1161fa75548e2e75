//! Shared helper utilities for the persistence integration tests.
//!
//! Each file under `backend/tests/` compiles as its own crate; this module is
//! pulled in with `mod support;` so the embedded-cluster plumbing lives in one
//! place.

mod cluster;
mod cluster_skip;
mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{TestContext, setup_context};

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// `postgres::Error`'s `Display` often collapses database errors to a generic
/// `db error`; `as_db_error()` keeps the message and SQLSTATE.
#[allow(dead_code, reason = "Only suites that issue raw SQL call this")]
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );

    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }

    if let Some(constraint) = db_error.constraint() {
        summary.push_str("; constraint: ");
        summary.push_str(constraint);
    }

    summary
}

/// Count rows in `table` with a raw query, bypassing the repositories.
#[allow(dead_code, reason = "Only the cascade suites count rows directly")]
pub fn count_rows(url: &str, table: &str) -> Result<i64, String> {
    let mut client = postgres::Client::connect(url, postgres::NoTls)
        .map_err(|err| format_postgres_error(&err))?;
    let escaped = table.replace('"', "\"\"");
    let row = client
        .query_one(format!(r#"SELECT COUNT(*) FROM "{escaped}""#).as_str(), &[])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
