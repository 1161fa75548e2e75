//! Embedded PostgreSQL provisioning for the repository suites.
//!
//! A template database is migrated once per migrations-directory hash and every
//! test clones it, so each test starts from an empty, fully migrated schema.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use social_backend::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselFollowRepository, DieselLikeRepository,
    DieselPostRepository, DieselUserRepository, PoolConfig, run_pending_migrations,
};
use tokio::runtime::Runtime;
use uuid::Uuid;

use super::cluster::shared_cluster_handle;

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "social_template";
const TEMPLATE_PROVISION_RETRIES: usize = 5;
const TEMPLATE_PROVISION_RETRY_DELAY: Duration = Duration::from_millis(500);

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

fn template_database_name() -> Result<String, String> {
    let hash = hash_directory(migrations_dir()).map_err(|err| format!("hash migrations: {err}"))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

/// Create or reuse the migrated template database.
fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, String> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;

    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(&template_name);
        run_pending_migrations(&url).map_err(|err| err.to_string())?;
    }

    Ok(template_name)
}

/// Provision a temporary database cloned from the migration template.
fn provision_template_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let mut last_error = String::from("create database from template: exhausted retries");
    for attempt in 1..=TEMPLATE_PROVISION_RETRIES {
        let outcome = ensure_template_database(cluster).and_then(|template| {
            let db_name = format!("test_{}", Uuid::new_v4().simple());
            cluster
                .temporary_database_from_template(db_name.as_str(), template.as_str())
                .map_err(|err| format!("create database from template: {err:?}"))
        });
        match outcome {
            Ok(database) => return Ok(database),
            Err(error) => {
                last_error = format!("attempt {attempt}/{TEMPLATE_PROVISION_RETRIES}: {error}");
            }
        }
        if attempt < TEMPLATE_PROVISION_RETRIES {
            std::thread::sleep(TEMPLATE_PROVISION_RETRY_DELAY);
        }
    }
    Err(last_error)
}

/// One migrated database plus a repository for every entity.
#[allow(
    dead_code,
    reason = "Each suite reads only the repositories and URL it exercises"
)]
pub struct TestContext {
    pub runtime: Runtime,
    pub users: DieselUserRepository,
    pub posts: DieselPostRepository,
    pub follows: DieselFollowRepository,
    pub likes: DieselLikeRepository,
    pub comments: DieselCommentRepository,
    pub database_url: String,
    _database: TemporaryDatabase,
}

/// Build a [`TestContext`] against a fresh clone of the template.
pub fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster_handle().map_err(|err| err.to_string())?;
    let temp_db = provision_template_database(cluster)?;
    let database_url = temp_db.url().to_string();

    let config = PoolConfig::new(database_url.as_str())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        users: DieselUserRepository::new(pool.clone()),
        posts: DieselPostRepository::new(pool.clone()),
        follows: DieselFollowRepository::new(pool.clone()),
        likes: DieselLikeRepository::new(pool.clone()),
        comments: DieselCommentRepository::new(pool),
        database_url,
        _database: temp_db,
    })
}
