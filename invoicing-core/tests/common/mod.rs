//! Shared test harness for invoicing-core integration tests.

use std::sync::Once;

use billing_core::config::Config;
use billing_core::observability::init_tracing;
use invoicing_core::services::{Database, SequenceAllocator};
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Test application owning a scratch SQLite database.
pub struct TestApp {
    _dir: TempDir,
    pub db: Database,
}

impl TestApp {
    /// Spawn a fresh, fully migrated database in a temp directory.
    pub async fn spawn() -> Self {
        TRACING.call_once(|| init_tracing("invoicing-core-tests", "info"));

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_path = dir
            .path()
            .join("invoicing.db")
            .to_string_lossy()
            .into_owned();

        let config = Config {
            database_path,
            max_connections: 8,
            min_connections: 1,
            acquire_timeout_secs: 30,
            log_level: "info".to_string(),
        };

        let db = Database::new(&config).await.expect("Failed to open database");
        db.health_check().await.expect("Database is not healthy");
        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        TestApp { _dir: dir, db }
    }

    pub fn allocator(&self) -> SequenceAllocator {
        SequenceAllocator::new(self.db.pool().clone())
    }

    pub async fn cleanup(self) {
        self.db.close().await;
    }
}
