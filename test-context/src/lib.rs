pub mod call;
pub mod ctx;

pub use ctx::*;

use anyhow::Context;
use launchtrace_common::db;
use launchtrace_db::seed::SeedData;
use std::{
    env,
    path::{Path, PathBuf},
};
use tempfile::TempDir;
use tracing::instrument;

const DATABASE_FILE: &str = "launchtrace.db";

/// A database, private to a single test.
pub struct LaunchTraceTestContext {
    pub db: db::Database,
    tmp: TempDir,
}

impl LaunchTraceTestContext {
    /// Create a fresh SQLite database inside `tmp`, with the schema applied.
    #[instrument(err)]
    pub async fn new(tmp: TempDir) -> anyhow::Result<Self> {
        let path = tmp.path().join(DATABASE_FILE);
        let db = db::Database::for_url(sqlite_url(&path, "rwc")).await?;

        launchtrace_db::Database(&db).migrate().await?;

        Ok(Self { db, tmp })
    }

    /// Re-open the database in read-only mode.
    pub async fn read_only(self) -> anyhow::Result<Self> {
        let Self { db, tmp } = self;
        db.close().await?;

        let path = tmp.path().join(DATABASE_FILE);
        let db = db::Database::for_url(sqlite_url(&path, "ro")).await?;

        Ok(Self { db, tmp })
    }

    /// Store the seed data.
    pub async fn seed(&self, data: &SeedData) -> anyhow::Result<()> {
        launchtrace_db::Database(&self.db).seed(data).await
    }

    /// Store a seed document from the test data directory, returning what was stored.
    pub async fn seed_document(&self, path: &str) -> anyhow::Result<SeedData> {
        let data = SeedData::from_slice(&document_bytes(path).await?)
            .with_context(|| format!("parsing seed document: {path}"))?;
        self.seed(&data).await?;
        Ok(data)
    }

    pub fn teardown(self) {
        log::debug!("dropping test database in {}", self.tmp.path().display());
    }
}

impl std::fmt::Debug for LaunchTraceTestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchTraceTestContext")
            .field("tmp", &self.tmp.path())
            .finish()
    }
}

fn sqlite_url(path: &Path, mode: &str) -> String {
    format!("sqlite://{}?mode={mode}", path.display())
}

/// Path to a file in the shared test data directory
pub fn document_path(path: &str) -> PathBuf {
    let base = env::var_os("LAUNCHTRACE_TEST_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("../etc/test-data"));
    base.join(path)
}

/// Read a file from the shared test data directory
pub async fn document_bytes(path: &str) -> anyhow::Result<Vec<u8>> {
    let path = document_path(path);
    tokio::fs::read(&path)
        .await
        .with_context(|| format!("reading test document: {}", path.display()))
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{ConnectionTrait, DbBackend, Statement};
    use test_context::test_context;
    use test_log::test;

    async fn count_suppliers(db: &db::Database) -> anyhow::Result<i64> {
        let row = db
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT COUNT(*) AS num FROM supplier",
            ))
            .await?
            .context("count must return a row")?;
        Ok(row.try_get("", "num")?)
    }

    #[test_context(LaunchTraceContext)]
    #[test(tokio::test)]
    async fn seed_document(ctx: &LaunchTraceContext) -> anyhow::Result<()> {
        let data = ctx.seed_document("seed/minimal.json").await?;
        assert_eq!(data.suppliers.len(), 1);
        assert_eq!(count_suppliers(&ctx.db).await?, 1);

        Ok(())
    }

    #[test_context(LaunchTraceContext)]
    #[test(tokio::test)]
    async fn missing_document(ctx: &LaunchTraceContext) -> anyhow::Result<()> {
        assert!(ctx.seed_document("seed/does-not-exist.json").await.is_err());
        assert_eq!(count_suppliers(&ctx.db).await?, 0);

        Ok(())
    }

    #[test(tokio::test)]
    async fn read_only_keeps_data() -> anyhow::Result<()> {
        let ctx = LaunchTraceTestContext::new(tempfile::tempdir()?).await?;
        ctx.seed_document("seed/minimal.json").await?;

        let ctx = ctx.read_only().await?;
        assert_eq!(count_suppliers(&ctx.db).await?, 1);
        assert!(ctx.seed_document("seed/minimal.json").await.is_err());

        ctx.teardown();

        Ok(())
    }
}
