use crate::error::Error;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseTransaction, DbBackend, IsolationLevel, TransactionTrait,
};

#[async_trait::async_trait]
pub trait DatabaseExt {
    /// Begin a transaction for consistent read operations.
    ///
    /// On PostgreSQL this is a REPEATABLE READ, READ ONLY transaction, which only takes an MVCC
    /// snapshot. SQLite has no per-transaction isolation settings, so a plain transaction is
    /// used there.
    async fn begin_read(&self) -> Result<DatabaseTransaction, Error>;
}

#[async_trait::async_trait]
impl<T> DatabaseExt for T
where
    T: TransactionTrait + ConnectionTrait + Sync,
{
    async fn begin_read(&self) -> Result<DatabaseTransaction, Error> {
        match self.get_database_backend() {
            DbBackend::Postgres => self
                .begin_with_config(
                    Some(IsolationLevel::RepeatableRead),
                    Some(AccessMode::ReadOnly),
                )
                .await
                .map_err(Error::from),
            _ => self.begin().await.map_err(Error::from),
        }
    }
}
