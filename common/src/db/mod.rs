pub mod limiter;

use crate::config;
use anyhow::Context;
use sea_orm::{
    ConnectOptions, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, ExecResult,
    QueryResult, RuntimeErr, Statement,
};
use sqlx::error::DatabaseError;
use std::ops::Deref;
use tracing::instrument;

/// A shared handle to the connection pool.
#[derive(Clone, Debug)]
pub struct Database {
    db: DatabaseConnection,
}

impl Database {
    #[instrument(err)]
    pub async fn new(database: &config::Database) -> Result<Self, anyhow::Error> {
        let url = database.to_url();
        log::debug!("connect to {}", database.host);

        let mut opt = ConnectOptions::new(url);
        opt.min_connections(database.min_conn);
        opt.max_connections(database.max_conn);
        opt.sqlx_logging_level(log::LevelFilter::Trace);

        Self::connect(opt).await
    }

    /// Connect to an explicit URL, using the default pool settings.
    pub async fn for_url(url: impl Into<String>) -> Result<Self, anyhow::Error> {
        let mut opt = ConnectOptions::new(url.into());
        opt.sqlx_logging_level(log::LevelFilter::Trace);

        Self::connect(opt).await
    }

    async fn connect(opt: ConnectOptions) -> Result<Self, anyhow::Error> {
        let db = sea_orm::Database::connect(opt)
            .await
            .context("connecting to the database")?;

        log::info!("connected to {:?} database", db.get_database_backend());

        Ok(Self { db })
    }

    /// Check the database is reachable.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}

impl Deref for Database {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

#[async_trait::async_trait]
impl ConnectionTrait for Database {
    fn get_database_backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        self.db.execute(stmt).await
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        self.db.execute_unprepared(sql).await
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        self.db.query_one(stmt).await
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        self.db.query_all(stmt).await
    }

    fn support_returning(&self) -> bool {
        self.db.support_returning()
    }
}

/// Classification of database errors, independent of the backend.
pub trait DatabaseErrors {
    /// The statement was rejected because the database (or transaction) is read-only.
    fn is_read_only(&self) -> bool;
}

const PG_READ_ONLY_SQL_TRANSACTION: &str = "25006";
const SQLITE_READONLY: i32 = 8;

fn database_error(err: &DbErr) -> Option<&(dyn DatabaseError + 'static)> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(err)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(err)))
        | DbErr::Conn(RuntimeErr::SqlxError(sqlx::Error::Database(err))) => Some(err.as_ref()),
        _ => None,
    }
}

impl DatabaseErrors for DbErr {
    fn is_read_only(&self) -> bool {
        let Some(err) = database_error(self) else {
            return false;
        };

        if let Some(err) = err.try_downcast_ref::<sqlx::postgres::PgDatabaseError>() {
            return err.code() == PG_READ_ONLY_SQL_TRANSACTION;
        }

        if let Some(err) = err.try_downcast_ref::<sqlx::sqlite::SqliteError>() {
            // extended result codes carry the primary code in the lower byte
            return err
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .is_some_and(|code| code & 0xff == SQLITE_READONLY);
        }

        false
    }
}
