use anyhow::Context;
use launchtrace_common::{config::Database, db};
use launchtrace_db::seed::SeedData;
use launchtrace_infrastructure::logging::init_tracing;
use std::{path::PathBuf, process::ExitCode};

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[command(flatten)]
    pub(crate) database: Database,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Create missing tables
    Migrate,
    /// Drop the schema and create it again (DANGER)
    Refresh,
    /// Load suppliers, parts and builds from a JSON document
    Seed {
        /// The seed document
        file: PathBuf,
    },
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        init_tracing("db-run");

        let db = db::Database::new(&self.database).await?;

        use Command::*;
        match self.command {
            Migrate => launchtrace_db::Database(&db).migrate().await?,
            Refresh => launchtrace_db::Database(&db).refresh().await?,
            Seed { file } => {
                let data = tokio::fs::read(&file)
                    .await
                    .with_context(|| format!("reading seed document: {}", file.display()))?;
                let data = SeedData::from_slice(&data)
                    .with_context(|| format!("parsing seed document: {}", file.display()))?;

                let db = launchtrace_db::Database(&db);
                db.migrate().await?;
                db.seed(&data).await?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
