use launchtrace_common::{config::Database, db};
use launchtrace_infrastructure::{HttpServerBuilder, HttpServerConfig, logging::init_tracing};
use std::process::ExitCode;

/// Run the API server
#[derive(clap::Args, Debug)]
pub struct Run {
    // flattened commands must go last
    //
    /// Database configuration
    #[command(flatten)]
    pub database: Database,

    #[command(flatten)]
    pub http: HttpServerConfig,
}

const SERVICE_ID: &str = "launchtrace";

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        init_tracing(SERVICE_ID);

        let db = db::Database::new(&self.database).await?;
        launchtrace_db::Database(&db).migrate().await?;

        HttpServerBuilder::new(self.http)
            .openapi_info(crate::openapi::info())
            .configure(move |svc| crate::configure(svc, db.clone()))
            .run()
            .await?;

        Ok(ExitCode::SUCCESS)
    }
}
