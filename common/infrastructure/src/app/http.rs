use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
};
use std::sync::Arc;
use utoipa::openapi::Info;
use utoipa_actix_web::{AppExt, service_config::ServiceConfig};
use utoipa_rapidoc::RapiDoc;

/// Path of the OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Path of the OpenAPI browser UI
pub const OPENAPI_UI_PATH: &str = "/openapi";

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
#[command(next_help_heading = "HTTP server")]
pub struct HttpServerConfig {
    /// The address to listen on
    #[arg(
        id = "http-server-bind-addr",
        long,
        env = "HTTP_SERVER_BIND_ADDR",
        default_value = "127.0.0.1"
    )]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(
        id = "http-server-bind-port",
        long,
        env = "HTTP_SERVER_BIND_PORT",
        default_value_t = 5029
    )]
    pub bind_port: u16,

    /// Number of worker threads, defaults to one per CPU
    #[arg(
        id = "http-server-workers",
        long,
        env = "HTTP_SERVER_WORKERS",
        default_value_t = 0
    )]
    pub workers: usize,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".into(),
            bind_port: 5029,
            workers: 0,
        }
    }
}

type Configurator = dyn Fn(&mut ServiceConfig) + Send + Sync;

pub struct HttpServerBuilder {
    config: HttpServerConfig,
    info: Info,
    configurator: Option<Arc<Configurator>>,
}

impl HttpServerBuilder {
    pub fn new(config: HttpServerConfig) -> Self {
        Self {
            config,
            info: Info::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            configurator: None,
        }
    }

    /// Set the information block of the OpenAPI document.
    pub fn openapi_info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    /// Set the function mounting the services of the application.
    pub fn configure<F>(mut self, configurator: F) -> Self
    where
        F: Fn(&mut ServiceConfig) + Send + Sync + 'static,
    {
        self.configurator = Some(Arc::new(configurator));
        self
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let Self {
            config,
            info,
            configurator,
        } = self;

        let mut http = HttpServer::new(move || {
            let configurator = configurator.clone();
            new_app(info.clone(), move |svc| {
                if let Some(configurator) = &configurator {
                    configurator(svc);
                }
            })
        });

        if config.workers > 0 {
            http = http.workers(config.workers);
        }

        log::info!(
            "listening on http://{}:{}",
            config.bind_addr,
            config.bind_port
        );

        http.bind((config.bind_addr.as_str(), config.bind_port))?
            .run()
            .await?;

        Ok(())
    }
}

/// Create the application, with logging, CORS and the OpenAPI document and UI.
///
/// All origins are allowed, as the UI is served from a different origin than the API.
pub fn new_app<F>(
    info: Info,
    configurator: F,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    F: FnOnce(&mut ServiceConfig),
{
    let (app, mut openapi) = App::new()
        .into_utoipa_app()
        .configure(configurator)
        .split_for_parts();

    openapi.info = info;

    app.service(RapiDoc::with_openapi(OPENAPI_PATH, openapi).path(OPENAPI_UI_PATH))
        .wrap(Cors::permissive())
        .wrap(Logger::default())
}
