use clap::Parser;
use std::fmt::{Debug, Formatter};

#[derive(clap::Args, Clone, PartialEq, Eq)]
#[command(next_help_heading = "Database")]
pub struct Database {
    /// Full connection URL, takes precedence over the individual settings
    #[arg(id = "db-url", long, env = "DB_URL")]
    pub url: Option<String>,
    #[arg(id = "db-user", long, env = "DB_USER", default_value = "postgres")]
    pub username: String,
    #[arg(id = "db-password", long, env = "DB_PASSWORD", default_value = "launchtrace")]
    pub password: String,
    #[arg(id = "db-host", long, env = "DB_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(id = "db-port", long, env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(id = "db-name", long, env = "DB_NAME", default_value = "launchtrace")]
    pub name: String,
    #[arg(id = "db-max-conn", long, env = "DB_MAX_CONN", default_value_t = 75)]
    pub max_conn: u32,
    #[arg(id = "db-min-conn", long, env = "DB_MIN_CONN", default_value_t = 25)]
    pub min_conn: u32,
}

impl Debug for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("url", &self.url.as_ref().map(|_| "***"))
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("max_conn", &self.max_conn)
            .field("min_conn", &self.min_conn)
            .finish()
    }
}

impl Database {
    /// Load the configuration from the `DB_*` environment variables only.
    pub fn from_env() -> Result<Database, clap::Error> {
        #[derive(Parser)]
        struct Config {
            #[command(flatten)]
            database: Database,
        }

        Ok(Config::try_parse_from(["launchtrace"])?.database)
    }

    /// The connection URL, either the explicit one or assembled from the parts.
    pub fn to_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            ),
        }
    }
}
