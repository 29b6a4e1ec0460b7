use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod db;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the API server
    Api(launchtrace_server::profile::api::Run),
    /// Manage the database
    Db(db::Run),
}

#[derive(Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "launchtraced",
    long_about = None
)]
pub struct Launchtraced {
    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Launchtraced {
    async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Api(run) => run.run().await,
            Command::Db(run) => run.run().await,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    Launchtraced::parse().run().await
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Launchtraced::command().debug_assert();
    }

    #[test]
    fn parse_api() {
        temp_env::with_vars_unset(["DB_URL", "HTTP_SERVER_BIND_PORT"], || {
            let cli = Launchtraced::try_parse_from([
                "launchtraced",
                "api",
                "--db-url",
                "sqlite://launchtrace.db?mode=rwc",
            ])
            .expect("must parse");

            let Command::Api(run) = cli.command else {
                panic!("unexpected command: {:?}", cli.command);
            };
            assert_eq!(run.database.to_url(), "sqlite://launchtrace.db?mode=rwc");
            assert_eq!(run.http.bind_port, 5029);
        });
    }

    #[test]
    fn parse_seed() {
        let cli = Launchtraced::try_parse_from(["launchtraced", "db", "seed", "acme.json"])
            .expect("must parse");

        let Command::Db(run) = cli.command else {
            panic!("unexpected command: {:?}", cli.command);
        };
        assert!(matches!(run.command, db::Command::Seed { ref file } if file.ends_with("acme.json")));
    }
}
