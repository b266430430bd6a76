use clap::{Parser, Subcommand};

use categories_core::data::catalog;
use categories_core::server::{APP_DESCRIPTION, APP_TITLE, APP_VERSION};

#[derive(Parser)]
#[command(name = "categories-api", about = APP_DESCRIPTION, version = APP_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(long, env = "CATEGORIES_API_PORT", default_value_t = 8000)]
        port: u16,

        /// Host address to bind to
        #[arg(long, env = "CATEGORIES_API_HOST", default_value = "127.0.0.1")]
        host: String,
    },

    /// Print the category directory as JSON and exit
    List,
}

/// Default filter when `RUST_LOG` is unset. `--verbose` wins over `--quiet`.
fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = log_level(cli.verbose, cli.quiet);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    match cli.command {
        Commands::Serve { port, host } => {
            tracing::debug!("{APP_TITLE}: {APP_DESCRIPTION}");
            categories_core::server::run_server(port, &host).await?;
        }
        Commands::List => {
            let categories = catalog::all();
            tracing::debug!("Listing {} categories", categories.len());
            println!("{}", serde_json::to_string_pretty(categories)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(log_level(false, false), "info");
        assert_eq!(log_level(true, false), "debug");
        assert_eq!(log_level(false, true), "warn");
        assert_eq!(log_level(true, true), "debug");
    }

    #[test]
    fn test_quiet_help_matches_level() {
        let cmd = Cli::command();
        let quiet = cmd
            .get_arguments()
            .find(|a| a.get_id() == "quiet")
            .unwrap();
        let help = quiet.get_help().unwrap().to_string();
        assert!(help.contains("warnings"), "help was {help:?}");
        assert_eq!(log_level(false, true), "warn");
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["categories-api", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                if std::env::var_os("CATEGORIES_API_PORT").is_none() {
                    assert_eq!(port, 8000);
                }
                if std::env::var_os("CATEGORIES_API_HOST").is_none() {
                    assert_eq!(host, "127.0.0.1");
                }
            }
            Commands::List => panic!("expected serve"),
        }
    }
}
