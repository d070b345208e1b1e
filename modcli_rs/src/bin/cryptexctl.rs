use std::process::ExitCode;

use modcli::cli::Dispatcher;
use modcli::cli::entrypoint::{EntryOptions, run};
use modcli::config::EngineConfig;
use modcli::cryptex::{cryptex_catalog, describe_error};

const LOG_ENV: &str = "CRYPTEXCTL_LOG";
const CONFIG_ENV: &str = "CRYPTEXCTL_CONFIG";

fn init_logging() {
    // Stdout carries usage text and request documents; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let catalog = match cryptex_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("[cryptexctl] Invalid command catalog: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = Dispatcher::new().with_mapper(describe_error);
    let config = EngineConfig::from_env(CONFIG_ENV);

    run(&EntryOptions {
        catalog: &catalog,
        dispatcher: &dispatcher,
        config: &config,
    })
    .into()
}
