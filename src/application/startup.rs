use chrono::Utc;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
    application::config::{Args, RuntimeConfig},
    domain::error::DomainError,
    interfaces::cli,
};

pub fn run(args: Args) -> Result<(), DomainError> {
    let config = RuntimeConfig::from_args(&args)
        .map_err(|error| DomainError::InvalidRequest(format!("configuration error: {error}")))?;

    init_logging(&config.log_filter, config.json_logs)?;
    cli::execute(&args.command, &config, Utc::now())
}

fn init_logging(filter: &str, json_logs: bool) -> Result<(), DomainError> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json_logs {
        builder.json().try_init().map_err(|error| {
            DomainError::Unavailable(format!("failed to initialize logger: {error}"))
        })?;
    } else {
        builder.compact().try_init().map_err(|error| {
            DomainError::Unavailable(format!("failed to initialize logger: {error}"))
        })?;
    }

    Ok(())
}
