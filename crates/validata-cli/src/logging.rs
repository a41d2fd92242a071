use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::CliError;
use crate::settings::{LogFormat, Settings};

/// Install the global subscriber writing to stderr. `RUST_LOG` takes
/// precedence over the configured level.
pub fn init_logging(settings: &Settings) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|err| CliError::InvalidConfig(format!("log level: {err}")))?;

    let registry = tracing_subscriber::registry().with(filter);

    let initialized = match settings.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    initialized.map_err(|err| CliError::Logging(err.to_string()))
}
