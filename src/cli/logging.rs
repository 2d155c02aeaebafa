//! Tracing setup for the command-line binary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "YAMLEQUAL_LOG";

/// Filter directive for a `-v` count
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "yamlequal=warn",
        1 => "yamlequal=info",
        2 => "yamlequal=debug",
        _ => "yamlequal=trace",
    }
}

/// Install a stderr subscriber; `YAMLEQUAL_LOG` wins over `-v`
pub fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
