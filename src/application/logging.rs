//! Tracing subscriber setup for the binary

use crate::config::{LogFormat, LoggingSettings};
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count, falling back to the configured level
pub fn filter_directive(settings: &LoggingSettings, verbosity: u8) -> String {
    match verbosity {
        0 => settings.level.clone(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over both the settings and the verbosity flag.
pub fn init(settings: &LoggingSettings, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(settings, verbosity)));

    match settings.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_level() {
        let settings = LoggingSettings {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        };
        assert_eq!(filter_directive(&settings, 0), "warn");
        assert_eq!(filter_directive(&settings, 1), "info");
        assert_eq!(filter_directive(&settings, 3), "debug");
    }
}
