//! Logger setup.
//!
//! Everything in the crate logs through the `log` facade; this installs
//! `env_logger` as the backend.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "learn_opengl=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls do nothing.
///
/// An explicit filter wins over `RUST_LOG`; with neither, the level is `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match filter_source(config.env_filter, std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        // try_init so a logger installed by a test harness is not an error
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

fn filter_source(explicit: Option<String>, env: Option<String>) -> Option<String> {
    explicit.or(env).filter(|filter| !filter.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        assert_eq!(
            filter_source(Some("debug".into()), Some("warn".into())),
            Some("debug".to_string())
        );
    }

    #[test]
    fn env_filter_is_the_fallback() {
        assert_eq!(filter_source(None, Some("warn".into())), Some("warn".to_string()));
        assert_eq!(filter_source(None, None), None);
    }

    #[test]
    fn blank_filter_is_ignored() {
        assert_eq!(filter_source(None, Some("  ".into())), None);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            env_filter: Some("trace".into()),
            ..LoggingConfig::default()
        });
    }
}
