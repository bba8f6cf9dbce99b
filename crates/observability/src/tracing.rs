//! Tracing/logging initialization.
//!
//! Logs always go to stderr: stdout is reserved for the program's own output.

use tracing_subscriber::EnvFilter;

/// How the subscriber is built when `RUST_LOG` does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            json: false,
        }
    }
}

impl ObservabilityConfig {
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_quiet_plain_text() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.default_filter, "warn");
        assert!(!config.json);
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = ObservabilityConfig::default();
        init(&config);
        init(&ObservabilityConfig {
            json: true,
            ..config
        });
    }
}
