//! Logging initialization module

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Crates covered by the default filter when `RUST_LOG` is unset
const CRATES: [&str; 3] = ["sudoers_core", "sudoers_store", "sudoers_cli"];

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl FromStr for Profile {
    type Err = String;

    /// `human`/`development`, `json`/`production`, or `test`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" | "development" => Ok(Profile::Development),
            "json" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log format {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn default_filter(level: &str) -> EnvFilter {
    let directives: Vec<String> = CRATES.iter().map(|c| format!("{}={}", c, level)).collect();
    EnvFilter::new(directives.join(","))
}

/// Initialize the logging facility
///
/// Call once at application startup; later calls are ignored.
///
/// # Profiles
///
/// - **Development**: Human-readable logs on stderr with debug level
/// - **Production**: JSON structured logs on stderr with info level
/// - **Test**: Bare registry; use `init_test_capture()` to record events
///
/// `RUST_LOG` replaces the default filter in every profile.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter("debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter("info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
