//! Logging initialization.
//!
//! Library crates only emit `tracing` events; the binary installs the
//! subscriber through [`init`], once.

pub mod capture;

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Logging profile configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output at debug level.
    Development,
    /// JSON structured output at info level.
    Production,
    /// Warnings and defects only.
    Quiet,
}

impl Profile {
    /// The filter used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn default_filter(self) -> &'static str {
        match self {
            Self::Development => "apidelta=debug",
            Self::Production => "apidelta=info",
            Self::Quiet => "apidelta=warn",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Installs the global subscriber for `profile`.
///
/// Only the first call has any effect. `RUST_LOG` overrides the profile's
/// level filter. Events go to stderr so that reports on stdout stay clean.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(profile.filter());
        // Another subscriber may already be installed by an embedding
        // application; keep it.
        let _ = match profile {
            Profile::Production => builder.json().finish().try_init(),
            Profile::Development | Profile::Quiet => builder.finish().try_init(),
        };
    });
}
