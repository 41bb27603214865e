//! Application environment configuration.

use serde::{Deserialize, Serialize};

/// Runtime environment for a fixci invocation.
///
/// Resolved from the `--env`/`--no-debug` CLI flags with `FIXCI_ENV` and
/// `FIXCI_NO_DEBUG` process-environment fallbacks (wired through clap's
/// `env` attribute in the CLI crate).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppEnv {
    /// Environment name, e.g. "prod", "dev", "test".
    pub name: String,

    /// Whether verbose debug output is enabled.
    pub debug: bool,
}

impl AppEnv {
    pub fn new(name: impl Into<String>, debug: bool) -> Self {
        Self {
            name: name.into(),
            debug,
        }
    }

    /// The default tracing level for this environment.
    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

impl Default for AppEnv {
    fn default() -> Self {
        Self::new("prod", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_selects_debug_level() {
        assert_eq!(AppEnv::new("dev", true).log_level(), tracing::Level::DEBUG);
        assert_eq!(AppEnv::new("prod", false).log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_default_env() {
        let env = AppEnv::default();
        assert_eq!(env.name, "prod");
        assert!(env.debug);
    }
}
