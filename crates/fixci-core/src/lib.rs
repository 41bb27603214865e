//! fixci core library
//!
//! Shared building blocks for the fixci orchestrator:
//! - Sysexits-style status codes for CI pipelines
//! - Subprocess execution with captured output and timeouts
//! - Composer (dependency manager) adapter and fixture scaffolding
//! - Environment configuration and tracing setup

pub mod composer;
pub mod config;
pub mod error;
pub mod fixture;
pub mod process;
pub mod status;
pub mod telemetry;

pub use composer::ComposerAdapter;
pub use config::AppEnv;
pub use error::{FixciError, Result};
pub use fixture::{ensure_ready, CodebaseCreator, CodebaseSpec};
pub use process::{ToolInvocation, ToolOutput, ToolRunner};
pub use status::StatusCode;
pub use telemetry::init_tracing;

/// fixci version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
