//! pluglog Core
//!
//! Per-plugin file loggers for hosted plugin ecosystems.
//! Each [`Logger`] writes leveled, timestamped, context-annotated lines to its
//! own file under the host's uploads directory, and a [`LoggerRegistry`] lets
//! every part of a plugin share one logger per name.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pluglog_core::{register_logger, get_logger, LoggerOptions};
//! use serde_json::json;
//!
//! let logger = register_logger("my-plugin", LoggerOptions::new().log_file("errors.log"))?;
//! logger.error("Payment processing failed", json!({"user_id": 123, "amount": 99.99}));
//!
//! // Elsewhere in the plugin
//! if let Some(logger) = get_logger("my-plugin") {
//!     logger.info("Checkout finished", ());
//! }
//! # Ok::<(), pluglog_core::LoggerError>(())
//! ```
//!
//! Entries look like:
//!
//! ```text
//! [2025-01-15T10:30:45+00:00] ERROR: Payment processing failed {"user_id":123,"amount":99.99}
//! ```
//!
//! ## Enablement
//!
//! A logger is enabled by, in order: the `enabled` option, the
//! `{NAME}_DEBUG` flag, the host's global debug flag (`WP_DEBUG` by default).
//! Disabled loggers never touch their file.

pub mod key;
pub mod level;
pub mod context;
pub mod entry;
pub mod error;
pub mod failure;
pub mod flags;
pub mod diagnostics;
pub mod host;
pub mod logger;
pub mod registry;

// Re-export commonly used types
pub use level::LogLevel;
pub use context::{Context, IntoContext};
pub use error::{LoggerError, LoggerResult};

pub use failure::{
    ExceptionLike, HostErrorLike,
    ExceptionInfo, HostError, Failure,
};

pub use flags::{
    FlagSource, EnvFlagSource, MemoryFlagSource, ChainFlagSource, FnFlagSource,
};

pub use diagnostics::{DiagnosticSink, SharedSink, NoOpSink, TracingSink, MemorySink};

pub use host::{HostEnvironment, HostConfig, MarkerFile, ConfigError, ConfigResult};

pub use logger::{Logger, LoggerOptions};

pub use registry::{
    LoggerRegistry,
    registry, init_registry, reset_registry, is_registry_initialized,
    register_logger, get_logger,
};
