//! Name-keyed registry of shared loggers
//!
//! A [`LoggerRegistry`] hands out one `Arc<Logger>` per normalized name.
//! It can be owned and passed around explicitly, or reached through the
//! process-wide accessor functions at the bottom of this module.
//!
//! # Thread safety
//!
//! Lookups share a read lock. `register`, `remove` and `clear` take the write
//! lock, and construction of a new logger happens while it is held, so two
//! threads registering the same name always end up with the same instance.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{LoggerError, LoggerResult};
use crate::host::{HostConfig, HostEnvironment};
use crate::key::sanitize_key;
use crate::logger::{Logger, LoggerOptions};

/// Registry of loggers keyed by normalized name
pub struct LoggerRegistry {
    host: Arc<HostEnvironment>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Create an empty registry whose loggers are bound to `host`
    pub fn new(host: HostEnvironment) -> Self {
        Self {
            host: Arc::new(host),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Host shared by every logger in this registry
    pub fn host(&self) -> &HostEnvironment {
        &self.host
    }

    /// Return the logger for `name`, creating it on first use
    ///
    /// The first registration wins: `options` are ignored when a logger
    /// already exists under the normalized name.
    pub fn register(&self, name: &str, options: LoggerOptions) -> LoggerResult<Arc<Logger>> {
        let key = sanitize_key(name);
        if let Some(existing) = self.loggers.read().get(&key) {
            return Ok(existing.clone());
        }

        let mut loggers = self.loggers.write();
        if let Some(existing) = loggers.get(&key) {
            return Ok(existing.clone());
        }

        let logger = Arc::new(Logger::with_host(name, options, &self.host)?);
        loggers.insert(key.clone(), logger.clone());
        tracing::debug!(target: "pluglog", logger = %key, "logger registered");
        Ok(logger)
    }

    /// Register every logger declared in a host config
    ///
    /// Returns the normalized names that were registered or already present.
    /// All names are checked first, so an invalid name registers nothing.
    pub fn register_configured(&self, config: &HostConfig) -> LoggerResult<Vec<String>> {
        if let Some(bad) = config.loggers.keys().find(|name| sanitize_key(name).is_empty()) {
            return Err(LoggerError::InvalidName(bad.clone()));
        }

        let mut names = Vec::with_capacity(config.loggers.len());
        for (name, options) in &config.loggers {
            let logger = self.register(name, options.clone())?;
            names.push(logger.name().to_string());
        }
        Ok(names)
    }

    /// Look up a logger without creating it
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(&sanitize_key(name)).cloned()
    }

    /// Check if a logger is registered under `name`
    pub fn has(&self, name: &str) -> bool {
        self.loggers.read().contains_key(&sanitize_key(name))
    }

    /// Forget a logger; its log file is left untouched
    pub fn remove(&self, name: &str) -> bool {
        let key = sanitize_key(name);
        let removed = self.loggers.write().remove(&key).is_some();
        if removed {
            tracing::debug!(target: "pluglog", logger = %key, "logger removed");
        }
        removed
    }

    /// Snapshot of all registered loggers
    pub fn get_all(&self) -> HashMap<String, Arc<Logger>> {
        self.loggers.read().clone()
    }

    /// List all registered (normalized) names
    pub fn get_names(&self) -> Vec<String> {
        self.loggers.read().keys().cloned().collect()
    }

    /// Number of registered loggers
    pub fn count(&self) -> usize {
        self.loggers.read().len()
    }

    /// Check if no loggers are registered
    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Forget every logger; files on disk are left untouched
    pub fn clear(&self) {
        self.loggers.write().clear();
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(HostEnvironment::from_env())
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("host", &self.host)
            .field("loggers", &self.get_names())
            .finish()
    }
}

// Global registry cell; `None` until first access or after a reset
static GLOBAL_REGISTRY: Lazy<RwLock<Option<Arc<LoggerRegistry>>>> =
    Lazy::new(|| RwLock::new(None));

/// The process-wide registry, created from the process environment on first use
pub fn registry() -> Arc<LoggerRegistry> {
    if let Some(existing) = GLOBAL_REGISTRY.read().as_ref() {
        return existing.clone();
    }

    GLOBAL_REGISTRY
        .write()
        .get_or_insert_with(|| Arc::new(LoggerRegistry::default()))
        .clone()
}

/// Install a fresh process-wide registry bound to `host`
///
/// Replaces any existing registry. Handles obtained earlier keep working
/// but are no longer reachable through [`registry`].
pub fn init_registry(host: HostEnvironment) -> Arc<LoggerRegistry> {
    let registry = Arc::new(LoggerRegistry::new(host));
    *GLOBAL_REGISTRY.write() = Some(registry.clone());
    registry
}

/// Drop the process-wide registry (mainly for testing)
///
/// The next call to [`registry`] creates a new, empty one.
pub fn reset_registry() {
    if GLOBAL_REGISTRY.write().take().is_some() {
        tracing::debug!(target: "pluglog", "global registry reset");
    }
}

/// Whether the process-wide registry currently exists
pub fn is_registry_initialized() -> bool {
    GLOBAL_REGISTRY.read().is_some()
}

/// Register a logger in the process-wide registry
pub fn register_logger(name: &str, options: LoggerOptions) -> LoggerResult<Arc<Logger>> {
    registry().register(name, options)
}

/// Look up a logger in the process-wide registry
pub fn get_logger(name: &str) -> Option<Arc<Logger>> {
    registry().get(name)
}
