//! Host environment: uploads root, flags, diagnostics and marker files

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{SharedSink, TracingSink};
use crate::flags::{ChainFlagSource, EnvFlagSource, FlagSource, MemoryFlagSource};

use super::config::HostConfig;

/// Global debug flag consulted when no per-logger flag is defined
pub const DEFAULT_GLOBAL_DEBUG_FLAG: &str = "WP_DEBUG";

/// Environment variable overriding the uploads root
pub const UPLOADS_DIR_ENV: &str = "PLUGLOG_UPLOADS_DIR";

/// A small file placed in every log directory when missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerFile {
    pub file_name: String,
    pub contents: String,
}

impl MarkerFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Deny-all access rule for web servers honouring `.htaccess`
    pub fn access_control() -> Self {
        Self::new(".htaccess", "deny from all\n")
    }

    /// Empty script that neutralizes directory listing
    pub fn placeholder() -> Self {
        Self::new("index.php", "<?php\n// Silence is golden.\n")
    }
}

/// Resolve the default uploads root
///
/// Priority:
/// 1. `PLUGLOG_UPLOADS_DIR`
/// 2. `<data dir>/pluglog/uploads`
/// 3. `<temp dir>/pluglog/uploads`
pub fn default_uploads_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(UPLOADS_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("pluglog")
        .join("uploads")
}

/// Everything a `Logger` needs from its host
///
/// # Example
///
/// ```
/// use pluglog_core::flags::MemoryFlagSource;
/// use pluglog_core::host::HostEnvironment;
/// use std::sync::Arc;
///
/// let flags = Arc::new(MemoryFlagSource::new());
/// flags.set("WP_DEBUG", true);
///
/// let host = HostEnvironment::new("/var/www/uploads").with_flags(flags);
/// assert!(host.global_debug());
/// ```
#[derive(Clone)]
pub struct HostEnvironment {
    uploads_dir: PathBuf,
    global_debug_flag: String,
    flags: Arc<dyn FlagSource>,
    diagnostics: SharedSink,
    access_marker: MarkerFile,
    placeholder_marker: MarkerFile,
}

impl HostEnvironment {
    /// Host rooted at `uploads_dir`, reading flags from the process environment
    pub fn new(uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
            global_debug_flag: DEFAULT_GLOBAL_DEBUG_FLAG.to_string(),
            flags: Arc::new(EnvFlagSource::new()),
            diagnostics: Arc::new(TracingSink::new()),
            access_marker: MarkerFile::access_control(),
            placeholder_marker: MarkerFile::placeholder(),
        }
    }

    /// Host built purely from the process environment
    pub fn from_env() -> Self {
        Self::new(default_uploads_dir())
    }

    /// Host built from a config file
    ///
    /// Flags are looked up in the process environment first, then in the
    /// `flags` table of the config.
    pub fn from_config(config: &HostConfig) -> Self {
        let mut host = match &config.uploads_dir {
            Some(dir) => Self::new(dir.clone()),
            None => Self::from_env(),
        };

        if let Some(flag) = &config.global_debug_flag {
            host.global_debug_flag = flag.clone();
        }
        if let Some(marker) = &config.access_marker {
            host.access_marker = marker.clone();
        }
        if let Some(marker) = &config.placeholder_marker {
            host.placeholder_marker = marker.clone();
        }

        if !config.flags.is_empty() {
            let declared = Arc::new(MemoryFlagSource::with_flags(
                config.flags.iter().map(|(k, v)| (k.clone(), *v)),
            ));
            host.flags = Arc::new(ChainFlagSource::new(vec![
                Arc::new(EnvFlagSource::new()),
                declared,
            ]));
        }

        host
    }

    pub fn with_uploads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.uploads_dir = dir.into();
        self
    }

    pub fn with_flags(mut self, flags: Arc<dyn FlagSource>) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_global_debug_flag(mut self, flag: impl Into<String>) -> Self {
        self.global_debug_flag = flag.into();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: SharedSink) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_access_marker(mut self, marker: MarkerFile) -> Self {
        self.access_marker = marker;
        self
    }

    pub fn with_placeholder_marker(mut self, marker: MarkerFile) -> Self {
        self.placeholder_marker = marker;
        self
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn global_debug_flag(&self) -> &str {
        &self.global_debug_flag
    }

    pub fn flags(&self) -> &Arc<dyn FlagSource> {
        &self.flags
    }

    pub fn diagnostics(&self) -> &SharedSink {
        &self.diagnostics
    }

    pub fn access_marker(&self) -> &MarkerFile {
        &self.access_marker
    }

    pub fn placeholder_marker(&self) -> &MarkerFile {
        &self.placeholder_marker
    }

    /// Global debug flag is defined and truthy
    pub fn global_debug(&self) -> bool {
        self.flags.is_set(&self.global_debug_flag)
    }

    /// Directory holding the logs of one (normalized) logger name
    pub fn logger_dir(&self, key: &str) -> PathBuf {
        self.uploads_dir.join(key)
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::from_env()
    }
}

impl std::fmt::Debug for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEnvironment")
            .field("uploads_dir", &self.uploads_dir)
            .field("global_debug_flag", &self.global_debug_flag)
            .field("flags", &self.flags.name())
            .field("access_marker", &self.access_marker.file_name)
            .field("placeholder_marker", &self.placeholder_marker.file_name)
            .finish()
    }
}
