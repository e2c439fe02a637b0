//! Host conventions the loggers depend on
//!
//! The host supplies the uploads root under which default log paths are
//! computed, the flag source used for enablement, the diagnostic sink, and
//! the marker files dropped into every log directory.

mod environment;
mod config;
pub mod bootstrap;

pub use environment::{
    HostEnvironment, MarkerFile, default_uploads_dir,
    DEFAULT_GLOBAL_DEBUG_FLAG, UPLOADS_DIR_ENV,
};
pub use config::{HostConfig, ConfigError, ConfigResult};
