//! One-time preparation of a log directory
//!
//! Creates the directory and drops the access-control and placeholder
//! markers into it. Every step is idempotent and nothing is rolled back
//! when a later step fails.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{LoggerError, LoggerResult};

use super::environment::{HostEnvironment, MarkerFile};

/// Outcome of preparing a directory
#[derive(Debug, Default)]
pub struct BootstrapReport {
    /// Marker files written by this call
    pub created: Vec<String>,
    /// Steps that failed, in order
    pub failures: Vec<LoggerError>,
}

impl BootstrapReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Prepare `dir` for log files
///
/// The directory is created recursively. Each marker is written only when
/// missing; existing markers are never overwritten. If the directory cannot
/// be created the markers are not attempted.
pub fn prepare_directory(dir: &Path, host: &HostEnvironment) -> BootstrapReport {
    let mut report = BootstrapReport::default();

    if let Err(e) = fs::create_dir_all(dir) {
        report.failures.push(LoggerError::io(dir, e));
        return report;
    }

    for marker in [host.access_marker(), host.placeholder_marker()] {
        match write_marker(dir, marker) {
            Ok(true) => report.created.push(marker.file_name.clone()),
            Ok(false) => {}
            Err(e) => report.failures.push(e),
        }
    }

    report
}

/// Write a marker if absent; `Ok(false)` when it already existed
fn write_marker(dir: &Path, marker: &MarkerFile) -> LoggerResult<bool> {
    let path = dir.join(&marker.file_name);

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(LoggerError::io(path, e)),
    };

    file.write_all(marker.contents.as_bytes())
        .map_err(|e| LoggerError::io(&path, e))?;
    Ok(true)
}
