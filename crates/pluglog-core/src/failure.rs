//! Errors that loggers know how to record
//!
//! Two capability sets are supported:
//! - [`ExceptionLike`]: type name, message, source location and a trace
//! - [`HostErrorLike`]: a code, a human message and an arbitrary payload
//!
//! [`Failure`] is the tagged union of the two concrete carriers.

use std::backtrace::Backtrace;
use std::error::Error;
use std::panic::Location;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Something that looks like a thrown exception
pub trait ExceptionLike {
    fn type_name(&self) -> &str;
    fn message(&self) -> &str;
    fn file(&self) -> &str;
    fn line(&self) -> u32;
    /// Stack trace rendered as a single string
    fn trace(&self) -> &str;
}

/// A host framework error value
pub trait HostErrorLike {
    fn code(&self) -> &str;
    fn message(&self) -> &str;
    fn data(&self) -> Value;
}

/// Captured exception details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    pub type_name: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub trace: String,
}

impl ExceptionInfo {
    pub fn new(
        type_name: impl Into<String>,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
        trace: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            file: file.into(),
            line,
            trace: trace.into(),
        }
    }

    /// Capture an error at the call site
    ///
    /// The message includes the whole `source()` chain joined by `": "`.
    /// The location is the caller's, and the trace is a backtrace captured
    /// according to `RUST_BACKTRACE` (it reads `disabled backtrace` otherwise).
    ///
    /// ```
    /// use pluglog_core::failure::{ExceptionInfo, ExceptionLike};
    ///
    /// let err = "x".parse::<u32>().unwrap_err();
    /// let info = ExceptionInfo::capture(&err);
    /// assert_eq!(info.type_name(), "ParseIntError");
    /// assert!(info.line() > 0);
    /// ```
    #[track_caller]
    pub fn capture<E: Error + 'static>(err: &E) -> Self {
        let location = Location::caller();

        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self {
            type_name: short_type_name::<E>().to_string(),
            message,
            file: location.file().to_string(),
            line: location.line(),
            trace: Backtrace::capture().to_string(),
        }
    }
}

/// `core::num::error::ParseIntError` → `ParseIntError`
///
/// Generic arguments are kept as-is.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base_end = full.find('<').unwrap_or(full.len());
    match full[..base_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

impl ExceptionLike for ExceptionInfo {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn file(&self) -> &str {
        &self.file
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn trace(&self) -> &str {
        &self.trace
    }
}

/// Host framework error: code, message and payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl HostError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: Value::Null,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

impl HostErrorLike for HostError {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn data(&self) -> Value {
        self.data.clone()
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl Error for HostError {}

/// Any failure a logger can record
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Exception(ExceptionInfo),
    Host(HostError),
}

impl From<ExceptionInfo> for Failure {
    fn from(info: ExceptionInfo) -> Self {
        Failure::Exception(info)
    }
}

impl From<HostError> for Failure {
    fn from(err: HostError) -> Self {
        Failure::Host(err)
    }
}
