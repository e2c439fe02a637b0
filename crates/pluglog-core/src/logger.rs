//! Per-plugin file logger
//!
//! A [`Logger`] owns one destination file. Entries are appended one line at
//! a time; the file is opened in append mode for each write and closed
//! again, so no handle is held between calls.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::{Context, IntoContext};
use crate::diagnostics::SharedSink;
use crate::entry::format_now;
use crate::error::{LoggerError, LoggerResult};
use crate::failure::{ExceptionLike, Failure, HostErrorLike};
use crate::host::bootstrap::prepare_directory;
use crate::host::HostEnvironment;
use crate::key::{flag_name, sanitize_key};
use crate::level::LogLevel;

/// File name used when no `log_file` option is given
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Construction options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// Force the logger on or off, bypassing flag lookup
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Bare file name (placed in the logger's uploads directory) or a path
    #[serde(default)]
    pub log_file: Option<String>,
}

impl LoggerOptions {
    /// Create options that defer everything to the host
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the logger on or off
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set a bare file name or a path for the log file
    pub fn log_file(mut self, log_file: impl Into<String>) -> Self {
        self.log_file = Some(log_file.into());
        self
    }
}

/// Leveled, timestamped logger bound to one file
///
/// # Example
///
/// ```no_run
/// use pluglog_core::{Logger, LoggerOptions};
/// use serde_json::json;
///
/// let logger = Logger::new("my-plugin", LoggerOptions::new().enabled(true)).unwrap();
/// logger.error("Payment processing failed", json!({"user_id": 123, "amount": 99.99}));
/// logger.info("Sync finished", ());
/// ```
pub struct Logger {
    name: String,
    log_file: PathBuf,
    enabled: bool,
    diagnostics: SharedSink,
}

impl Logger {
    /// Create a logger against the process environment host
    pub fn new(name: &str, options: LoggerOptions) -> LoggerResult<Self> {
        Self::with_host(name, options, &HostEnvironment::from_env())
    }

    /// Create a logger against an explicit host
    ///
    /// Fails only when `name` normalizes to an empty key. Directory
    /// preparation problems are reported to the host's diagnostic sink.
    pub fn with_host(
        name: &str,
        options: LoggerOptions,
        host: &HostEnvironment,
    ) -> LoggerResult<Self> {
        let key = sanitize_key(name);
        if key.is_empty() {
            return Err(LoggerError::InvalidName(name.to_string()));
        }

        let enabled = resolve_enabled(&key, options.enabled, host);
        let log_file = resolve_log_file(&key, options.log_file.as_deref(), host);

        let diagnostics = host.diagnostics().clone();
        if let Some(dir) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            let report = prepare_directory(dir, host);
            for failure in &report.failures {
                diagnostics.warn(&format!(
                    "Could not prepare log directory for {}: {}",
                    key, failure
                ));
            }
        }

        tracing::debug!(
            target: "pluglog",
            logger = %key,
            file = %log_file.display(),
            enabled,
            "logger created"
        );

        Ok(Self {
            name: key,
            log_file,
            enabled,
            diagnostics,
        })
    }

    /// Normalized name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved path of the log file
    pub fn get_file(&self) -> &Path {
        &self.log_file
    }

    /// Whether entries are written at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append one entry; a no-op when the logger is disabled
    pub fn log(&self, level: LogLevel, message: &str, context: impl IntoContext) {
        if !self.enabled {
            return;
        }

        let entry = format_now(level, message, &context.into_context());
        if let Err(e) = self.append(&entry) {
            self.diagnostics
                .error(&format!("Dropped {} entry for {}: {}", level, self.name, e));
        }
    }

    /// Append an ERROR entry
    pub fn error(&self, message: &str, context: impl IntoContext) {
        self.log(LogLevel::Error, message, context);
    }

    /// Append a WARNING entry
    pub fn warning(&self, message: &str, context: impl IntoContext) {
        self.log(LogLevel::Warning, message, context);
    }

    /// Append an INFO entry
    pub fn info(&self, message: &str, context: impl IntoContext) {
        self.log(LogLevel::Info, message, context);
    }

    /// Gated by the same `enabled` flag as every other level
    pub fn debug(&self, message: &str, context: impl IntoContext) {
        self.log(LogLevel::Debug, message, context);
    }

    /// Record an exception at ERROR level
    ///
    /// `file`, `line` and `trace` are added to the context, replacing any
    /// caller keys with the same names.
    pub fn exception(&self, exception: &impl ExceptionLike, context: impl IntoContext) {
        let mut context = context.into_context();
        context.insert("file".to_string(), Value::from(exception.file()));
        context.insert("line".to_string(), Value::from(exception.line()));
        context.insert("trace".to_string(), Value::from(exception.trace()));

        let message = format!("[{}] {}", exception.type_name(), exception.message());
        self.error(&message, context);
    }

    /// Record a host framework error at ERROR level
    ///
    /// `error_code` and `error_data` are added to the context, replacing any
    /// caller keys with the same names.
    pub fn host_error(&self, error: &impl HostErrorLike, context: impl IntoContext) {
        let mut context = context.into_context();
        context.insert("error_code".to_string(), Value::from(error.code()));
        context.insert("error_data".to_string(), error.data());

        self.error(error.message(), context);
    }

    /// Record either kind of failure
    pub fn report(&self, failure: &Failure, context: impl IntoContext) {
        match failure {
            Failure::Exception(info) => self.exception(info, context),
            Failure::Host(err) => self.host_error(err, context),
        }
    }

    /// Delete the log file
    ///
    /// An already missing file counts as success.
    pub fn clear(&self) -> bool {
        match fs::remove_file(&self.log_file) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                self.diagnostics.warn(&format!(
                    "Could not clear {}: {}",
                    self.log_file.display(),
                    e
                ));
                false
            }
        }
    }

    /// Full file contents, or an empty string
    ///
    /// A missing file is not an error. Any other read failure also yields an
    /// empty string and is reported to the diagnostic sink; use
    /// [`Logger::try_get_contents`] to observe it.
    pub fn get_contents(&self) -> String {
        match self.try_get_contents() {
            Ok(contents) => contents,
            Err(e) => {
                self.diagnostics.warn(&format!("Could not read log for {}: {}", self.name, e));
                String::new()
            }
        }
    }

    /// Full file contents; a missing file yields `Ok("")`
    pub fn try_get_contents(&self) -> LoggerResult<String> {
        match fs::read_to_string(&self.log_file) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(LoggerError::io(&self.log_file, e)),
        }
    }

    /// One `write_all` per entry on an O_APPEND handle
    fn append(&self, entry: &str) -> LoggerResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .map_err(|e| LoggerError::io(&self.log_file, e))?;

        file.write_all(entry.as_bytes())
            .map_err(|e| LoggerError::io(&self.log_file, e))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("log_file", &self.log_file)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// explicit option → `{NAME}_DEBUG` → global debug flag → false
fn resolve_enabled(key: &str, explicit: Option<bool>, host: &HostEnvironment) -> bool {
    explicit
        .or_else(|| host.flags().get(&flag_name(key)))
        .unwrap_or_else(|| host.global_debug())
}

/// Blank, `.` and `..` name a directory rather than a file and fall back
/// to the default file name.
fn resolve_log_file(key: &str, log_file: Option<&str>, host: &HostEnvironment) -> PathBuf {
    let log_file = log_file.filter(|f| !matches!(f.trim(), "" | "." | ".."));
    match log_file {
        None => host.logger_dir(key).join(DEFAULT_LOG_FILE),
        Some(file) if !has_separator(file) => host.logger_dir(key).join(file),
        Some(path) => PathBuf::from(path),
    }
}

fn has_separator(path: &str) -> bool {
    path.contains('/') || path.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::diagnostics::{MemorySink, Severity};
    use crate::failure::{ExceptionInfo, HostError};
    use crate::flags::MemoryFlagSource;

    struct Fixture {
        root: tempfile::TempDir,
        flags: Arc<MemoryFlagSource>,
        sink: Arc<MemorySink>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                root: tempfile::tempdir().unwrap(),
                flags: Arc::new(MemoryFlagSource::new()),
                sink: Arc::new(MemorySink::new()),
            }
        }

        fn host(&self) -> HostEnvironment {
            HostEnvironment::new(self.root.path())
                .with_flags(self.flags.clone())
                .with_diagnostics(self.sink.clone())
        }

        fn logger(&self, name: &str, options: LoggerOptions) -> Logger {
            Logger::with_host(name, options, &self.host()).unwrap()
        }

        fn enabled(&self, name: &str) -> Logger {
            self.logger(name, LoggerOptions::new().enabled(true))
        }
    }

    fn parse_line(line: &str) -> (&str, &str) {
        assert!(line.starts_with('['), "bad line: {line}");
        let end = line.find("] ").unwrap();
        (&line[1..end], &line[end + 2..])
    }

    #[test]
    fn test_name_is_normalized() {
        let fx = Fixture::new();
        let logger = fx.enabled("My Plugin!");
        assert_eq!(logger.name(), "myplugin");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let fx = Fixture::new();
        let err = Logger::with_host("!!", LoggerOptions::new(), &fx.host()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidName(_)));
    }

    #[test]
    fn test_default_log_file() {
        let fx = Fixture::new();
        let logger = fx.enabled("my-plugin");
        assert_eq!(logger.get_file(), fx.root.path().join("my-plugin").join("debug.log"));
    }

    #[test]
    fn test_bare_file_name_goes_into_logger_dir() {
        let fx = Fixture::new();
        let logger = fx.logger("my-plugin", LoggerOptions::new().log_file("errors.log"));
        assert_eq!(logger.get_file(), fx.root.path().join("my-plugin").join("errors.log"));
    }

    #[test]
    fn test_blank_or_dot_log_file_falls_back_to_default() {
        let fx = Fixture::new();

        for file in ["", "   ", ".", ".."] {
            let logger = fx.logger("shop", LoggerOptions::new().enabled(true).log_file(file));
            assert_eq!(
                logger.get_file(),
                fx.root.path().join("shop").join("debug.log"),
                "log_file {file:?}"
            );

            logger.info("hello", ());
            assert_eq!(logger.get_contents().lines().count(), 1, "log_file {file:?}");
            assert!(logger.clear());
        }

        assert!(fx.sink.is_empty());
        assert!(!fx.root.path().join(".htaccess").exists());
        assert!(fx.root.path().join("shop").join(".htaccess").exists());
    }

    #[test]
    fn test_path_log_file_is_verbatim() {
        let fx = Fixture::new();
        let custom = fx.root.path().join("elsewhere").join("custom.log");
        let custom_str = custom.to_str().unwrap();

        let a = fx.logger("one", LoggerOptions::new().log_file(custom_str));
        let b = fx.logger("two", LoggerOptions::new().log_file(custom_str));
        assert_eq!(a.get_file(), custom.as_path());
        assert_eq!(b.get_file(), custom.as_path());
        assert!(custom.parent().unwrap().is_dir());
    }

    #[test]
    fn test_construction_bootstraps_directory() {
        let fx = Fixture::new();
        let logger = fx.logger("shop", LoggerOptions::new());
        let dir = logger.get_file().parent().unwrap();

        assert!(dir.is_dir());
        assert!(dir.join(".htaccess").exists());
        assert!(dir.join("index.php").exists());
        assert!(!logger.get_file().exists());
        assert!(fx.sink.is_empty());
    }

    #[test]
    fn test_bootstrap_failure_does_not_fail_construction() {
        let fx = Fixture::new();
        let blocker = fx.root.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let path = blocker.join("logs").join("x.log");

        let logger = fx.logger(
            "blocked",
            LoggerOptions::new().enabled(true).log_file(path.to_str().unwrap()),
        );
        assert_eq!(fx.sink.len(), 1);
        assert_eq!(fx.sink.entries()[0].severity, Severity::Warning);

        // The write fails too, but only the sink hears about it
        logger.info("lost", ());
        assert_eq!(fx.sink.len(), 2);
        assert_eq!(fx.sink.entries()[1].severity, Severity::Error);
    }

    #[test]
    fn test_enabled_explicit_option_wins() {
        let fx = Fixture::new();
        fx.flags.set("SHOP_DEBUG", true);
        fx.flags.set("WP_DEBUG", true);

        assert!(!fx.logger("shop", LoggerOptions::new().enabled(false)).is_enabled());
        assert!(fx.logger("other", LoggerOptions::new().enabled(true)).is_enabled());
    }

    #[test]
    fn test_enabled_from_name_flag() {
        let fx = Fixture::new();
        fx.flags.set("MY_PLUGIN_DEBUG", true);
        assert!(fx.logger("my-plugin", LoggerOptions::new()).is_enabled());
    }

    #[test]
    fn test_defined_false_name_flag_beats_global() {
        let fx = Fixture::new();
        fx.flags.set("MY_PLUGIN_DEBUG", false);
        fx.flags.set("WP_DEBUG", true);
        assert!(!fx.logger("my-plugin", LoggerOptions::new()).is_enabled());
    }

    #[test]
    fn test_enabled_from_global_flag() {
        let fx = Fixture::new();
        fx.flags.set("WP_DEBUG", true);
        assert!(fx.logger("any", LoggerOptions::new()).is_enabled());

        fx.flags.set("WP_DEBUG", false);
        assert!(!fx.logger("any", LoggerOptions::new()).is_enabled());
    }

    #[test]
    fn test_disabled_by_default() {
        let fx = Fixture::new();
        assert!(!fx.logger("quiet", LoggerOptions::new()).is_enabled());
    }

    #[test]
    fn test_disabled_logger_never_writes() {
        let fx = Fixture::new();
        let logger = fx.logger("quiet", LoggerOptions::new().enabled(false));

        logger.log(LogLevel::Info, "x", ());
        logger.error("x", json!({"a": 1}));
        logger.warning("x", ());
        logger.info("x", ());
        logger.debug("x", ());
        logger.exception(&ExceptionInfo::new("E", "m", "f.rs", 1, "t"), ());
        logger.host_error(&HostError::new("c", "m"), ());

        assert!(!logger.get_file().exists());
        assert_eq!(logger.get_contents(), "");
    }

    #[test]
    fn test_disabled_logger_leaves_existing_file_unchanged() {
        let fx = Fixture::new();
        let path = fx.root.path().join("shared").join("app.log");
        let path_str = path.to_str().unwrap();

        let writer = fx.logger("writer", LoggerOptions::new().enabled(true).log_file(path_str));
        writer.info("first", json!({"n": 1}));
        writer.warning("second", ());

        let before = fs::read_to_string(&path).unwrap();
        let len_before = fs::metadata(&path).unwrap().len();
        assert_eq!(before.lines().count(), 2);

        let quiet = fx.logger("quiet", LoggerOptions::new().enabled(false).log_file(path_str));
        quiet.log(LogLevel::Info, "x", ());
        quiet.error("x", json!({"a": 1}));
        quiet.warning("x", ());
        quiet.info("x", ());
        quiet.debug("x", ());
        quiet.exception(&ExceptionInfo::new("E", "m", "f.rs", 1, "t"), ());
        quiet.host_error(&HostError::new("c", "m"), ());

        assert_eq!(fs::metadata(&path).unwrap().len(), len_before);
        assert_eq!(quiet.get_contents(), before);
    }

    #[test]
    fn test_each_call_appends_one_line() {
        let fx = Fixture::new();
        let logger = fx.enabled("counter");

        for i in 0..5 {
            logger.info(&format!("entry {i}"), ());
        }

        let contents = logger.get_contents();
        assert!(contents.ends_with('\n'));
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);

        for (i, line) in lines.iter().enumerate() {
            let (stamp, rest) = parse_line(line);
            assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "bad stamp {stamp}");
            assert_eq!(rest, format!("INFO: entry {i}"));
        }
    }

    #[test]
    fn test_levels_and_context() {
        let fx = Fixture::new();
        let logger = fx.enabled("levels");

        logger.error("Payment processing failed", json!({"user_id": 123, "amount": 99.99}));
        logger.warning("w", ());
        logger.debug("d", ());
        logger.log(LogLevel::Info, "i", Context::new());

        let contents = logger.get_contents();
        let rests: Vec<&str> = contents.lines().map(|l| parse_line(l).1).collect();
        assert_eq!(
            rests,
            vec![
                r#"ERROR: Payment processing failed {"user_id":123,"amount":99.99}"#,
                "WARNING: w",
                "DEBUG: d",
                "INFO: i",
            ]
        );
    }

    #[test]
    fn test_exception_adds_location_and_trace() {
        let fx = Fixture::new();
        let logger = fx.enabled("exc");
        let info = ExceptionInfo::new("PaymentError", "card declined", "src/pay.rs", 42, "#0 main");

        logger.exception(&info, json!({"user_id": 123, "line": "caller value"}));

        let contents = logger.get_contents();
        let rest = parse_line(contents.trim_end()).1;
        let (head, json_part) = rest.split_at(rest.find('{').unwrap());
        assert_eq!(head, "ERROR: [PaymentError] card declined ");

        let ctx: Value = serde_json::from_str(json_part).unwrap();
        assert_eq!(ctx["user_id"], json!(123));
        assert_eq!(ctx["file"], json!("src/pay.rs"));
        assert_eq!(ctx["line"], json!(42));
        assert_eq!(ctx["trace"], json!("#0 main"));
    }

    #[test]
    fn test_exception_from_captured_error() {
        let fx = Fixture::new();
        let logger = fx.enabled("captured");
        let err = "nope".parse::<u16>().unwrap_err();

        logger.exception(&ExceptionInfo::capture(&err), ());

        let contents = logger.get_contents();
        assert!(contents.contains("ERROR: [ParseIntError] invalid digit found in string {"));
        assert!(contents.contains("\"file\":"));
    }

    #[test]
    fn test_host_error_adds_code_and_data() {
        let fx = Fixture::new();
        let logger = fx.enabled("host");
        let err = HostError::new("http_request_failed", "Could not resolve host")
            .with_data(json!({"url": "https://example.com"}));

        logger.host_error(&err, json!({"error_code": "overwritten", "attempt": 2}));

        let contents = logger.get_contents();
        let rest = parse_line(contents.trim_end()).1;
        let (head, json_part) = rest.split_at(rest.find('{').unwrap());
        assert_eq!(head, "ERROR: Could not resolve host ");

        let ctx: Value = serde_json::from_str(json_part).unwrap();
        assert_eq!(ctx["attempt"], json!(2));
        assert_eq!(ctx["error_code"], json!("http_request_failed"));
        assert_eq!(ctx["error_data"], json!({"url": "https://example.com"}));
    }

    #[test]
    fn test_report_dispatches_on_failure_kind() {
        let fx = Fixture::new();
        let logger = fx.enabled("report");

        logger.report(&HostError::new("c1", "host message").into(), ());
        logger.report(&ExceptionInfo::new("Boom", "exc message", "a.rs", 7, "").into(), ());

        let contents = logger.get_contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#"ERROR: host message {"error_code":"c1","error_data":null}"#));
        assert!(lines[1].contains("ERROR: [Boom] exc message {"));
    }

    #[test]
    fn test_clear() {
        let fx = Fixture::new();
        let logger = fx.enabled("clearable");

        // Missing file counts as success
        assert!(logger.clear());

        logger.info("one", ());
        logger.info("two", ());
        assert!(!logger.get_contents().is_empty());

        assert!(logger.clear());
        assert_eq!(logger.get_contents(), "");
        assert!(!logger.get_file().exists());

        logger.info("after", ());
        assert_eq!(logger.get_contents().lines().count(), 1);
    }

    #[test]
    fn test_get_contents_on_directory_reports_error() {
        let fx = Fixture::new();
        let dir = fx.root.path().join("is-a-dir");
        fs::create_dir_all(&dir).unwrap();

        let logger = fx.logger("odd", LoggerOptions::new().log_file(dir.to_str().unwrap()));
        assert!(logger.try_get_contents().is_err());
        assert_eq!(logger.get_contents(), "");
        assert_eq!(fx.sink.len(), 1);
    }

    #[test]
    fn test_options_from_json() {
        let options: LoggerOptions = serde_json::from_str(r#"{"log_file": "x.log"}"#).unwrap();
        assert_eq!(options, LoggerOptions::new().log_file("x.log"));
    }

    #[test]
    fn test_debug_output_hides_sink() {
        let fx = Fixture::new();
        let logger = fx.enabled("dbg");
        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("name: \"dbg\""));
        assert!(rendered.contains("enabled: true"));
    }
}
