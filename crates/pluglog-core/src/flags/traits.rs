//! Core flag source trait

/// Interpret a raw flag value as a boolean
///
/// `1`, `true`, `yes` and `on` (any case, surrounding whitespace ignored)
/// are true. Everything else, including the empty string, is false.
pub fn parse_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Source of named boolean flags
///
/// A flag is either undefined (`None`) or defined with a value. The
/// distinction matters: a defined-but-false per-logger flag disables the
/// logger even when the global debug flag is on.
///
/// # Example
///
/// ```
/// use pluglog_core::flags::{FlagSource, MemoryFlagSource};
///
/// let flags = MemoryFlagSource::new();
/// flags.set("MY_PLUGIN_DEBUG", true);
/// assert_eq!(flags.get("MY_PLUGIN_DEBUG"), Some(true));
/// assert_eq!(flags.get("OTHER_DEBUG"), None);
/// ```
pub trait FlagSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Look up a flag, `None` when it is not defined
    fn get(&self, flag: &str) -> Option<bool>;

    /// Check if a flag is defined at all
    fn is_defined(&self, flag: &str) -> bool {
        self.get(flag).is_some()
    }

    /// Defined and true
    fn is_set(&self, flag: &str) -> bool {
        self.get(flag).unwrap_or(false)
    }
}
