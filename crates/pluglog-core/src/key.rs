//! Logger name normalization

/// Normalize a caller-supplied name into a safe key
///
/// Lowercases ASCII letters and drops every character outside `a-z`, `0-9`,
/// `_` and `-`. The result is safe to use both as a directory name and as
/// the stem of an environment flag identifier.
///
/// # Example
///
/// ```
/// use pluglog_core::key::sanitize_key;
///
/// assert_eq!(sanitize_key("My Plugin!"), "myplugin");
/// assert_eq!(sanitize_key("my-plugin_2"), "my-plugin_2");
/// ```
pub fn sanitize_key(name: &str) -> String {
    name.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

/// Name of the per-logger debug flag for an already normalized key
///
/// `my-plugin` → `MY_PLUGIN_DEBUG`
pub fn flag_name(key: &str) -> String {
    format!("{}_DEBUG", key.to_uppercase().replace('-', "_"))
}
