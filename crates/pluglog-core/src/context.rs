//! Key/value context attached to log entries

use serde_json::{Map, Value};

/// Context mapping serialized as compact JSON after the message
pub type Context = Map<String, Value>;

/// Conversion into a [`Context`]
///
/// Lets the logging methods accept `()`, a ready-made map, or a
/// `serde_json::json!` object literal.
///
/// ```
/// use pluglog_core::context::IntoContext;
/// use serde_json::json;
///
/// assert!(().into_context().is_empty());
/// assert_eq!(json!({"user_id": 123}).into_context().len(), 1);
/// ```
pub trait IntoContext {
    fn into_context(self) -> Context;
}

impl IntoContext for Context {
    fn into_context(self) -> Context {
        self
    }
}

impl IntoContext for &Context {
    fn into_context(self) -> Context {
        self.clone()
    }
}

impl IntoContext for () {
    fn into_context(self) -> Context {
        Context::new()
    }
}

/// Objects become the map itself, `null` is empty, anything else is
/// stored under `"data"`.
impl IntoContext for Value {
    fn into_context(self) -> Context {
        match self {
            Value::Object(map) => map,
            Value::Null => Context::new(),
            other => {
                let mut map = Context::new();
                map.insert("data".to_string(), other);
                map
            }
        }
    }
}

impl<T: IntoContext> IntoContext for Option<T> {
    fn into_context(self) -> Context {
        self.map(IntoContext::into_context).unwrap_or_default()
    }
}
