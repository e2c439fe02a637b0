//! Closure-backed flag source

use super::traits::FlagSource;

/// Adapts any `Fn(&str) -> Option<bool>` into a [`FlagSource`]
///
/// ```
/// use pluglog_core::flags::{FlagSource, FnFlagSource};
///
/// let source = FnFlagSource::new(|flag| (flag == "WP_DEBUG").then_some(true));
/// assert_eq!(source.get("WP_DEBUG"), Some(true));
/// assert_eq!(source.get("OTHER"), None);
/// ```
pub struct FnFlagSource<F> {
    lookup: F,
}

impl<F> FnFlagSource<F>
where
    F: Fn(&str) -> Option<bool> + Send + Sync,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> FlagSource for FnFlagSource<F>
where
    F: Fn(&str) -> Option<bool> + Send + Sync,
{
    fn name(&self) -> &str {
        "fn"
    }

    fn get(&self, flag: &str) -> Option<bool> {
        (self.lookup)(flag)
    }
}

impl<F> std::fmt::Debug for FnFlagSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFlagSource").finish_non_exhaustive()
    }
}
