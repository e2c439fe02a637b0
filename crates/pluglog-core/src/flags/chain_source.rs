//! Chained flag source with fallback behavior

use std::sync::Arc;

use super::traits::FlagSource;

/// Tries each source in order and returns the first defined value
///
/// # Example
///
/// ```
/// use pluglog_core::flags::{ChainFlagSource, EnvFlagSource, FlagSource, MemoryFlagSource};
/// use std::sync::Arc;
///
/// let overrides = Arc::new(MemoryFlagSource::new());
/// overrides.set("WP_DEBUG", true);
///
/// // Overrides first, then the process environment
/// let chain = ChainFlagSource::new(vec![overrides, Arc::new(EnvFlagSource::new())]);
/// assert_eq!(chain.get("WP_DEBUG"), Some(true));
/// ```
pub struct ChainFlagSource {
    sources: Vec<Arc<dyn FlagSource>>,
}

impl ChainFlagSource {
    /// An empty chain defines no flags
    pub fn new(sources: Vec<Arc<dyn FlagSource>>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[Arc<dyn FlagSource>] {
        &self.sources
    }

    /// Find which source defines a flag
    pub fn find_source(&self, flag: &str) -> Option<&Arc<dyn FlagSource>> {
        self.sources.iter().find(|s| s.is_defined(flag))
    }
}

impl FlagSource for ChainFlagSource {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, flag: &str) -> Option<bool> {
        self.sources.iter().find_map(|s| s.get(flag))
    }
}

impl std::fmt::Debug for ChainFlagSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainFlagSource")
            .field("sources", &format!("[{} sources]", self.sources.len()))
            .finish()
    }
}
