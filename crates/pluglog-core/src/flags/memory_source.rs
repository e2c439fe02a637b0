//! In-memory flag source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::FlagSource;

/// Flags held in memory
///
/// Used for tests and for flags declared in a host config file.
#[derive(Debug, Default)]
pub struct MemoryFlagSource {
    flags: RwLock<HashMap<String, bool>>,
}

impl MemoryFlagSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-populated with flags
    pub fn with_flags<I, K>(flags: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        Self {
            flags: RwLock::new(flags.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn set(&self, flag: impl Into<String>, value: bool) {
        self.flags.write().insert(flag.into(), value);
    }

    /// Make a flag undefined again
    pub fn unset(&self, flag: &str) -> bool {
        self.flags.write().remove(flag).is_some()
    }

    pub fn len(&self) -> usize {
        self.flags.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.read().is_empty()
    }
}

impl FlagSource for MemoryFlagSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, flag: &str) -> Option<bool> {
        self.flags.read().get(flag).copied()
    }
}
