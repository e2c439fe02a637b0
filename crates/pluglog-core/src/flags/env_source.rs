//! Environment variable flag source

use std::env;

use super::traits::{FlagSource, parse_truthy};

/// Reads flags from process environment variables
///
/// A variable that is set (even to an empty string) counts as defined;
/// its value goes through [`parse_truthy`].
#[derive(Debug, Default)]
pub struct EnvFlagSource {
    _private: (),
}

impl EnvFlagSource {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl FlagSource for EnvFlagSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, flag: &str) -> Option<bool> {
        env::var(flag).ok().map(|value| parse_truthy(&value))
    }
}
