//! Boolean flag lookup
//!
//! Logger enablement consults named flags (`MY_PLUGIN_DEBUG`, the host's
//! global debug flag). Where those flags come from is pluggable:
//! - `FlagSource` trait for custom sources
//! - Built-in sources: `EnvFlagSource`, `MemoryFlagSource`, `ChainFlagSource`, `FnFlagSource`

mod traits;
mod env_source;
mod memory_source;
mod chain_source;
mod fn_source;

pub use traits::{FlagSource, parse_truthy};
pub use env_source::EnvFlagSource;
pub use memory_source::MemoryFlagSource;
pub use chain_source::ChainFlagSource;
pub use fn_source::FnFlagSource;
