//! Configuration split by binding time
//!
//! `constants` holds compile-time resource bounds that cannot be changed
//! at runtime; `runtime` holds user preferences resolved from environment
//! variables or an optional TOML file.

pub mod constants;
pub mod runtime;

pub use runtime::{
    ConfigError, FileProcessorPreferences, LexicalPreferences, LogLevel, LoggingPreferences,
    RuntimeConfig,
};
