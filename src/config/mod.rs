//! Configuration loading and parsing for pint-config.
//!
//! This module handles:
//! - JSON and YAML parsing, chosen by file suffix
//! - The typed record of recognized keys
//! - Accessors with their defaults

pub mod parser;
pub mod repository;
pub mod types;

pub use parser::{ConfigFormat, load_config_file, parse_config_slice, parse_config_str};
pub use repository::{
	ConfigurationRepository, DEFAULT_CONFIG_FILE, DEFAULT_PRESET, ResolvedConfiguration,
};
pub use types::{Configuration, FINDER_KEYS, FinderOptions, Patterns};
