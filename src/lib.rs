//! pint-config - loader for JSON and YAML code style configuration files.
//!
//! This library reads a project's style configuration and exposes:
//! - File-discovery filters (`exclude`, `notPath`, `notName`)
//! - Rule selections
//! - The cache file location
//! - The style preset name, with caller override and a default
//!
//! # Example
//!
//! ```no_run
//! use pint_config::config::ConfigurationRepository;
//!
//! let repo = ConfigurationRepository::new(Some("pint.json"), None::<String>);
//!
//! println!("preset: {}", repo.preset()?);
//! for (key, patterns) in repo.finder()?.iter() {
//!     println!("{key}: {:?}", patterns.to_vec());
//! }
//! # Ok::<(), pint_config::ConfigLoadError>(())
//! ```

pub mod config;
pub mod error;

pub use config::ConfigurationRepository;
pub use error::{ConfigLoadError, Result};
