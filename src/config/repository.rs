use crate::config::parser::load_config_file;
use crate::config::types::{Configuration, FinderOptions};
use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Preset used when neither the caller nor the file names one.
pub const DEFAULT_PRESET: &str = "laravel";

/// Conventional configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pint.json";

/// Read access to a project's style configuration file.
///
/// The file is parsed again on every accessor call; nothing is cached between
/// calls. A path that does not exist behaves like an empty file.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationRepository {
	path: Option<PathBuf>,
	preset: Option<String>,
}

/// Every accessor's answer, produced from a single parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolvedConfiguration {
	pub preset: String,
	pub rules: Vec<String>,
	pub cache_file: Option<String>,
	pub finder: FinderOptions,
}

impl ConfigurationRepository {
	/// Create a repository for `path`, with an optional preset override.
	///
	/// An empty path or an empty preset counts as not supplied.
	pub fn new(path: Option<impl Into<PathBuf>>, preset: Option<impl Into<String>>) -> Self {
		let path = path
			.map(Into::into)
			.filter(|path: &PathBuf| !path.as_os_str().is_empty());
		let preset = preset
			.map(Into::into)
			.filter(|preset: &String| !preset.is_empty());

		Self { path, preset }
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	pub fn preset_override(&self) -> Option<&str> {
		self.preset.as_deref()
	}

	/// Finder options (`exclude`, `notPath`, `notName`) present in the file.
	pub fn finder(&self) -> Result<FinderOptions> {
		Ok(self.get()?.finder())
	}

	/// Rule identifiers, empty when the file has none.
	pub fn rules(&self) -> Result<Vec<String>> {
		Ok(self.get()?.rules.unwrap_or_default())
	}

	/// Cache file location, if configured.
	pub fn cache_file(&self) -> Result<Option<String>> {
		Ok(self.get()?.cache_file)
	}

	/// Effective preset: the override, then the file, then [`DEFAULT_PRESET`].
	///
	/// The file is not read when an override was supplied.
	pub fn preset(&self) -> Result<String> {
		if let Some(preset) = &self.preset {
			return Ok(preset.clone());
		}

		Ok(self.preset_from(&self.get()?))
	}

	/// Resolve every accessor at once.
	pub fn resolve(&self) -> Result<ResolvedConfiguration> {
		let config = self.get()?;

		Ok(ResolvedConfiguration {
			preset: self.preset_from(&config),
			finder: config.finder(),
			cache_file: config.cache_file,
			rules: config.rules.unwrap_or_default(),
		})
	}

	fn preset_from(&self, config: &Configuration) -> String {
		self.preset
			.clone()
			.or_else(|| config.preset.clone())
			.unwrap_or_else(|| DEFAULT_PRESET.to_string())
	}

	fn get(&self) -> Result<Configuration> {
		match &self.path {
			Some(path) => load_config_file(path),
			None => Ok(Configuration::default()),
		}
	}
}
