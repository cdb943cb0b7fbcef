use std::path::{Path, PathBuf};

/// Errors raised while loading a configuration file.
///
/// The library never terminates the process. The binary maps every variant
/// to exit code 1 and prints the `Display` message on a single line.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
	#[error("The configuration file [{}] is not valid YAML.", path.display())]
	InvalidYaml {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	/// JSON syntax errors and non-mapping documents of either format.
	#[error("The configuration file [{}] is not valid JSON.", path.display())]
	InvalidJson { path: PathBuf },

	#[error("The configuration file [{}] has an invalid value for [{key}].", path.display())]
	InvalidValue {
		path: PathBuf,
		key: String,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	#[error("The configuration file [{}] could not be read.", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl ConfigLoadError {
	/// The configuration file the error refers to.
	pub fn path(&self) -> &Path {
		match self {
			ConfigLoadError::InvalidYaml { path, .. }
			| ConfigLoadError::InvalidJson { path }
			| ConfigLoadError::InvalidValue { path, .. }
			| ConfigLoadError::Read { path, .. } => path,
		}
	}

	/// Process exit code for this error. Every load failure is fatal.
	pub fn exit_code(&self) -> u8 {
		1
	}
}

/// Result type alias using ConfigLoadError.
pub type Result<T> = std::result::Result<T, ConfigLoadError>;
