use crate::config::types::Configuration;
use crate::error::{ConfigLoadError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::LazyLock;

static YAML_SUFFIX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)\.ya?ml$").expect("YAML suffix pattern is valid"));

type FieldError = Box<dyn std::error::Error + Send + Sync>;

/// On-disk format of a configuration file, decided by its suffix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Json,
	Yaml,
}

impl ConfigFormat {
	/// `.yml` / `.yaml` (any case) is YAML, everything else is JSON.
	pub fn from_path(path: &Path) -> Self {
		if YAML_SUFFIX.is_match(&path.to_string_lossy()) {
			ConfigFormat::Yaml
		} else {
			ConfigFormat::Json
		}
	}
}

/// A parsed document that is known to be a mapping.
enum Document {
	Json(serde_json::Map<String, serde_json::Value>),
	Yaml(serde_yaml::Mapping),
}

impl Document {
	/// Deserialize a single key. Absent keys and `null` both yield `None`.
	fn field<T: DeserializeOwned>(
		&self,
		key: &str,
	) -> std::result::Result<Option<T>, FieldError> {
		match self {
			Document::Json(map) => match map.get(key) {
				Some(value) => Ok(serde_json::from_value(value.clone())?),
				None => Ok(None),
			},
			Document::Yaml(mapping) => match mapping.get(key) {
				Some(value) => Ok(serde_yaml::from_value(value.clone())?),
				None => Ok(None),
			},
		}
	}
}

/// Load a configuration file from the given path.
///
/// A missing file is not an error: it yields the empty configuration.
pub fn load_config_file(path: &Path) -> Result<Configuration> {
	if path.as_os_str().is_empty() || !path.exists() {
		return Ok(Configuration::default());
	}

	let content = std::fs::read(path).map_err(|source| ConfigLoadError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_slice(&content, path)
}

/// Parse a config from a string (useful for testing).
///
/// `path` decides the format and is used in error messages.
pub fn parse_config_str(content: &str, path: &Path) -> Result<Configuration> {
	parse_config_slice(content.as_bytes(), path)
}

/// Parse a config from raw file bytes.
///
/// Bytes that are not valid UTF-8 are a parse failure of the detected format.
pub fn parse_config_slice(content: &[u8], path: &Path) -> Result<Configuration> {
	let document = match ConfigFormat::from_path(path) {
		ConfigFormat::Yaml => parse_yaml(content, path)?,
		ConfigFormat::Json => parse_json(content, path)?,
	};

	Ok(Configuration {
		exclude: read_field(&document, "exclude", path)?,
		not_path: read_field(&document, "notPath", path)?,
		not_name: read_field(&document, "notName", path)?,
		rules: read_field(&document, "rules", path)?,
		cache_file: read_field(&document, "cache-file", path)?,
		preset: read_field(&document, "preset", path)?,
	})
}

fn read_field<T: DeserializeOwned>(
	document: &Document,
	key: &str,
	path: &Path,
) -> Result<Option<T>> {
	document
		.field(key)
		.map_err(|source| ConfigLoadError::InvalidValue {
			path: path.to_path_buf(),
			key: key.to_string(),
			source,
		})
}

fn parse_yaml(content: &[u8], path: &Path) -> Result<Document> {
	// An empty YAML stream is a null document.
	if content.trim_ascii().is_empty() {
		return Err(ConfigLoadError::InvalidJson {
			path: path.to_path_buf(),
		});
	}

	let value: serde_yaml::Value =
		serde_yaml::from_slice(content).map_err(|source| ConfigLoadError::InvalidYaml {
			path: path.to_path_buf(),
			source,
		})?;

	match value {
		serde_yaml::Value::Mapping(mapping) => Ok(Document::Yaml(mapping)),
		// Non-mapping YAML reports the JSON message, matching the established wording.
		_ => Err(ConfigLoadError::InvalidJson {
			path: path.to_path_buf(),
		}),
	}
}

fn parse_json(content: &[u8], path: &Path) -> Result<Document> {
	// Syntax errors, encoding errors and wrong shapes share one message.
	match serde_json::from_slice(content) {
		Ok(serde_json::Value::Object(map)) => Ok(Document::Json(map)),
		_ => Err(ConfigLoadError::InvalidJson {
			path: path.to_path_buf(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::Patterns;
	use std::path::PathBuf;

	#[test]
	fn test_format_from_path() {
		assert_eq!(ConfigFormat::from_path(Path::new("pint.json")), ConfigFormat::Json);
		assert_eq!(ConfigFormat::from_path(Path::new("pint.yml")), ConfigFormat::Yaml);
		assert_eq!(ConfigFormat::from_path(Path::new("pint.yaml")), ConfigFormat::Yaml);
		assert_eq!(ConfigFormat::from_path(Path::new("PINT.YML")), ConfigFormat::Yaml);
		assert_eq!(ConfigFormat::from_path(Path::new("pint")), ConfigFormat::Json);
		assert_eq!(ConfigFormat::from_path(Path::new("pint.yml.bak")), ConfigFormat::Json);
		assert_eq!(ConfigFormat::from_path(Path::new("yml")), ConfigFormat::Json);
	}

	#[test]
	fn test_parse_empty_object() {
		let path = PathBuf::from("pint.json");
		let config = parse_config_str("{}", &path).unwrap();
		assert_eq!(config, Configuration::default());
	}

	#[test]
	fn test_parse_json_config() {
		let content = r#"{
    "preset": "psr12",
    "rules": ["a", "b"],
    "cache-file": ".pint.cache",
    "exclude": ["vendor"],
    "notName": "*.blade.php",
    "unrelated": 1
}"#;
		let path = PathBuf::from("pint.json");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.preset, Some("psr12".to_string()));
		assert_eq!(config.rules, Some(vec!["a".to_string(), "b".to_string()]));
		assert_eq!(config.cache_file, Some(".pint.cache".to_string()));
		assert_eq!(config.exclude, Some(Patterns::Many(vec!["vendor".to_string()])));
		assert_eq!(config.not_name, Some(Patterns::One("*.blade.php".to_string())));
		assert!(config.not_path.is_none());
	}

	#[test]
	fn test_parse_yaml_config() {
		let content = r#"
preset: psr12
rules:
  - a
  - b
notPath:
  - foo
cache-file: .pint.cache
"#;
		let path = PathBuf::from("pint.yaml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.preset, Some("psr12".to_string()));
		assert_eq!(config.rules, Some(vec!["a".to_string(), "b".to_string()]));
		assert_eq!(config.not_path, Some(Patterns::Many(vec!["foo".to_string()])));
		assert_eq!(config.cache_file, Some(".pint.cache".to_string()));
	}

	#[test]
	fn test_null_values_are_absent() {
		let path = PathBuf::from("pint.json");
		let config = parse_config_str(r#"{"preset": null, "rules": null}"#, &path).unwrap();
		assert!(config.preset.is_none());
		assert!(config.rules.is_none());
	}

	#[test]
	fn test_json_null_is_invalid_json() {
		let path = PathBuf::from("config.json");
		let err = parse_config_str("null", &path).unwrap_err();
		assert!(matches!(err, ConfigLoadError::InvalidJson { .. }));
		assert_eq!(
			err.to_string(),
			"The configuration file [config.json] is not valid JSON."
		);
	}

	#[test]
	fn test_json_syntax_error_is_invalid_json() {
		let path = PathBuf::from("config.json");
		let err = parse_config_str(r#"{"rules": ["a",}"#, &path).unwrap_err();
		assert!(matches!(err, ConfigLoadError::InvalidJson { .. }));
	}

	#[test]
	fn test_json_scalar_and_array_are_invalid_json() {
		let path = PathBuf::from("config.json");
		for content in [r#""hello""#, "42", r#"["a", "b"]"#, ""] {
			let err = parse_config_str(content, &path).unwrap_err();
			assert!(
				matches!(err, ConfigLoadError::InvalidJson { .. }),
				"expected InvalidJson for {content:?}"
			);
		}
	}

	#[test]
	fn test_broken_yaml_is_invalid_yaml() {
		let path = PathBuf::from("config.yml");
		let err = parse_config_str("rules: [a, b\n", &path).unwrap_err();
		assert!(matches!(err, ConfigLoadError::InvalidYaml { .. }));
		assert_eq!(
			err.to_string(),
			"The configuration file [config.yml] is not valid YAML."
		);
	}

	#[test]
	fn test_non_mapping_yaml_reports_json_message() {
		let path = PathBuf::from("config.yml");
		for content in ["hello", "- a\n- b\n", "", "   \n"] {
			let err = parse_config_str(content, &path).unwrap_err();
			assert_eq!(
				err.to_string(),
				"The configuration file [config.yml] is not valid JSON.",
				"unexpected error for {content:?}"
			);
		}
	}

	#[test]
	fn test_wrong_value_type_names_the_key() {
		let path = PathBuf::from("pint.json");
		let err = parse_config_str(r#"{"rules": 5}"#, &path).unwrap_err();
		match err {
			ConfigLoadError::InvalidValue { key, .. } => assert_eq!(key, "rules"),
			other => panic!("Expected InvalidValue error, got {other:?}"),
		}
	}

	#[test]
	fn test_load_missing_file_is_empty() {
		let temp_dir = tempfile::tempdir().unwrap();
		let config = load_config_file(&temp_dir.path().join("pint.json")).unwrap();
		assert_eq!(config, Configuration::default());

		let config = load_config_file(Path::new("")).unwrap();
		assert_eq!(config, Configuration::default());
	}

	#[test]
	fn test_non_utf8_json_is_invalid_json() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("config.json");
		std::fs::write(&path, b"{\"preset\": \"\xff\xfe\"}").unwrap();

		let err = load_config_file(&path).unwrap_err();
		assert!(matches!(err, ConfigLoadError::InvalidJson { .. }));
		assert!(err.to_string().ends_with("is not valid JSON."));
	}

	#[test]
	fn test_non_utf8_yaml_is_invalid_yaml() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("config.yml");
		std::fs::write(&path, b"preset: \xff\n").unwrap();

		let err = load_config_file(&path).unwrap_err();
		assert!(matches!(err, ConfigLoadError::InvalidYaml { .. }));
		assert!(err.to_string().ends_with("is not valid YAML."));
	}

	#[test]
	fn test_finder_scalars_pass_through() {
		let path = PathBuf::from("pint.json");
		let config = parse_config_str(r#"{"exclude": 5, "notName": true}"#, &path).unwrap();
		assert_eq!(config.exclude, Some(Patterns::Number(5.into())));
		assert_eq!(config.not_name, Some(Patterns::Bool(true)));

		let path = PathBuf::from("pint.yml");
		let config = parse_config_str("notPath: 7\n", &path).unwrap();
		assert_eq!(config.not_path, Some(Patterns::Number(7.into())));
	}

	#[test]
	fn test_load_directory_is_read_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let err = load_config_file(temp_dir.path()).unwrap_err();
		assert!(matches!(err, ConfigLoadError::Read { .. }));
	}

	#[test]
	fn test_load_file_from_disk() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("pint.yml");
		std::fs::write(&path, "preset: per\n").unwrap();

		let config = load_config_file(&path).unwrap();
		assert_eq!(config.preset, Some("per".to_string()));
	}
}
