use serde::{Deserialize, Serialize};

/// Document keys that make up the finder options, in the order they are reported.
pub const FINDER_KEYS: [&str; 3] = ["exclude", "notPath", "notName"];

/// A finder value: a single pattern, a list of patterns, or another scalar.
///
/// The value is passed through unchanged, so a scalar stays a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
	One(String),
	Many(Vec<String>),
	Bool(bool),
	Number(serde_json::Number),
}

impl Patterns {
	/// The patterns as text, regardless of how they were written.
	pub fn to_vec(&self) -> Vec<String> {
		match self {
			Patterns::One(pattern) => vec![pattern.clone()],
			Patterns::Many(patterns) => patterns.clone(),
			Patterns::Bool(value) => vec![value.to_string()],
			Patterns::Number(value) => vec![value.to_string()],
		}
	}
}

/// Top-level configuration from a `pint.json` / `pint.yml` style file.
///
/// Every key is optional. Unknown keys are ignored and `null` behaves as absent.
/// Field docs name the document key each field is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
	/// `exclude`: directories excluded from the scan.
	pub exclude: Option<Patterns>,

	/// `notPath`: path patterns excluded from the scan.
	pub not_path: Option<Patterns>,

	/// `notName`: file name patterns excluded from the scan.
	pub not_name: Option<Patterns>,

	/// `rules`: rule identifiers to apply.
	pub rules: Option<Vec<String>>,

	/// `cache-file`: location of the cache file.
	pub cache_file: Option<String>,

	/// `preset`: name of the style preset.
	pub preset: Option<String>,
}

impl Configuration {
	/// The subset of keys that govern file discovery.
	pub fn finder(&self) -> FinderOptions {
		FinderOptions {
			exclude: self.exclude.clone(),
			not_path: self.not_path.clone(),
			not_name: self.not_name.clone(),
		}
	}
}

/// File-discovery filters, restricted to the [`FINDER_KEYS`] allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinderOptions {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exclude: Option<Patterns>,

	#[serde(rename = "notPath", skip_serializing_if = "Option::is_none")]
	pub not_path: Option<Patterns>,

	#[serde(rename = "notName", skip_serializing_if = "Option::is_none")]
	pub not_name: Option<Patterns>,
}

impl FinderOptions {
	/// Look up a finder option by its document key.
	pub fn get(&self, key: &str) -> Option<&Patterns> {
		match key {
			"exclude" => self.exclude.as_ref(),
			"notPath" => self.not_path.as_ref(),
			"notName" => self.not_name.as_ref(),
			_ => None,
		}
	}

	/// Present options as `(key, value)` pairs in allow-list order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Patterns)> {
		FINDER_KEYS
			.into_iter()
			.filter_map(|key| self.get(key).map(|value| (key, value)))
	}

	pub fn len(&self) -> usize {
		self.iter().count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
