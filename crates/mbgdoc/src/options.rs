//! Comment generator options and the flags derived from them.
//!
//! Options are a flat, string-keyed map handed over by the surrounding
//! generator. Two keys are understood here, [`SUPPRESS_DATE`] and
//! [`SUPPRESS_ALL_COMMENTS`]; everything else is retained untouched.
//!
//! For standalone use the map can also be loaded from a TOML file whose
//! `[comment_generator]` table holds the options, overlaid with `MBGDOC_*`
//! environment variables:
//!
//! ```toml
//! [comment_generator]
//! suppressDate = true
//! suppressAllComments = "false"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::value::Value;
use figment::Figment;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Option key that disables the date in every comment.
pub const SUPPRESS_DATE: &str = "suppressDate";

/// Option key that disables comment emission altogether.
pub const SUPPRESS_ALL_COMMENTS: &str = "suppressAllComments";

/// TOML table holding the options.
pub const OPTIONS_TABLE: &str = "comment_generator";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "MBGDOC_";

const RECOGNIZED_KEYS: [&str; 2] = [SUPPRESS_DATE, SUPPRESS_ALL_COMMENTS];

/// Returns `true` only for the literal `"true"`.
///
/// Absent values, `"TRUE"`, `"1"` and `"yes"` are all false.
pub fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Retained option map, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentOptions {
    entries: IndexMap<String, String>,
}

impl CommentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Amends this map with `other`. Keys present in both take `other`'s value.
    pub fn merge(&mut self, other: &CommentOptions) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads options from a TOML file, overlaid with `MBGDOC_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if `path` does not exist, and
    /// [`ConfigError::Load`] or [`ConfigError::InvalidValue`] if the file
    /// cannot be read or an option is not a scalar.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        tracing::debug!("Loading comment generator options from: {}", path.display());
        Self::from_figment(Figment::new().merge(Toml::file(path)))
    }

    /// Parses options from TOML text, overlaid with `MBGDOC_*` variables.
    ///
    /// # Errors
    ///
    /// Same as [`CommentOptions::load`], minus the missing-file case.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_figment(Figment::new().merge(Toml::string(source)))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let file: OptionsFile = figment.extract()?;
        let mut options = Self::new();
        for (key, value) in file.comment_generator {
            let value = scalar_to_string(&key, &value)?;
            options.insert(key, value);
        }

        // Env keys arrive lowercased, so they are matched back to a known spelling.
        let env: BTreeMap<String, Value> = Figment::from(Env::prefixed(ENV_PREFIX)).extract()?;
        for (key, value) in env {
            let key = options.canonical_key(&key);
            let value = scalar_to_string(&key, &value)?;
            tracing::debug!("Option '{}' overridden from environment", key);
            options.insert(key, value);
        }
        Ok(options)
    }

    /// Spelling to store an environment key under: a recognized option
    /// name, else an existing key matching case-insensitively, else `key`
    /// lowercased.
    fn canonical_key(&self, key: &str) -> String {
        RECOGNIZED_KEYS
            .iter()
            .copied()
            .chain(self.entries.keys().map(String::as_str))
            .find(|known| known.eq_ignore_ascii_case(key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_ascii_lowercase())
    }
}

impl<K, V> FromIterator<(K, V)> for CommentOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        options.extend(iter);
        options
    }
}

impl<K, V> Extend<(K, V)> for CommentOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Flags derived from [`CommentOptions`].
///
/// Built by a pure parse so that the builder never toggles flags in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentSettings {
    /// Never write the date into a comment.
    pub suppress_date: bool,
    /// Never write any comment at all.
    pub suppress_all_comments: bool,
}

impl CommentSettings {
    pub fn from_options(options: &CommentOptions) -> Self {
        Self {
            suppress_date: is_true(options.get(SUPPRESS_DATE)),
            suppress_all_comments: is_true(options.get(SUPPRESS_ALL_COMMENTS)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    #[serde(default)]
    comment_generator: BTreeMap<String, Value>,
}

/// Scalar forms accepted for an option value in TOML or the environment.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionValue {
    Text(String),
    Flag(bool),
    Integer(i64),
    Float(f64),
}

impl OptionValue {
    fn into_string(self) -> String {
        match self {
            OptionValue::Text(text) => text,
            OptionValue::Flag(flag) => flag.to_string(),
            OptionValue::Integer(number) => number.to_string(),
            // Debug keeps the fractional part, so `1.0` stays `1.0`.
            OptionValue::Float(number) => format!("{:?}", number),
        }
    }
}

fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    value
        .deserialize::<OptionValue>()
        .map(OptionValue::into_string)
        .map_err(|_| ConfigError::invalid_value(key, "expected a string, boolean or number"))
}
