//! Generation settings.
//!
//! Values resolve in three layers: built-in defaults, then the JSON config
//! file (`databuilders.json`), then explicit overrides from the caller.

use std::fs;
use std::path::{Component, Path, PathBuf};

use databuilders_core::FileCase;
use databuilders_core::utils::{is_identifier, to_file_slug};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "databuilders.json";

/// Defaults used for `string`, `number` and `boolean` fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub string: String,
    pub number: f64,
    pub boolean: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            string: String::new(),
            number: 0.0,
            boolean: false,
        }
    }
}

/// Configuration for builder generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory receiving the generated files (recreated per session)
    pub(crate) output_dir: PathBuf,
    /// Appended to the file slug of every builder file
    pub(crate) file_suffix: String,
    /// Naming convention for file slugs
    pub(crate) file_case: FileCase,
    /// Appended to the type name to form the builder class name
    pub(crate) builder_suffix: String,
    pub(crate) defaults: Defaults,
    /// Doc-comment tag a declaration must carry; `None` accepts every one
    pub(crate) jsdoc_tag: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated/builders"),
            file_suffix: ".builder".to_string(),
            file_case: FileCase::default(),
            builder_suffix: "Builder".to_string(),
            defaults: Defaults::default(),
            jsdoc_tag: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.output_dir = value.into();
        self
    }

    pub fn file_suffix(mut self, value: impl Into<String>) -> Self {
        self.file_suffix = value.into();
        self
    }

    pub fn file_case(mut self, value: FileCase) -> Self {
        self.file_case = value;
        self
    }

    pub fn builder_suffix(mut self, value: impl Into<String>) -> Self {
        self.builder_suffix = value.into();
        self
    }

    pub fn default_string(mut self, value: impl Into<String>) -> Self {
        self.defaults.string = value.into();
        self
    }

    pub fn default_number(mut self, value: f64) -> Self {
        self.defaults.number = value;
        self
    }

    pub fn default_boolean(mut self, value: bool) -> Self {
        self.defaults.boolean = value;
        self
    }

    /// Only generate builders for declarations tagged `@tag`.
    pub fn jsdoc_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.jsdoc_tag = Some(tag.strip_prefix('@').map(str::to_string).unwrap_or(tag));
        self
    }

    /// Resolve a relative output directory against `base`.
    pub fn anchor_output_dir(mut self, base: &Path) -> Self {
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        self
    }

    /// Layer a config file over this configuration. Keys absent from the file
    /// keep their current value.
    pub fn merge_file(mut self, file: &ConfigFile) -> Self {
        if let Some(dir) = &file.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(suffix) = &file.file_suffix {
            self.file_suffix = suffix.clone();
        }
        if let Some(case) = file.file_case {
            self.file_case = case;
        }
        if let Some(suffix) = &file.builder_suffix {
            self.builder_suffix = suffix.clone();
        }
        if let Some(tag) = &file.jsdoc_tag {
            self = self.jsdoc_tag(tag.clone());
        }
        if let Some(defaults) = &file.defaults {
            if let Some(string) = &defaults.string {
                self.defaults.string = string.clone();
            }
            if let Some(number) = defaults.number {
                self.defaults.number = number;
            }
            if let Some(boolean) = defaults.boolean {
                self.defaults.boolean = boolean;
            }
        }
        self
    }

    /// Reject values that would produce unusable TypeScript or file names.
    pub fn validate(&self) -> Result<()> {
        // Removed on every run, so `.`, `/` and the empty path are refused.
        if !self
            .output_dir
            .components()
            .any(|c| matches!(c, Component::Normal(_)))
        {
            return Err(Error::Config(format!(
                "output directory '{}' must name a dedicated directory",
                self.output_dir.display()
            )));
        }
        let suffix = self.file_suffix.trim();
        if suffix.is_empty() || suffix.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "file suffix '{}' must be non-empty and contain no path separators",
                self.file_suffix
            )));
        }
        if !is_identifier(&format!("A{}", self.builder_suffix)) || self.builder_suffix.is_empty() {
            return Err(Error::Config(format!(
                "builder suffix '{}' must be a non-empty identifier part",
                self.builder_suffix
            )));
        }
        if !self.defaults.number.is_finite() {
            return Err(Error::Config(format!(
                "default number {} is not finite",
                self.defaults.number
            )));
        }
        if let Some(tag) = &self.jsdoc_tag
            && (tag.is_empty() || tag.contains(char::is_whitespace))
        {
            return Err(Error::Config(format!(
                "jsdoc tag '{tag}' must be a single non-empty word"
            )));
        }
        Ok(())
    }

    pub(crate) fn builder_name(&self, type_name: &str) -> String {
        format!("{type_name}{}", self.builder_suffix)
    }

    /// Module stem of the builder generated for `type_name`: `user.builder`.
    pub(crate) fn builder_stem(&self, type_name: &str) -> String {
        format!(
            "{}{}",
            to_file_slug(type_name, self.file_case),
            self.file_suffix
        )
    }

    pub(crate) fn base_builder_stem(&self) -> String {
        to_file_slug(BASE_BUILDER_NAME, self.file_case)
    }
}

/// Name of the shared base class every builder extends.
pub const BASE_BUILDER_NAME: &str = "DataBuilder";

/// On-disk configuration. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_case: Option<FileCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsdoc_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsFile>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
}

impl ConfigFile {
    /// Parse config file JSON.
    pub fn parse(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a config file. A missing file is not an error.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file found");
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "reading config file");
        let content = fs::read_to_string(path).map_err(|e| Error::io("read", path, e))?;
        let file = Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Ok(Some(file))
    }

    /// Fully populated file content for a resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: Some(config.output_dir.clone()),
            file_suffix: Some(config.file_suffix.clone()),
            file_case: Some(config.file_case),
            builder_suffix: Some(config.builder_suffix.clone()),
            jsdoc_tag: config.jsdoc_tag.clone(),
            defaults: Some(DefaultsFile {
                string: Some(config.defaults.string.clone()),
                number: Some(config.defaults.number),
                boolean: Some(config.defaults.boolean),
            }),
        }
    }

    pub fn to_json(&self) -> String {
        // Infallible for this struct.
        let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
        json.push('\n');
        json
    }
}
