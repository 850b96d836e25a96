//! Configuration layering: built-in defaults < config file < CLI flags.

use std::path::PathBuf;

use databuilders_compiler::config::CONFIG_FILE_NAME;
use databuilders_compiler::{Config, ConfigFile};
use databuilders_core::FileCase;

/// Values given on the command line. `None` leaves the lower layers in place.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub file_case: Option<FileCase>,
    pub file_suffix: Option<String>,
    pub builder_suffix: Option<String>,
    pub default_string: Option<String>,
    pub default_number: Option<f64>,
    pub default_boolean: Option<bool>,
    pub jsdoc_tag: Option<String>,
}

impl ConfigOverrides {
    /// Config file location: the explicit `--config`, else `./databuilders.json`.
    pub fn config_file(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Resolve the configuration. An explicit config file must exist.
    pub fn resolve(&self) -> Result<Config, String> {
        self.layer(true)
    }

    /// Resolve the configuration, treating a missing config file as empty.
    pub fn resolve_allow_missing(&self) -> Result<Config, String> {
        self.layer(false)
    }

    fn layer(&self, require_explicit: bool) -> Result<Config, String> {
        let path = self.config_file();
        let file = ConfigFile::read(&path).map_err(|e| e.to_string())?;
        if file.is_none() && require_explicit && self.config_path.is_some() {
            return Err(format!("config file '{}' not found", path.display()));
        }

        let mut config = Config::new();
        if let Some(file) = &file {
            config = config.merge_file(file);
        }
        let config = self.apply(config);
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.output_dir {
            config = config.output_dir(dir.clone());
        }
        if let Some(case) = self.file_case {
            config = config.file_case(case);
        }
        if let Some(suffix) = &self.file_suffix {
            config = config.file_suffix(suffix.clone());
        }
        if let Some(suffix) = &self.builder_suffix {
            config = config.builder_suffix(suffix.clone());
        }
        if let Some(value) = &self.default_string {
            config = config.default_string(value.clone());
        }
        if let Some(value) = self.default_number {
            config = config.default_number(value);
        }
        if let Some(value) = self.default_boolean {
            config = config.default_boolean(value);
        }
        if let Some(tag) = &self.jsdoc_tag {
            config = config.jsdoc_tag(tag.clone());
        }
        config
    }
}
