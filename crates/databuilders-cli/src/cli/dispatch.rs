//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use databuilders_core::FileCase;

use crate::commands::check::CheckArgs;
use crate::commands::config_resolver::ConfigOverrides;
use crate::commands::generate::GenerateArgs;
use crate::commands::init::InitArgs;

/// Config flags shared by every command.
pub struct ConfigParams {
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub file_case: Option<FileCase>,
    pub file_suffix: Option<String>,
    pub builder_suffix: Option<String>,
    pub default_string: Option<String>,
    pub default_number: Option<f64>,
    pub default_boolean: Option<bool>,
    pub jsdoc_tag: Option<String>,
}

impl ConfigParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            output_dir: m.get_one::<PathBuf>("output_dir").cloned(),
            // Restricted to valid names by the value parser.
            file_case: m
                .get_one::<String>("file_case")
                .and_then(|case| case.parse().ok()),
            file_suffix: m.get_one::<String>("file_suffix").cloned(),
            builder_suffix: m.get_one::<String>("builder_suffix").cloned(),
            default_string: m.get_one::<String>("default_string").cloned(),
            default_number: m.get_one::<f64>("default_number").copied(),
            default_boolean: m.get_one::<bool>("default_boolean").copied(),
            jsdoc_tag: m.get_one::<String>("jsdoc_tag").cloned(),
        }
    }
}

impl From<ConfigParams> for ConfigOverrides {
    fn from(p: ConfigParams) -> Self {
        Self {
            config_path: p.config,
            output_dir: p.output_dir,
            file_case: p.file_case,
            file_suffix: p.file_suffix,
            builder_suffix: p.builder_suffix,
            default_string: p.default_string,
            default_number: p.default_number,
            default_boolean: p.default_boolean,
            jsdoc_tag: p.jsdoc_tag,
        }
    }
}

pub struct GenerateParams {
    pub manifest: PathBuf,
    pub dry_run: bool,
    pub config: ConfigParams,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            dry_run: m.get_flag("dry_run"),
            config: ConfigParams::from_matches(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            manifest: p.manifest,
            dry_run: p.dry_run,
            overrides: p.config.into(),
        }
    }
}

pub struct CheckParams {
    pub manifest: PathBuf,
    pub config: ConfigParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            config: ConfigParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            manifest: p.manifest,
            overrides: p.config.into(),
        }
    }
}

pub struct InitParams {
    pub force: bool,
    pub config: ConfigParams,
}

impl InitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            force: m.get_flag("force"),
            config: ConfigParams::from_matches(m),
        }
    }
}

impl From<InitParams> for InitArgs {
    fn from(p: InitParams) -> Self {
        Self {
            force: p.force,
            overrides: p.config.into(),
        }
    }
}

/// Required by clap; `-` when absent keeps the extractor total.
fn manifest_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
