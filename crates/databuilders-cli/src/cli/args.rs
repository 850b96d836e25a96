//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The config override flags are shared by every command that resolves a
//! configuration.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Shape manifest (positional, `-` for stdin).
pub fn manifest_path_arg() -> Arg {
    Arg::new("manifest")
        .value_name("MANIFEST")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Shape manifest JSON file, or '-' for stdin")
}

/// Config file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Config file (default: ./databuilders.json if present)")
}

/// Output directory (-o/--output-dir).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .short('o')
        .long("output-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory receiving the builders (recreated on every run)")
}

/// File naming convention (--file-case).
pub fn file_case_arg() -> Arg {
    Arg::new("file_case")
        .long("file-case")
        .value_name("CASE")
        .value_parser(["kebab", "camel", "pascal"])
        .help("Naming convention for generated files")
}

/// Builder file suffix (--file-suffix).
pub fn file_suffix_arg() -> Arg {
    Arg::new("file_suffix")
        .long("file-suffix")
        .value_name("SUFFIX")
        .allow_hyphen_values(true)
        .help("Suffix appended to builder file names (default: .builder)")
}

/// Builder class suffix (--builder-suffix).
pub fn builder_suffix_arg() -> Arg {
    Arg::new("builder_suffix")
        .long("builder-suffix")
        .value_name("SUFFIX")
        .help("Suffix appended to type names for builder classes (default: Builder)")
}

/// Default for string fields (--default-string).
pub fn default_string_arg() -> Arg {
    Arg::new("default_string")
        .long("default-string")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Default value for string fields")
}

/// Default for number fields (--default-number).
pub fn default_number_arg() -> Arg {
    Arg::new("default_number")
        .long("default-number")
        .value_name("NUMBER")
        .allow_hyphen_values(true)
        .value_parser(value_parser!(f64))
        .help("Default value for number fields")
}

/// Default for boolean fields (--default-boolean).
pub fn default_boolean_arg() -> Arg {
    Arg::new("default_boolean")
        .long("default-boolean")
        .value_name("BOOL")
        .value_parser(value_parser!(bool))
        .help("Default value for boolean fields")
}

/// Doc-comment tag selecting declarations (--jsdoc-tag).
pub fn jsdoc_tag_arg() -> Arg {
    Arg::new("jsdoc_tag")
        .long("jsdoc-tag")
        .value_name("TAG")
        .help("Only generate builders for declarations carrying this doc tag")
}

/// Print instead of writing (--dry-run).
pub fn dry_run_arg() -> Arg {
    Arg::new("dry_run")
        .long("dry-run")
        .action(ArgAction::SetTrue)
        .help("Print generated files to stdout instead of writing them")
}

/// Overwrite an existing config file (-f/--force).
pub fn force_arg() -> Arg {
    Arg::new("force")
        .short('f')
        .long("force")
        .action(ArgAction::SetTrue)
        .help("Overwrite an existing config file")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
