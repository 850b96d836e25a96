//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the config override flags shared by every command.
fn with_config_args(cmd: Command) -> Command {
    cmd.arg(config_arg())
        .arg(output_dir_arg())
        .arg(file_case_arg())
        .arg(file_suffix_arg())
        .arg(builder_suffix_arg())
        .arg(default_string_arg())
        .arg(default_number_arg())
        .arg(default_boolean_arg())
        .arg(jsdoc_tag_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("databuilders")
        .about("Generate fluent test data builders for TypeScript types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(init_command())
}

/// Generate builders into the output directory.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate one builder per declaration of a shape manifest")
        .override_usage(
            "\
  databuilders generate <MANIFEST> [OPTIONS]
  databuilders generate - < shapes.json",
        )
        .after_help(
            r#"EXAMPLES:
  databuilders generate shapes.json                  # write to generated/builders
  databuilders generate shapes.json -o test/builders # custom output directory
  databuilders generate shapes.json --file-case pascal
  databuilders generate shapes.json --dry-run        # print instead of writing"#,
        )
        .arg(manifest_path_arg())
        .arg(dry_run_arg());

    with_config_args(cmd)
}

/// Validate a manifest without writing anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that builders can be generated for every declaration")
        .override_usage("  databuilders check <MANIFEST> [OPTIONS]")
        .after_help(
            r#"EXAMPLES:
  databuilders check shapes.json      # silent on success
  databuilders check - < shapes.json  # read the manifest from stdin"#,
        )
        .arg(manifest_path_arg());

    with_config_args(cmd)
}

/// Write a config file with every setting spelled out.
pub fn init_command() -> Command {
    let cmd = Command::new("init")
        .about("Write databuilders.json with the resolved configuration")
        .after_help(
            r#"EXAMPLES:
  databuilders init                          # defaults
  databuilders init -o test/builders --force # overwrite with a custom output directory"#,
        )
        .arg(force_arg());

    with_config_args(cmd)
}
