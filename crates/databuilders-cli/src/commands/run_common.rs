//! Shared plumbing for `generate` and `check`.

use std::path::Path;

use std::fmt::Write;

use databuilders_compiler::{Error, Session};
use databuilders_core::Manifest;

use super::config_resolver::ConfigOverrides;
use super::manifest_loader::{anchor_paths, load_manifest};

/// Resolve the configuration, load the manifest and open a session.
///
/// Relative paths (output directory, declaration sources) are anchored at
/// the working directory so import specifiers are computed in one frame.
/// Exits the process on failure.
pub fn prepare_session(manifest_path: &Path, overrides: &ConfigOverrides) -> (Session, Manifest) {
    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("error: cannot determine working directory: {}", e);
        std::process::exit(1);
    });

    let config = overrides.resolve().unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });
    let config = config.anchor_output_dir(&cwd);

    let mut manifest = load_manifest(manifest_path).unwrap_or_else(|e| exit_with(&e));
    anchor_paths(&mut manifest, &cwd);
    tracing::debug!(
        declarations = manifest.declarations.len(),
        manifest = %manifest_path.display(),
        "loaded manifest"
    );

    let session = Session::new(config).unwrap_or_else(|e| exit_with(&e));
    (session, manifest)
}

/// Print an error (and every diagnostic it carries) and exit.
pub fn exit_with(err: &Error) -> ! {
    eprint!("{}", render_error(err));
    std::process::exit(1);
}

pub fn render_error(err: &Error) -> String {
    let mut out = format!("error: {err}\n");
    if let Error::Generation(diagnostics) = err {
        for diagnostic in diagnostics {
            let _ = writeln!(out, "  {diagnostic}");
        }
    }
    out
}
