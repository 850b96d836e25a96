use std::path::PathBuf;

use databuilders_compiler::{DiskWriter, MemoryWriter, SessionReport};

use super::config_resolver::ConfigOverrides;
use super::run_common::{exit_with, prepare_session};

pub struct GenerateArgs {
    pub manifest: PathBuf,
    pub dry_run: bool,
    pub overrides: ConfigOverrides,
}

pub fn run(args: GenerateArgs) {
    let (session, manifest) = prepare_session(&args.manifest, &args.overrides);

    if args.dry_run {
        let report = session
            .run(&manifest.declarations, &MemoryWriter::new())
            .unwrap_or_else(|e| exit_with(&e));
        print!("{}", render_dry_run(&report));
        return;
    }

    session
        .run(&manifest.declarations, &DiskWriter)
        .unwrap_or_else(|e| exit_with(&e));

    // Silent on success (like cargo check)
}

/// Every generated file, each under a `// <path>` header line.
pub fn render_dry_run(report: &SessionReport) -> String {
    let mut out = String::new();
    for file in report.files() {
        out.push_str(&format!("// {}\n", file.path.display()));
        out.push_str(&file.content);
        out.push('\n');
    }
    out
}
