use std::path::PathBuf;

use super::config_resolver::ConfigOverrides;
use super::run_common::{exit_with, prepare_session};

pub struct CheckArgs {
    pub manifest: PathBuf,
    pub overrides: ConfigOverrides,
}

pub fn run(args: CheckArgs) {
    let (session, manifest) = prepare_session(&args.manifest, &args.overrides);

    if let Err(e) = session.check(&manifest.declarations) {
        exit_with(&e);
    }

    // Silent on success (like cargo check)
}
