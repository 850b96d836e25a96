use std::fs;

use databuilders_compiler::ConfigFile;

use super::config_resolver::ConfigOverrides;

pub struct InitArgs {
    pub force: bool,
    pub overrides: ConfigOverrides,
}

pub fn run(args: InitArgs) {
    let path = args.overrides.config_file();
    if path.exists() && !args.force {
        eprintln!(
            "error: '{}' already exists (use --force to overwrite)",
            path.display()
        );
        std::process::exit(1);
    }

    // Flags layer over the existing file, so `init --force -o dir` edits it.
    let config = match args.overrides.resolve_allow_missing() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let json = ConfigFile::from_config(&config).to_json();
    if let Err(e) = fs::write(&path, json) {
        eprintln!("error: failed to write '{}': {}", path.display(), e);
        std::process::exit(1);
    }
    tracing::info!(path = %path.display(), "wrote config file");
}
