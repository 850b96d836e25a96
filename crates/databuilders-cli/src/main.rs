mod cli;
mod commands;

use cli::{CheckParams, GenerateParams, InitParams, build_cli};
use tracing::Level;

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this");
    };
    init_tracing(m.get_count("verbose"));

    match name {
        "generate" => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "init" => {
            let params = InitParams::from_matches(m);
            commands::init::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr: warnings by default, `-v` for debug, `-vv` for trace.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
