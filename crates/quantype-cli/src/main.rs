mod cli;
mod commands;

use cli::{RewrapParams, TypeParams, build_cli};
use log::LevelFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("show", m)) => {
            let params = TypeParams::from_matches(m);
            commands::show::run(params.into());
        }
        Some(("unwrap", m)) => {
            let params = TypeParams::from_matches(m);
            commands::unwrap::run(params.into());
        }
        Some(("rewrap", m)) => {
            let params = RewrapParams::from_matches(m);
            commands::rewrap::run(params.into());
        }
        Some(("rename", m)) => {
            let params = TypeParams::from_matches(m);
            commands::rename::run(params.into());
        }
        Some(("tail", m)) => {
            let params = TypeParams::from_matches(m);
            commands::tail::run(params.into());
        }
        Some(("identity", m)) => {
            let params = TypeParams::from_matches(m);
            commands::identity::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `-v` enables debug records, `-vv` trace; `RUST_LOG` takes precedence.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
