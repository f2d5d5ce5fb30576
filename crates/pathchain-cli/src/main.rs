mod cli;
mod commands;

use cli::{DumpParams, RenderParams, TermsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            commands::init_logging(params.common.verbose);
            commands::render::run(params.into());
        }
        Some(("terms", m)) => {
            let params = TermsParams::from_matches(m);
            commands::init_logging(params.common.verbose);
            commands::terms::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::init_logging(params.common.verbose);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
