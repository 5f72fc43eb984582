use clap::Parser;
use dirlist::{app, args::Args, config::Config, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("Logger error: {e}");
    }

    let config = Config::from(Args::parse());

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
