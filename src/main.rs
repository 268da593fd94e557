mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod play;
mod util;
use crate::app::App;
use crate::args::{Invocation, RunArgs, USAGE};
use crate::config::Config;
use crate::play::Play;
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args = match Invocation::from_parser(lexopt::Parser::from_env()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("powersnake: {e}");
            eprintln!("Run `powersnake --help` for usage.");
            return ExitCode::from(2);
        }
    };
    let play = match prepare(args) {
        Ok(play) => play,
        Err(e) => {
            eprintln!("powersnake: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    let r = App::new(play).run(terminal);
    ratatui::restore();
    info!("exiting");
    io_exit(r)
}

/// Load the configuration, set up logging, and create the game screen
fn prepare(args: RunArgs) -> anyhow::Result<Play> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    if let Some(path) = args.log_file.as_ref().or(config.log.file.as_ref()) {
        logging::init(path, &config.log.level).context("failed to set up logging")?;
    }
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        seed = ?args.seed,
        obstacles = config.game.obstacles,
        "starting"
    );
    Ok(Play::new(rng, config.game.obstacles))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
