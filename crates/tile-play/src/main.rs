mod config;
mod input;
mod play;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use tile_engine::session::Session;

use config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play the sliding-tile merge puzzle in a terminal")]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// Grid side length (overrides the config file)
    #[arg(long, value_name = "N")]
    size: Option<usize>,

    /// RNG seed for a reproducible game (overrides the config file)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. "info", "debug". Logs go to stderr.
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log.as_str())).init();

    let mut cfg = match &args.config {
        Some(path) => {
            info!("Using configuration file: {}", path.display());
            Config::from_toml(path)?
        }
        None => Config::default(),
    };
    if let Some(size) = args.size {
        cfg.game.size = size;
    }
    if args.seed.is_some() {
        cfg.game.seed = args.seed;
    }
    cfg.output.json |= args.json;

    let mut session = Session::new(cfg.game.clone()).context("invalid game configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exit = play::run(&mut session, stdin.lock(), &mut out, cfg.output.show_help)?;
    info!("Session ended: {:?}", exit);

    let summary = session.summary();
    if cfg.output.json {
        render::summary_json(&mut out, &summary)?;
    } else {
        render::summary_text(&mut out, &summary)?;
    }
    out.flush()?;
    Ok(())
}
