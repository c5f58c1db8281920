//! Command-line dice roller for hunger pools.

mod command;
mod logging;
mod session;

use std::io;
use std::process;

use clap::Parser;

use hd_mechanics::config::DEFAULT_MAX_POOL;
use hd_mechanics::{Game, GameConfig};

use crate::session::Session;

#[derive(Parser)]
#[command(
    name = "hd",
    about = "Hunger dice roller: reads roll commands from stdin",
    version
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Largest pool a setup may ask for
    #[arg(long, default_value_t = DEFAULT_MAX_POOL)]
    max_pool: usize,

    /// Print pools as JSON snapshots instead of text
    #[arg(long)]
    json: bool,

    /// Log engine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = GameConfig::default().with_max_pool(cli.max_pool);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(seed = ?cli.seed, max_pool = config.max_pool, "session starting");

    let mut session = Session::new(Game::new(config), cli.json);
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = session::run(&mut session, stdin.lock(), stdout.lock()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
    tracing::debug!(pool = session.game().len(), "session ended");
}
