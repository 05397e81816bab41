mod config;
mod error;
mod game;
mod input;
mod parse;
mod player;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::game::Game;

fn main() {
    let config = Config::parse_args();
    init_tracing();

    config.apply_color_choice();

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> error::Result<()> {
    let mut input = input::Editor::new()?;
    let mut game = Game::new(config.rules(), config.theme());
    game.run(&mut input, &mut io::stdout())?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
