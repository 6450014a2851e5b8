//! Score-sheet runner (default binary).
//!
//! Feeds rolls from the command line or stdin into a game, then prints the
//! score sheet (or a JSON snapshot).

mod cli;

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tenpin::core::Game;
use tenpin::input::{parse_roll_args, parse_rolls};
use tenpin::term::{write_lines, ScoreboardView};

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rolls = if cli.stdin {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read rolls from stdin")?;
        parse_rolls(&text).context("invalid rolls on stdin")?
    } else {
        parse_roll_args(&cli.rolls).context("invalid rolls")?
    };

    let game = play(&rolls, cli.lenient)?;
    info!(
        rolls = rolls.len(),
        score = game.score(),
        finished = game.has_finished(),
        "game scored"
    );

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &game.snapshot())
                .context("failed to write snapshot")?;
            writeln!(stdout)?;
        }
        OutputFormat::Text => {
            let color = !cli.no_color
                && std::env::var_os("NO_COLOR").is_none()
                && io::stdout().is_terminal();
            let fb = ScoreboardView.render(&game.snapshot());
            write_lines(&fb, &mut stdout, color)?;
        }
    }

    if cli.dump {
        writeln!(stdout, "{game}")?;
    }
    Ok(())
}

fn play(rolls: &[u8], lenient: bool) -> Result<Game> {
    let mut game = Game::new();
    for (i, &pins) in rolls.iter().enumerate() {
        match game.try_roll(pins) {
            Ok(()) => {}
            Err(err) if lenient => {
                warn!(roll = i + 1, pins, code = err.code(), "skipping rejected roll: {err}");
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("roll #{} ({} pins) rejected", i + 1, pins));
            }
        }
    }
    Ok(game)
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so stdout stays clean for the sheet or JSON.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
