//! Counting Out - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use counting_out::{Console, GameConfig, GameSetup, solve};
use std::io::{self, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { players, step } => run_play(&config, players, step),
        Command::Solve {
            players,
            step,
            json,
        } => run_solve(&config, players, step, json),
    }
}

/// Run the interactive console on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &GameConfig, players: Option<usize>, step: Option<usize>) -> Result<()> {
    info!("Starting interactive game");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);
    console.run(
        players.or(*config.default_players()),
        step.or(*config.default_step()),
    )
}

/// Play a whole game and print the result
#[instrument(skip(config))]
fn run_solve(
    config: &GameConfig,
    players: Option<usize>,
    step: Option<usize>,
    json: bool,
) -> Result<()> {
    let Some(players) = players.or(*config.default_players()) else {
        bail!("N is required: pass -n or set default_players in the config");
    };
    let Some(step) = step.or(*config.default_step()) else {
        bail!("K is required: pass -k or set default_step in the config");
    };

    let setup = GameSetup::new(players, step, &config.bounds())?;
    let summary = solve(setup);
    info!(winner = ?summary.winner(), "Game solved");

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "The game started with N={} players, K={} steps",
            summary.players(),
            summary.step()
        )?;
        for player in summary.order() {
            writeln!(out, "Eliminated player: {}", player.labeled(config.label()))?;
        }
        if let Some(winner) = summary.winner() {
            writeln!(out, "The winner is {}!", winner.labeled(config.label()))?;
        }
    }
    Ok(())
}
