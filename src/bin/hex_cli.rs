//! Terminal front end: play Hex by typing `row col` coordinates.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hex::config::DEFAULT_CONFIG_PATH;
use hex::{Game, GameConfig, GameError, MoveStrategy, Opponent, Pos, RandomStrategy, Stone};

/// Play Hex in the terminal.
#[derive(Parser)]
#[command(name = "hex-cli", version, about = "Play Hex in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the board size
    #[arg(long)]
    size: Option<usize>,

    /// Override the random opponent's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Color to play against the computer: blue or red
    #[arg(long)]
    human: Option<String>,

    /// Two people share the terminal, no computer
    #[arg(long)]
    pvp: bool,
}

fn parse_color(name: &str) -> Result<Stone> {
    match name.to_ascii_lowercase().as_str() {
        "blue" => Ok(Stone::Blue),
        "red" => Ok(Stone::Red),
        other => bail!("unknown color '{}' (expected 'blue' or 'red')", other),
    }
}

/// Parse a `row col` line into a position.
fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(name) = &cli.human {
        config.human = parse_color(name)?;
    }
    if cli.pvp {
        config.opponent = Opponent::Human;
    }
    config.validate().context("invalid settings")?;

    play(&config)
}

fn play(config: &GameConfig) -> Result<()> {
    let mut game = Game::new(config.board_size);
    let mut computer = RandomStrategy::with_seed(config.seed);
    let computer_color = config.computer();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!("Blue joins West to East, Red joins North to South.");
    println!("Start position:");
    print!("{}", game.board());

    while !game.is_over() {
        let turn = game.current_turn();

        if computer_color == Some(turn) {
            let Some(pos) = computer.select_move(game.board(), turn) else {
                bail!("computer found no empty cell on an undecided board");
            };
            game.play(pos).context("computer move rejected")?;
            println!("Computer ({}) moves: {}", turn.name(), pos);
            print!("{}", game.board());
            continue;
        }

        print!("{} to move (row col): ", turn.name());
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            println!("Input closed, leaving the game.");
            return Ok(());
        };
        let line = line.context("reading move from stdin")?;

        let Some(pos) = parse_move(&line) else {
            println!("Invalid entry, expecting two numbers.");
            continue;
        };

        match game.play(pos) {
            Ok(_) => print!("{}", game.board()),
            Err(GameError::Move(err)) => println!("{}", err),
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(winner) = game.winner() {
        println!("{} has won the game.", winner.name());
        if let Some(path) = game.winning_path() {
            let cells: Vec<String> = path.iter().map(Pos::to_string).collect();
            println!("Winning chain: {}", cells.join(" "));
        }
    }

    Ok(())
}
