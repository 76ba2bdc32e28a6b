//! Tic-tac-toe against a perfect-play minimax engine.
//!
//! Plays interactive games in the terminal, analyzes single positions, and
//! runs batch matches of the engine against a random opponent.

mod config;
mod matchup;
mod session;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::PlayConfig;
use log::{debug, warn};
use session::GameSession;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;
use tictactoe_core::{evaluate, Board, Mark, TicTacToeError};
use tictactoe_search::{analyze, best_move};

/// Tic-tac-toe against a minimax engine.
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect-play computer opponent")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal.
    Play {
        /// Pause before the computer moves, in milliseconds.
        #[arg(short, long, default_value_t = config::DEFAULT_AI_DELAY_MS)]
        delay_ms: u64,

        /// Let the computer make the first move.
        #[arg(long)]
        computer_first: bool,

        /// Number cells 0-8 instead of 1-9.
        #[arg(long)]
        zero_based: bool,
    },

    /// Print the computer's move for a position.
    BestMove {
        /// Nine cells row-major: X, O, and . or _ for empty (e.g. "XX_.O....").
        board: String,

        /// Also print the minimax score of every legal move.
        #[arg(short, long)]
        scores: bool,
    },

    /// Play the engine against a random opponent.
    Match {
        /// Number of games to play.
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Let the engine make the first move of every game.
        #[arg(long)]
        computer_first: bool,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Draw the board with cell numbers in empty cells.
fn render(board: &Board, zero_based: bool) -> String {
    let offset = if zero_based { 0 } else { 1 };
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let cell = row * 3 + col;
                match board.get(cell) {
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", cell + offset),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Mark(usize),
    Reset,
    Quit,
}

fn parse_command(line: &str, zero_based: bool) -> Option<Command> {
    match line.trim() {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "r" | "reset" => Some(Command::Reset),
        other => {
            let n: usize = other.parse().ok()?;
            if zero_based {
                Some(Command::Mark(n))
            } else {
                n.checked_sub(1).map(Command::Mark)
            }
        }
    }
}

/// Run the play command.
fn cmd_play(config: PlayConfig, zero_based: bool) -> Result<()> {
    let mut session = GameSession::new(config.first_mover());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let (low, high) = if zero_based { (0, 8) } else { (1, 9) };

    println!("You are {}, the computer is {}.", Mark::Player, Mark::Opponent);
    println!("Enter a cell {}-{}, 'r' to reset, 'q' to quit.\n", low, high);

    loop {
        if session.is_active() && session.to_move() == Mark::Opponent {
            println!("{}", session.status());
            if !config.ai_delay.is_zero() {
                thread::sleep(config.ai_delay);
            }
            let cell = session
                .computer_move()
                .context("Computer failed to move")?;
            println!("Computer marks cell {}.", cell + low);
            continue;
        }

        println!("{}", render(session.board(), zero_based));
        println!("{}", session.status());
        if !session.is_active() {
            debug!("game finished: {}", session.outcome());
            print!("'r' to play again, 'q' to quit: ");
        } else {
            print!("> ");
        }
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("Failed to read input")?;

        match parse_command(&line, zero_based) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Reset) => session.reset(),
            Some(Command::Mark(cell)) => match session.human_move(cell) {
                Ok(_) => {}
                Err(TicTacToeError::CellOccupied(_)) => println!("That cell is taken."),
                Err(TicTacToeError::InvalidCell(_)) => {
                    println!("Pick a cell from {} to {}.", low, high)
                }
                Err(TicTacToeError::GameOver(_)) => println!("The game is over."),
                Err(e) => return Err(e).context("Move rejected"),
            },
            None => {
                debug!("ignoring input {:?}", line);
                println!("Enter a cell {}-{}, 'r' or 'q'.", low, high);
            }
        }
    }
}

/// Run the best-move command.
fn cmd_best_move(board: &str, scores: bool) -> Result<()> {
    let mut board: Board = board
        .parse()
        .with_context(|| format!("Failed to parse board {:?}", board))?;

    let outcome = evaluate(&board);
    print!("{}", board);
    println!("Outcome: {}", outcome);

    if outcome.is_terminal() {
        bail!("Game is already over ({}), no move to make", outcome);
    }

    let (x, o) = (board.count(Mark::Player), board.count(Mark::Opponent));
    if o > x || x > o + 1 {
        warn!("mark counts X={} O={} cannot arise with alternating turns", x, o);
    }

    let start = Instant::now();
    if scores {
        let analysis = analyze(&mut board).context("Search failed")?;
        for m in &analysis.moves {
            println!("  cell {}: {:+}", m.cell, m.score);
        }
        debug!("{} nodes searched", analysis.stats.nodes);
    }
    let cell = best_move(&mut board).context("Search failed")?;
    debug!("search took {:.2?}", start.elapsed());

    println!("Best move: {}", cell);
    Ok(())
}

/// Run the match command.
fn cmd_match(games: usize, seed: u64, computer_first: bool, json: bool) -> Result<()> {
    let start = Instant::now();
    let summary =
        matchup::run_match(games, seed, computer_first).context("Match aborted")?;
    let elapsed = start.elapsed();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        );
        return Ok(());
    }

    let pct = |n: usize| {
        if summary.total_games == 0 {
            0.0
        } else {
            n as f32 / summary.total_games as f32 * 100.0
        }
    };

    println!(
        "Played {} games (engine {}) in {:.2}s",
        summary.total_games,
        if computer_first { "first" } else { "second" },
        elapsed.as_secs_f64()
    );
    println!("================================================");
    println!("Engine wins: {} ({:.1}%)", summary.engine_wins, pct(summary.engine_wins));
    println!("Random wins: {} ({:.1}%)", summary.random_wins, pct(summary.random_wins));
    println!("Draws:       {} ({:.1}%)", summary.draws, pct(summary.draws));
    println!("------------------------------------------------");
    println!("Unbeaten: {:.1}%", summary.unbeaten_rate() * 100.0);

    if summary.random_wins > 0 {
        warn!("engine lost {} games", summary.random_wins);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            delay_ms,
            computer_first,
            zero_based,
        } => {
            let mut config = PlayConfig::with_delay_ms(delay_ms);
            if computer_first {
                config = config.computer_first();
            }
            cmd_play(config, zero_based)
        }

        Commands::BestMove { board, scores } => cmd_best_move(&board, scores),

        Commands::Match {
            games,
            seed,
            computer_first,
            json,
        } => cmd_match(games, seed, computer_first, json),
    }
}
