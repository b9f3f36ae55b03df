//! The game module drives a game on the terminal. It owns the command-line interface, the logging
//! setup and the main loop, and it leaves every rule to the engine.
//!
//! The loop is a plain alternation: draw the board from a fresh snapshot, then ask for the one
//! input the engine accepts in its current phase.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use indicatif::ProgressBar;
use tracing::{debug, info, Level};

use crate::engine::{GameEngine, Phase, RollOutcome, Verdict};
use crate::input::{play_again, take_answer, take_turn_action, TurnAction};
use crate::messages::{announce_winner, describe_roll, draw_board};

/// How long the die spins before it lands.
const ROLL_TIME: Duration = Duration::from_millis(600);

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. Every option can also be set through the environment.
#[derive(Parser)]
#[command(name = "mathdice", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// Print engine events to stderr at this level (error, warn, info, debug or trace).
    ///
    /// Nothing is logged when this is not set, so the board stays the only thing on the screen.
    #[arg(long, env = "MATHDICE_LOG", value_name = "LEVEL")]
    log_level: Option<Level>,
    /// Land the die immediately instead of spinning it for a moment first.
    #[arg(long)]
    no_animation: bool,
    /// Seed the random number generator, so the same seed replays the same rolls and questions.
    #[arg(short, long, env = "MATHDICE_SEED", value_name = "SEED")]
    seed: Option<u64>,
}

/// This enum holds the errors that can stop a session before it starts.
#[derive(thiserror::Error, Debug)]
enum SessionError {
    /// The log subscriber could not be installed.
    #[error("could not set up logging: {0}")]
    Logging(String),
}

/// Initializes the game state and runs games until the players quit. This is a `main()` function of
/// sorts though it is still called from main.rs.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - mathdice::SessionError
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    if let Some(level) = cli.log_level {
        init_logging(level)?;
    }

    let term = Term::stdout();
    let mut engine: GameEngine = match cli.seed {
        Some(seed) => GameEngine::seeded(seed),
        None => GameEngine::default(),
    };
    let mut event = String::new();
    info!(seed = ?cli.seed, "starting a new game");

    init_message(&term)?;

    // game loop
    loop {
        let view = engine.snapshot();
        draw_board(&term, &view, &event)?;
        event.clear();

        match view.phase() {
            Phase::AwaitingRoll => {
                if take_turn_action(&term, view.current_player)? == TurnAction::Quit {
                    term.show_cursor()?;
                    break Ok(());
                }

                if let Some(outcome) = roll_die(&mut engine, !cli.no_animation) {
                    event = describe_roll(view.current_player, &outcome);
                }
            }
            Phase::AwaitingAnswer => {
                let raw = take_answer(&term, &view.question_text)?;
                let Some(outcome) = engine.submit_answer(&raw) else {
                    continue;
                };

                if outcome.verdict == Verdict::NotANumber {
                    event = outcome.message;
                } else if let Some(winner) = outcome.winner {
                    announce_winner(&term, &outcome.message, &winner)?;

                    if !play_again(&term)? {
                        term.show_cursor()?;
                        break Ok(());
                    }
                    debug!("starting another game");
                }
            }
        }
    }
}

/// This function installs a formatting subscriber writing to stderr, so that log lines never end up
/// in the middle of the board.
fn init_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| SessionError::Logging(err.to_string()))?;

    Ok(())
}

/// This function shows the welcome message. The screen is cleared and the title of the console
/// window is set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to mathdice: first to 20 points wins";

    term.clear_screen()?;
    term.set_title("mathdice");
    term.write_line(&format!("{}", style(MSG).bold()))?;

    Ok(())
}

/// This function rolls the die, spinning a short animation first when `animate` is set.
fn roll_die(engine: &mut GameEngine, animate: bool) -> Option<RollOutcome> {
    if animate {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Rolling...");
        spinner.enable_steady_tick(Duration::from_millis(50));
        thread::sleep(ROLL_TIME);
        spinner.finish_and_clear();
    }

    engine.roll()
}
