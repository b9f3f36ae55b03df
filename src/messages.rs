//! This module renders the board and the announcements on the terminal. It only ever reads from the
//! engine's snapshots and outcome records.

use anyhow::Result;
use console::{style, Term};

use crate::engine::{GameView, Player, RollOutcome, Winner};

/// The frame drawn around every die face.
const EDGE: &str = "+-------+";

/// This function returns the three inner rows of the die showing `value` pips. A value of zero,
/// meaning nothing has been rolled yet, draws an empty die.
const fn pips(value: u8) -> [&'static str; 3] {
    match value {
        1 => ["|       |", "|   o   |", "|       |"],
        2 => ["| o     |", "|       |", "|     o |"],
        3 => ["| o     |", "|   o   |", "|     o |"],
        4 => ["| o   o |", "|       |", "| o   o |"],
        5 => ["| o   o |", "|   o   |", "| o   o |"],
        6 => ["| o   o |", "| o   o |", "| o   o |"],
        _ => ["|       |", "|   ?   |", "|       |"],
    }
}

/// This function returns the line describing a roll, such as "Player 2 rolled a 4".
pub(crate) fn describe_roll(roller: Player, outcome: &RollOutcome) -> String {
    format!("{roller} rolled a {}.", outcome.die.value())
}

/// This function clears the terminal and draws the whole board: the die, both scores, the
/// jackpot, whose turn it is, the open question and the latest notifications.
pub(crate) fn draw_board(term: &Term, view: &GameView, event: &str) -> Result<()> {
    term.clear_screen()?;
    term.write_line(&format!("{}", style("mathdice").bold().underlined()))?;
    term.write_line("")?;

    term.write_line(EDGE)?;
    for row in pips(view.die_value) {
        term.write_line(row)?;
    }
    term.write_line(EDGE)?;
    term.write_line("")?;

    for (player, score) in [
        (Player::One, view.player_one_score),
        (Player::Two, view.player_two_score),
    ] {
        let line = format!("{player} Score: {score}");
        if player == view.current_player {
            term.write_line(&format!("{}", style(line).bold().cyan()))?;
        } else {
            term.write_line(&line)?;
        }
    }
    term.write_line(&format!("Jackpot: {}", style(view.jackpot).bold().yellow()))?;
    term.write_line(&format!("Current Player: {}", view.current_player.number()))?;
    term.write_line("")?;

    if !view.question_text.is_empty() {
        term.write_line(&format!("Question: {}", style(&view.question_text).bold()))?;
    }
    if !event.is_empty() {
        term.write_line(event)?;
    }
    if !view.notification_text.is_empty() {
        term.write_line(&format!("{}", style(&view.notification_text).italic()))?;
    }
    term.write_line("")?;

    Ok(())
}

/// This function shows the final notification of a game along with who won it.
pub(crate) fn announce_winner(term: &Term, message: &str, winner: &Winner) -> Result<()> {
    term.write_line("")?;
    term.write_line(message)?;
    term.write_line(&format!(
        "{}",
        style(winner.announcement()).bold().green()
    ))?;
    term.write_line("")?;

    Ok(())
}
