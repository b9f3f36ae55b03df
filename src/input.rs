//! This module contains all functions related to taking input from the players. They all use the
//! `dialoguer` crate to draw the prompts.
//!
//! Answers are deliberately taken as raw text; validating them is the engine's job, so a typo ends
//! up as a "not a number" notification instead of a silent re-prompt.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::engine::Player;

/// This enum holds the choices offered to a player whose turn it is to roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TurnAction {
    /// This variant is used when the player leaves the game.
    Quit,
    /// This variant is used when the player rolls the die.
    Roll,
}

/// This function asks `player` whether to roll the die or leave the game.
pub(crate) fn take_turn_action(term: &Term, player: Player) -> Result<TurnAction> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style(format!("{player}, your move")).bold()))
        .items(&["Roll the die", "Quit"])
        .default(0)
        .interact_on(term)?;

    Ok(if choice == 0 {
        TurnAction::Roll
    } else {
        TurnAction::Quit
    })
}

/// This function takes the answer to `question` exactly as it was typed.
pub(crate) fn take_answer(term: &Term, question: &str) -> Result<String> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style(format!("{question} =")).bold()))
        .interact_text_on(term)?;

    Ok(answer)
}

/// This function asks whether the players want another game after a win.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    let again = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Play another game?").bold()))
        .default(true)
        .interact_on(term)?;

    Ok(again)
}
