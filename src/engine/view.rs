//! This module holds the snapshot of everything the presentation layer shows.

use serde::Serialize;

use crate::engine::player::Player;

/// This enum holds the phase of a turn, which decides the one input the engine accepts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// The current player has to roll the die.
    AwaitingRoll,
    /// The current player has to answer the open question.
    AwaitingAnswer,
}

/// This structure is a read-only snapshot of the board. Taking one never changes the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// This field holds whether the answer control should accept input.
    pub answer_enabled: bool,
    /// This field holds the player whose turn it is.
    pub current_player: Player,
    /// This field holds the last face rolled, or zero before the first roll of a game.
    pub die_value: u8,
    /// This field holds the current size of the jackpot.
    pub jackpot: u32,
    /// This field holds the last notification, empty when there is none.
    pub notification_text: String,
    /// This field holds the points of the first player.
    pub player_one_score: u32,
    /// This field holds the points of the second player.
    pub player_two_score: u32,
    /// This field holds the open question, empty when none is open.
    pub question_text: String,
    /// This field holds whether the roll control should accept input.
    pub roll_enabled: bool,
}

impl GameView {
    /// This function returns the phase the snapshot was taken in.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.answer_enabled {
            Phase::AwaitingAnswer
        } else {
            Phase::AwaitingRoll
        }
    }
}
